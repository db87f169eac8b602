#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod circuit;
pub mod command;
pub mod config;
pub mod connection;
pub mod editor;
pub mod error;
pub mod gate;
pub mod input;
pub mod panels;
pub mod port_map;
pub mod renderer;
pub mod scene;
pub mod state;

pub use app::GateEditorApp;
pub use circuit::Circuit;
pub use command::Command;
pub use config::EditorConfig;
pub use connection::{Connection, ConnectionId};
pub use editor::Editor;
pub use error::{ConfigError, WiringError};
pub use gate::{Gate, GateId, Port, PortId, PortKind};
pub use input::{InputEvent, InputHandler, PointerSnapshot};
pub use port_map::{is_valid_connection, validate_connection, PortMap};
pub use renderer::Renderer;
pub use scene::{Scene, SceneNode};
pub use state::WiringState;
