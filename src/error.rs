use thiserror::Error;

use crate::gate::{GateId, PortId};

/// Reasons a wiring gesture or gate mutation is rejected.
///
/// None of these reach the user: the editor logs them and treats the
/// gesture as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    #[error("port {0} does not resolve to a port on the canvas")]
    UnknownPort(PortId),

    #[error("gate {0} is not on the canvas")]
    UnknownGate(GateId),

    #[error("cannot connect port {0} to itself")]
    SamePort(PortId),

    /// Wires always run from an output to an input.
    #[error("wire must run from an output to an input, got {from} -> {to}")]
    WrongDirection { from: PortId, to: PortId },

    #[error("port id {0} is used by more than one gate")]
    DuplicatePort(PortId),
}

/// Errors raised while loading an [`EditorConfig`](crate::config::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse editor config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid editor config: {0}")]
    Invalid(String),
}
