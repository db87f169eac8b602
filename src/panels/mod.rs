mod canvas_panel;
mod status_panel;

pub use canvas_panel::canvas_panel;
pub use status_panel::status_panel;
