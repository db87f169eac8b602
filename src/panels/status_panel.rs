use crate::GateEditorApp;
use crate::state::WiringState;

pub fn status_panel(app: &GateEditorApp, ctx: &egui::Context) {
    let editor = app.editor();
    let circuit = editor.circuit();

    egui::Window::new("Status")
        .default_pos(egui::pos2(20.0, 20.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Gates: {}", circuit.gates().len()));
            ui.label(format!("Connections: {}", circuit.connections().len()));
            match editor.wiring() {
                WiringState::Idle => ui.label("Idle"),
                WiringState::Pending { source } => ui.label(format!("Pending: {}", source)),
            };
            if let Some(port) = editor.hovered_port() {
                ui.label(format!("Hover: {}", port));
            }
        });
}
