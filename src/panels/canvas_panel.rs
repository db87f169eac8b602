use crate::GateEditorApp;
use crate::input::{InputEvent, PointerSnapshot};
use crate::scene::Scene;

/// Runs one frame of the editor surface: resize, input, state, paint.
pub fn canvas_panel(app: &mut GateEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let (editor, input, renderer) = app.parts_mut();

            // The canvas always fills the window, so this tracks host resizes
            editor.handle_event(&InputEvent::ViewportResized { size: rect.size() });

            let mut snapshot = PointerSnapshot::capture(ctx, rect.min);
            if !ui.rect_contains_pointer(rect) {
                // Presses on windows floating above the canvas belong to them
                snapshot.pressed = false;
            }

            let events = input.process(snapshot, editor.circuit(), editor.config().port_radius);
            for event in &events {
                editor.handle_event(event);
            }

            if editor.hovered_port().is_some() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            } else if input.is_dragging() {
                ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            }

            let scene = Scene::build(editor);
            renderer.paint(&painter, rect.min, &scene);
        });
}
