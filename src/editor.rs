use egui::{Pos2, Vec2};

use crate::circuit::Circuit;
use crate::command::Command;
use crate::config::EditorConfig;
use crate::gate::{GateId, PortId};
use crate::input::InputEvent;
use crate::state::WiringState;

/// All state of the editor surface in one owned value.
///
/// Every handler runs to completion and leaves the editor consistent, so
/// the scene can be rebuilt from it at any point.
#[derive(Debug, Clone)]
pub struct Editor {
    circuit: Circuit,
    wiring: WiringState,
    hovered_port: Option<PortId>,
    pointer: Pos2,
    viewport: Vec2,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Circuit::default(), EditorConfig::default())
    }
}

impl Editor {
    pub fn new(circuit: Circuit, config: EditorConfig) -> Self {
        Self {
            circuit,
            wiring: WiringState::Idle,
            hovered_port: None,
            pointer: Pos2::ZERO,
            viewport: config.initial_viewport,
            config,
        }
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn wiring(&self) -> &WiringState {
        &self.wiring
    }

    pub fn hovered_port(&self) -> Option<&PortId> {
        self.hovered_port.as_ref()
    }

    pub fn pointer(&self) -> Pos2 {
        self.pointer
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Shows or hides the status window. Returns the new setting.
    pub fn toggle_status(&mut self) -> bool {
        self.config.show_status = !self.config.show_status;
        log::debug!("Status window shown: {}", self.config.show_status);
        self.config.show_status
    }

    /// Routes a translated input event to its handler.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerMove { position } => self.move_pointer(*position),
            InputEvent::PortEnter { port_id } => self.enter_port(port_id),
            InputEvent::PortLeave { port_id } => self.leave_port(port_id),
            InputEvent::PortPressed { port_id } => self.press_port(port_id),
            InputEvent::PointerReleased => self.release_pointer(),
            InputEvent::GateDragged { gate_id, position }
            | InputEvent::GateDragEnded { gate_id, position } => self.drag_gate(gate_id, *position),
            InputEvent::ViewportResized { size } => {
                self.resize_viewport(*size);
            }
        }
    }

    pub fn press_port(&mut self, port_id: &PortId) {
        if let Some(command) = self.wiring.on_port_pressed(port_id, self.circuit.ports()) {
            self.execute(command);
        }
    }

    pub fn release_pointer(&mut self) {
        if let Some(command) = self
            .wiring
            .on_pointer_released(self.hovered_port.as_ref(), self.circuit.ports())
        {
            self.execute(command);
        }
    }

    pub fn enter_port(&mut self, port_id: &PortId) {
        self.hovered_port = Some(port_id.clone());
    }

    /// Clears the hover only if it still names `port_id`; a late leave for
    /// a port the pointer already moved off must not clear the new hover.
    pub fn leave_port(&mut self, port_id: &PortId) {
        if self.hovered_port.as_ref() == Some(port_id) {
            self.hovered_port = None;
        }
    }

    pub fn move_pointer(&mut self, position: Pos2) {
        self.pointer = position;
    }

    /// Writes the drag-reported origin of a gate. Used for both drag-move
    /// and drag-end.
    pub fn drag_gate(&mut self, gate_id: &GateId, position: Pos2) {
        self.execute(Command::MoveGate {
            gate_id: gate_id.clone(),
            position,
        });
    }

    /// Returns true if the size actually changed.
    pub fn resize_viewport(&mut self, size: Vec2) -> bool {
        if size == self.viewport {
            return false;
        }
        log::debug!("Viewport resized to {}x{}", size.x, size.y);
        self.viewport = size;
        true
    }

    fn execute(&mut self, command: Command) {
        if let Err(err) = command.execute(&mut self.circuit) {
            log::debug!("{} rejected: {}", command.name(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_then_connect_by_release() {
        let mut editor = Editor::default();
        let out = PortId::from("port-gate-and-1-out");
        let target = PortId::from("port-gate-or-1-in1");

        editor.press_port(&out);
        assert!(editor.wiring().is_pending());

        editor.move_pointer(Pos2::new(400.0, 150.0));
        editor.enter_port(&target);
        editor.release_pointer();

        assert!(editor.wiring().is_idle());
        assert_eq!(editor.circuit().connections().len(), 1);
        assert_eq!(editor.circuit().connections()[0].to(), &target);
    }

    #[test]
    fn test_stale_leave_keeps_hover() {
        let mut editor = Editor::default();
        let a = PortId::from("port-gate-or-1-in1");
        let b = PortId::from("port-gate-or-1-in2");

        editor.enter_port(&a);
        editor.enter_port(&b);
        editor.leave_port(&a);
        assert_eq!(editor.hovered_port(), Some(&b));

        editor.leave_port(&b);
        assert_eq!(editor.hovered_port(), None);
    }

    #[test]
    fn test_handle_event_routes() {
        let mut editor = Editor::default();
        editor.handle_event(&InputEvent::PointerMove { position: Pos2::new(3.0, 4.0) });
        assert_eq!(editor.pointer(), Pos2::new(3.0, 4.0));

        editor.handle_event(&InputEvent::GateDragEnded {
            gate_id: GateId::from("gate-or-1"),
            position: Pos2::new(10.0, 10.0),
        });
        let or_gate = editor.circuit().gate(&GateId::from("gate-or-1")).unwrap();
        assert_eq!(or_gate.position(), Pos2::new(10.0, 10.0));

        editor.handle_event(&InputEvent::ViewportResized { size: Vec2::new(640.0, 480.0) });
        assert_eq!(editor.viewport(), Vec2::new(640.0, 480.0));
    }

    #[test]
    fn test_drag_unknown_gate_is_noop() {
        let mut editor = Editor::default();
        let before: Vec<Pos2> = editor.circuit().gates().iter().map(|g| g.position()).collect();
        editor.drag_gate(&GateId::from("gate-missing"), Pos2::new(1.0, 1.0));
        let after: Vec<Pos2> = editor.circuit().gates().iter().map(|g| g.position()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_resize_reports_change() {
        let mut editor = Editor::default();
        assert!(!editor.resize_viewport(Vec2::new(900.0, 600.0)));
        assert!(editor.resize_viewport(Vec2::new(1024.0, 768.0)));
    }
}
