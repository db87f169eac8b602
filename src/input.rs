use egui::{Context, Pos2, Vec2};

use crate::circuit::Circuit;
use crate::gate::{GateId, PortId};

/// Domain-level input events, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved (with or without a button held)
    PointerMove { position: Pos2 },
    /// Pointer started hovering a port
    PortEnter { port_id: PortId },
    /// Pointer stopped hovering a port
    PortLeave { port_id: PortId },
    /// Primary button pressed over a port
    PortPressed { port_id: PortId },
    /// Primary button released anywhere
    PointerReleased,
    /// A gate is being dragged to a new origin
    GateDragged { gate_id: GateId, position: Pos2 },
    /// A gate drag finished at this origin
    GateDragEnded { gate_id: GateId, position: Pos2 },
    /// The drawing surface changed size
    ViewportResized { size: Vec2 },
}

/// One frame's worth of raw pointer state, relative to the canvas origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// `None` when the pointer is outside the window
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSnapshot {
    /// Reads the primary button and hover position from egui.
    pub fn capture(ctx: &Context, canvas_origin: Pos2) -> Self {
        ctx.input(|input| Self {
            position: input
                .pointer
                .hover_pos()
                .map(|pos| Pos2::ZERO + (pos - canvas_origin)),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        })
    }
}

#[derive(Debug, Clone)]
struct GateDrag {
    gate_id: GateId,
    /// Pointer position minus gate origin at the time of the press
    grab_offset: Vec2,
    last_position: Pos2,
}

/// Turns raw pointer snapshots into [`InputEvent`]s.
///
/// Keeps just enough memory between frames to notice transitions: the last
/// pointer position, the port under it and an in-progress gate drag.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    hovered_port: Option<PortId>,
    drag: Option<GateDrag>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Process one frame of pointer input.
    ///
    /// Ports are hit-tested before gate bodies since they are drawn on top.
    pub fn process(
        &mut self,
        snapshot: PointerSnapshot,
        circuit: &Circuit,
        port_radius: f32,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(pos) = snapshot.position {
            if Some(pos) != self.last_pointer_pos {
                events.push(InputEvent::PointerMove { position: pos });
            }
            self.last_pointer_pos = Some(pos);
        }

        // Hover transitions
        let under_pointer = snapshot
            .position
            .and_then(|pos| circuit.port_at(pos, port_radius))
            .cloned();
        if under_pointer != self.hovered_port {
            if let Some(port_id) = self.hovered_port.take() {
                events.push(InputEvent::PortLeave { port_id });
            }
            if let Some(port_id) = under_pointer.clone() {
                events.push(InputEvent::PortEnter { port_id });
            }
            self.hovered_port = under_pointer;
        }

        // Continue a drag
        if let (Some(drag), Some(pos)) = (self.drag.as_mut(), snapshot.position) {
            let position = pos - drag.grab_offset;
            if position != drag.last_position {
                drag.last_position = position;
                events.push(InputEvent::GateDragged {
                    gate_id: drag.gate_id.clone(),
                    position,
                });
            }
        }

        if snapshot.pressed {
            if let Some(pos) = snapshot.position {
                if let Some(port_id) = &self.hovered_port {
                    events.push(InputEvent::PortPressed {
                        port_id: port_id.clone(),
                    });
                } else if let Some(gate) = circuit.gate_at(pos) {
                    log::debug!("Drag started on {}", gate.id());
                    self.drag = Some(GateDrag {
                        gate_id: gate.id().clone(),
                        grab_offset: pos - gate.position(),
                        last_position: gate.position(),
                    });
                }
            }
        }

        if snapshot.released {
            if let Some(drag) = self.drag.take() {
                events.push(InputEvent::GateDragEnded {
                    gate_id: drag.gate_id,
                    position: drag.last_position,
                });
            }
            events.push(InputEvent::PointerReleased);
        }

        events
    }
}
