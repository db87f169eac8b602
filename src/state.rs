//! The wiring state machine.
//!
//! ```text
//!            press out port
//!   ┌──────┐ ───────────────► ┌──────────────────┐ ─┐ press out port
//!   │ Idle │                  │ Pending(source)  │ ◄┘ (replaces source)
//!   └──────┘ ◄─────────────── └──────────────────┘
//!       press valid in port (connect) / release anywhere
//! ```
//!
//! Transitions never touch the circuit. A completed pairing is handed back
//! as a [`Command::Connect`] for the editor to execute.

use crate::command::Command;
use crate::gate::{PortId, PortKind};
use crate::port_map::{is_valid_connection, PortMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WiringState {
    #[default]
    Idle,
    /// An output port has been picked as the wire's origin
    Pending { source: PortId },
}

impl WiringState {
    pub fn is_idle(&self) -> bool {
        matches!(self, WiringState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, WiringState::Pending { .. })
    }

    pub fn pending_source(&self) -> Option<&PortId> {
        match self {
            WiringState::Pending { source } => Some(source),
            WiringState::Idle => None,
        }
    }

    /// Whether `target` would complete a wire from the pending source.
    pub fn is_valid_target(&self, target: &PortId, ports: &PortMap) -> bool {
        self.pending_source()
            .is_some_and(|source| is_valid_connection(ports, source, target))
    }

    pub fn name(&self) -> &'static str {
        match self {
            WiringState::Idle => "Idle",
            WiringState::Pending { .. } => "Pending",
        }
    }

    /// Handles a press on a port.
    pub fn on_port_pressed(&mut self, port: &PortId, ports: &PortMap) -> Option<Command> {
        let Some(kind) = ports.kind(port) else {
            log::debug!("Ignoring press on unresolved port {}", port);
            return None;
        };

        match kind {
            PortKind::Out => {
                log::debug!("Wire pending from {}", port);
                *self = WiringState::Pending {
                    source: port.clone(),
                };
                None
            }
            PortKind::In => {
                let source = self.pending_source()?;
                if !is_valid_connection(ports, source, port) {
                    log::debug!("Rejected wire {} -> {}", source, port);
                    return None;
                }
                let command = Command::Connect {
                    from: source.clone(),
                    to: port.clone(),
                };
                *self = WiringState::Idle;
                Some(command)
            }
        }
    }

    /// Handles the pointer being released anywhere on the canvas.
    ///
    /// Always ends a pending wire. Commits it first when the pointer is over
    /// a valid target.
    pub fn on_pointer_released(
        &mut self,
        hovered: Option<&PortId>,
        ports: &PortMap,
    ) -> Option<Command> {
        let WiringState::Pending { source } = std::mem::take(self) else {
            return None;
        };

        match hovered {
            Some(target) if is_valid_connection(ports, &source, target) => Some(Command::Connect {
                from: source,
                to: target.clone(),
            }),
            _ => {
                log::debug!("Wire from {} dropped", source);
                None
            }
        }
    }
}
