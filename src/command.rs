use egui::Pos2;

use crate::circuit::Circuit;
use crate::error::WiringError;
use crate::gate::{GateId, PortId};

/// Mutations of the circuit produced by the interaction layer.
///
/// The wiring state machine and the drag handler never touch the circuit
/// themselves; they hand back a `Command` and the editor executes it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Moves a gate to an absolute position
    MoveGate {
        gate_id: GateId,
        position: Pos2,
    },
    /// Adds a wire from an output port to an input port
    Connect {
        from: PortId,
        to: PortId,
    },
}

impl Command {
    pub fn execute(&self, circuit: &mut Circuit) -> Result<(), WiringError> {
        match self {
            Command::MoveGate { gate_id, position } => circuit.move_gate(gate_id, *position),
            Command::Connect { from, to } => {
                let id = circuit.connect(from, to)?;
                log::info!("Connected {} -> {} ({})", from, to, id);
                Ok(())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::MoveGate { .. } => "Move Gate",
            Command::Connect { .. } => "Connect",
        }
    }
}
