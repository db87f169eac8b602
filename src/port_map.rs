use egui::Pos2;
use std::collections::HashMap;

use crate::error::WiringError;
use crate::gate::{Gate, PortId, PortKind};

#[derive(Debug, Clone, PartialEq)]
struct ResolvedPort {
    position: Pos2,
    kind: PortKind,
}

/// Port id → absolute geometry, derived from the gates.
///
/// Never edited directly. The circuit rebuilds it from scratch whenever
/// a gate moves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortMap {
    ports: HashMap<PortId, ResolvedPort>,
}

impl PortMap {
    pub fn resolve(gates: &[Gate]) -> Self {
        let mut ports = HashMap::new();
        for gate in gates {
            for port in gate.ports() {
                ports.insert(
                    port.id().clone(),
                    ResolvedPort {
                        position: gate.port_position(port),
                        kind: port.kind(),
                    },
                );
            }
        }
        Self { ports }
    }

    pub fn kind(&self, id: &PortId) -> Option<PortKind> {
        self.ports.get(id).map(|port| port.kind)
    }

    pub fn position(&self, id: &PortId) -> Option<Pos2> {
        self.ports.get(id).map(|port| port.position)
    }
}

/// Checks whether a wire may run from `from` to `to`.
///
/// Both ids must resolve, they must differ, `from` must be an output and
/// `to` an input. Nothing else is checked: wires between ports of the
/// same gate, duplicate wires and cycles are all allowed.
pub fn validate_connection(
    ports: &PortMap,
    from: &PortId,
    to: &PortId,
) -> Result<(), WiringError> {
    let source = ports
        .kind(from)
        .ok_or_else(|| WiringError::UnknownPort(from.clone()))?;
    let target = ports
        .kind(to)
        .ok_or_else(|| WiringError::UnknownPort(to.clone()))?;

    if from == to {
        return Err(WiringError::SamePort(from.clone()));
    }

    match (source, target) {
        (PortKind::Out, PortKind::In) => Ok(()),
        _ => Err(WiringError::WrongDirection {
            from: from.clone(),
            to: to.clone(),
        }),
    }
}

pub fn is_valid_connection(ports: &PortMap, from: &PortId, to: &PortId) -> bool {
    validate_connection(ports, from, to).is_ok()
}
