use egui::Pos2;
use std::collections::HashSet;

use crate::connection::{Connection, ConnectionId};
use crate::error::WiringError;
use crate::gate::{Gate, GateId, PortId};
use crate::port_map::{validate_connection, PortMap};

/// Gates and the wires between them, plus the port geometry derived
/// from the gate positions.
#[derive(Debug, Clone)]
pub struct Circuit {
    gates: Vec<Gate>,
    connections: Vec<Connection>,
    port_map: PortMap,
}

impl Default for Circuit {
    /// The seed canvas: one AND gate and one OR gate side by side.
    fn default() -> Self {
        let gates = vec![
            Gate::two_input("gate-and-1", "AND", Pos2::new(120.0, 140.0)),
            Gate::two_input("gate-or-1", "OR", Pos2::new(420.0, 140.0)),
        ];
        let port_map = PortMap::resolve(&gates);
        Self {
            gates,
            connections: Vec::new(),
            port_map,
        }
    }
}

impl Circuit {
    /// Creates a circuit from a fixed set of gates.
    ///
    /// Port ids key the resolved geometry, so a port id appearing twice is
    /// rejected.
    pub fn new(gates: Vec<Gate>) -> Result<Self, WiringError> {
        let mut seen = HashSet::new();
        for port in gates.iter().flat_map(|gate| gate.ports()) {
            if !seen.insert(port.id()) {
                return Err(WiringError::DuplicatePort(port.id().clone()));
            }
        }

        let port_map = PortMap::resolve(&gates);
        Ok(Self {
            gates,
            connections: Vec::new(),
            port_map,
        })
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn gate(&self, id: &GateId) -> Option<&Gate> {
        self.gates.iter().find(|gate| gate.id() == id)
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn ports(&self) -> &PortMap {
        &self.port_map
    }

    /// Writes a new origin for a gate and refreshes the port geometry.
    /// Setting the same position twice is harmless.
    pub fn move_gate(&mut self, id: &GateId, position: Pos2) -> Result<(), WiringError> {
        let gate = self
            .gates
            .iter_mut()
            .find(|gate| gate.id() == id)
            .ok_or_else(|| WiringError::UnknownGate(id.clone()))?;

        gate.set_position(position);
        self.port_map = PortMap::resolve(&self.gates);
        Ok(())
    }

    /// Adds a wire if `from -> to` passes the validity rule.
    pub fn connect(&mut self, from: &PortId, to: &PortId) -> Result<ConnectionId, WiringError> {
        validate_connection(&self.port_map, from, to)?;

        let connection = Connection::new(from.clone(), to.clone());
        let id = connection.id();
        self.connections.push(connection);
        Ok(id)
    }

    /// Topmost port whose center lies within `radius` of `pos`.
    ///
    /// Later gates are drawn on top, so they are checked first.
    pub fn port_at(&self, pos: Pos2, radius: f32) -> Option<&PortId> {
        self.gates.iter().rev().find_map(|gate| {
            gate.ports()
                .iter()
                .rev()
                .find(|port| gate.port_position(port).distance(pos) <= radius)
                .map(|port| port.id())
        })
    }

    /// Topmost gate whose body contains `pos`.
    pub fn gate_at(&self, pos: Pos2) -> Option<&Gate> {
        self.gates.iter().rev().find(|gate| gate.rect().contains(pos))
    }
}
