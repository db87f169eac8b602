use egui::{Pos2, Vec2};
use std::fmt;

/// Width and height of the standard two-input gate block.
pub const GATE_WIDTH: f32 = 120.0;
pub const GATE_HEIGHT: f32 = 60.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GateId(String);

impl GateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a port. Unique across every gate on the canvas, so it
/// doubles as the key of the resolved [`PortMap`](crate::port_map::PortMap).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortId(String);

impl PortId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PortId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    In,
    Out,
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortKind::In => f.write_str("in"),
            PortKind::Out => f.write_str("out"),
        }
    }
}

/// A connection point on a gate. The kind and offset never change after
/// the gate is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    id: PortId,
    kind: PortKind,
    offset: Vec2,
}

impl Port {
    pub fn new(id: PortId, kind: PortKind, offset: Vec2) -> Self {
        Self { id, kind, offset }
    }

    pub fn id(&self) -> &PortId {
        &self.id
    }

    pub fn kind(&self) -> PortKind {
        self.kind
    }

    /// Position relative to the owning gate's origin
    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    id: GateId,
    gate_type: String,
    position: Pos2,
    size: Vec2,
    ports: Vec<Port>,
}

impl Gate {
    pub fn new(
        id: GateId,
        gate_type: impl Into<String>,
        position: Pos2,
        size: Vec2,
        ports: Vec<Port>,
    ) -> Self {
        Self {
            id,
            gate_type: gate_type.into(),
            position,
            size,
            ports,
        }
    }

    /// Builds the standard block: two inputs on the left edge and one
    /// output on the right edge. Port ids are derived from the gate id
    /// (`port-<gate>-in1`, `port-<gate>-in2`, `port-<gate>-out`).
    pub fn two_input(id: impl Into<String>, gate_type: impl Into<String>, position: Pos2) -> Self {
        let id = GateId::new(id);
        let port = |suffix: &str| PortId::new(format!("port-{}-{}", id, suffix));

        let ports = vec![
            Port::new(port("in1"), PortKind::In, Vec2::new(0.0, 18.0)),
            Port::new(port("in2"), PortKind::In, Vec2::new(0.0, 44.0)),
            Port::new(port("out"), PortKind::Out, Vec2::new(GATE_WIDTH, 31.0)),
        ];

        Self::new(id, gate_type, position, Vec2::new(GATE_WIDTH, GATE_HEIGHT), ports)
    }

    pub fn id(&self) -> &GateId {
        &self.id
    }

    /// The display label, e.g. `AND`
    pub fn gate_type(&self) -> &str {
        &self.gate_type
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(self.position, self.size)
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Absolute canvas position of one of this gate's ports.
    pub fn port_position(&self, port: &Port) -> Pos2 {
        self.position + port.offset
    }
}
