use std::fmt;
use uuid::Uuid;

use crate::gate::PortId;

/// Unique identifier for a wire, displayed as `wire-<uuid>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wire-{}", self.0)
    }
}

/// A directed wire from an output port to an input port.
///
/// The endpoints are only checked when the wire is created; see
/// [`Circuit::connect`](crate::circuit::Circuit::connect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    id: ConnectionId,
    from: PortId,
    to: PortId,
}

impl Connection {
    pub(crate) fn new(from: PortId, to: PortId) -> Self {
        Self {
            id: ConnectionId::new(),
            from,
            to,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn from(&self) -> &PortId {
        &self.from
    }

    pub fn to(&self) -> &PortId {
        &self.to
    }
}
