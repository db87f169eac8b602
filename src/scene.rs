// src/scene.rs
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::gate::PortKind;

/// Dash pattern for a dashed line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub length: f32,
    pub gap: f32,
}

/// A single drawable node. Ids follow the element they draw so tests and
/// debugging can find them (`bg`, `grid-v-100`, `wire-ghost`, `<gate>-body`,
/// `<port id>`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Rect {
        id: String,
        rect: Rect,
        fill: Color32,
        stroke: Stroke,
    },
    Line {
        id: String,
        points: [Pos2; 2],
        stroke: Stroke,
        dash: Option<Dash>,
    },
    Circle {
        id: String,
        center: Pos2,
        radius: f32,
        fill: Color32,
    },
    Text {
        id: String,
        pos: Pos2,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

impl SceneNode {
    pub fn id(&self) -> &str {
        match self {
            SceneNode::Rect { id, .. }
            | SceneNode::Line { id, .. }
            | SceneNode::Circle { id, .. }
            | SceneNode::Text { id, .. } => id,
        }
    }
}

/// The full visual tree for one editor state, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// Builds the scene from the editor state. Pure: same editor, same scene.
    ///
    /// Paint order: background, grid, wires, ghost wire, gate bodies, ports.
    pub fn build(editor: &Editor) -> Self {
        let config = editor.config();
        let circuit = editor.circuit();
        let ports = circuit.ports();
        let wiring = editor.wiring();
        let viewport = editor.viewport();

        let mut nodes = vec![SceneNode::Rect {
            id: "bg".to_owned(),
            rect: Rect::from_min_size(Pos2::ZERO, viewport),
            fill: config.background,
            stroke: Stroke::NONE,
        }];

        nodes.extend(grid_lines(viewport, config));

        for connection in circuit.connections() {
            let from = ports.position(connection.from());
            let to = ports.position(connection.to());
            let (Some(a), Some(b)) = (from, to) else {
                continue;
            };
            nodes.push(SceneNode::Line {
                id: connection.id().to_string(),
                points: [a, b],
                stroke: Stroke::new(config.wire_width, config.wire_color),
                dash: None,
            });
        }

        if let Some(start) = wiring.pending_source().and_then(|source| ports.position(source)) {
            // Snap to the hovered port only when it would complete the wire
            let end = editor
                .hovered_port()
                .filter(|hovered| wiring.is_valid_target(hovered, ports))
                .and_then(|hovered| ports.position(hovered))
                .unwrap_or(editor.pointer());

            nodes.push(SceneNode::Line {
                id: "wire-ghost".to_owned(),
                points: [start, end],
                stroke: Stroke::new(config.wire_width, config.ghost_color),
                dash: Some(Dash {
                    length: config.ghost_dash,
                    gap: config.ghost_gap,
                }),
            });
        }

        for gate in circuit.gates() {
            nodes.push(SceneNode::Rect {
                id: format!("{}-body", gate.id()),
                rect: gate.rect(),
                fill: config.gate_fill,
                stroke: Stroke::new(config.gate_stroke_width, config.gate_stroke),
            });

            // Two-letter labels sit further right to stay centered
            let label_x = if gate.gate_type().chars().count() == 2 {
                48.0
            } else {
                40.0
            };
            nodes.push(SceneNode::Text {
                id: format!("{}-label", gate.id()),
                pos: gate.position() + Vec2::new(label_x, 20.0),
                text: gate.gate_type().to_owned(),
                font_size: config.label_font_size,
                color: config.label_color,
            });
        }

        for gate in circuit.gates() {
            for port in gate.ports() {
                let is_pending_source =
                    port.kind() == PortKind::Out && wiring.pending_source() == Some(port.id());
                let is_target = port.kind() == PortKind::In
                    && editor.hovered_port() == Some(port.id())
                    && wiring.is_valid_target(port.id(), ports);

                let fill = if is_pending_source {
                    config.port_pending_color
                } else if is_target {
                    config.port_target_color
                } else {
                    config.port_color
                };

                nodes.push(SceneNode::Circle {
                    id: port.id().to_string(),
                    center: gate.port_position(port),
                    radius: config.port_radius,
                    fill,
                });
            }
        }

        Self { nodes }
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn find(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Position of a node in paint order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }

    pub fn grid_lines(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter().filter(|node| node.id().starts_with("grid-"))
    }
}

/// Grid lines covering `size`, ordered vertical minor, horizontal minor,
/// vertical major, horizontal major. Lines sit on every multiple of the
/// minor spacing from zero up to and including the extent.
pub fn grid_lines(size: Vec2, config: &EditorConfig) -> Vec<SceneNode> {
    let minor_stroke = Stroke::new(
        config.grid_line_width,
        config.grid_minor_color.gamma_multiply(config.grid_minor_opacity),
    );
    let major_stroke = Stroke::new(
        config.grid_line_width,
        config.grid_major_color.gamma_multiply(config.grid_major_opacity),
    );

    let mut v_minor = Vec::new();
    let mut h_minor = Vec::new();
    let mut v_major = Vec::new();
    let mut h_major = Vec::new();

    for x in grid_steps(size.x, config.grid_minor_spacing) {
        let is_major = x % config.grid_major_spacing == 0;
        let node = SceneNode::Line {
            id: format!("grid-v-{}", x),
            points: [Pos2::new(x as f32, 0.0), Pos2::new(x as f32, size.y)],
            stroke: if is_major { major_stroke } else { minor_stroke },
            dash: None,
        };
        if is_major {
            v_major.push(node);
        } else {
            v_minor.push(node);
        }
    }

    for y in grid_steps(size.y, config.grid_minor_spacing) {
        let is_major = y % config.grid_major_spacing == 0;
        let node = SceneNode::Line {
            id: format!("grid-h-{}", y),
            points: [Pos2::new(0.0, y as f32), Pos2::new(size.x, y as f32)],
            stroke: if is_major { major_stroke } else { minor_stroke },
            dash: None,
        };
        if is_major {
            h_major.push(node);
        } else {
            h_minor.push(node);
        }
    }

    v_minor.into_iter().chain(h_minor).chain(v_major).chain(h_major).collect()
}

fn grid_steps(extent: f32, spacing: u32) -> impl Iterator<Item = u32> {
    let spacing = spacing.max(1);
    let count = if extent >= 0.0 {
        (extent / spacing as f32).floor() as u32
    } else {
        0
    };
    (0..=count).map(move |i| i * spacing)
}
