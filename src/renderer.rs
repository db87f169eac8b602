// src/renderer.rs
use eframe::egui::{self, Align2, FontFamily, FontId, Painter, Pos2, Shape, Vec2};

use crate::scene::{Scene, SceneNode};

#[derive(Debug, Clone)]
pub struct Renderer {
    font_family: FontFamily,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Proportional,
        }
    }
}

impl Renderer {
    /// Creates a new renderer instance
    ///
    /// Args:
    ///     cc (CreationContext): The eframe creation context
    ///
    /// Returns:
    ///     Self: Renderer using the default proportional font
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Paints a scene
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     origin (egui::Pos2): Screen position of the canvas origin
    ///     scene (Scene): The nodes to paint, back to front
    pub fn paint(&self, painter: &Painter, origin: Pos2, scene: &Scene) {
        let offset = origin.to_vec2();
        for node in scene.nodes() {
            self.paint_node(painter, offset, node);
        }
    }

    fn paint_node(&self, painter: &Painter, offset: Vec2, node: &SceneNode) {
        match node {
            SceneNode::Rect { rect, fill, stroke, .. } => {
                let rect = rect.translate(offset);
                painter.rect_filled(rect, 0.0, *fill);
                if stroke.width > 0.0 {
                    painter.rect_stroke(rect, 0.0, *stroke);
                }
            }
            SceneNode::Line { points, stroke, dash, .. } => {
                let points = [points[0] + offset, points[1] + offset];
                match dash {
                    Some(dash) => {
                        painter.extend(Shape::dashed_line(&points, *stroke, dash.length, dash.gap));
                    }
                    None => {
                        painter.line_segment(points, *stroke);
                    }
                }
            }
            SceneNode::Circle { center, radius, fill, .. } => {
                painter.circle_filled(*center + offset, *radius, *fill);
            }
            SceneNode::Text { pos, text, font_size, color, .. } => {
                painter.text(
                    *pos + offset,
                    Align2::LEFT_TOP,
                    text,
                    FontId::new(*font_size, self.font_family.clone()),
                    *color,
                );
            }
        }
    }
}
