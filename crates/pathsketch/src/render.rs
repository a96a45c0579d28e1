use eframe::egui;

use crate::graph::{GraphStore, NodeId, Position, ShortestPath};
use crate::theme::{NodeColor, Theme};

/// Inset so nodes placed at the canvas border stay fully visible.
const CANVAS_MARGIN: f32 = 4.0;

/// Maps canvas-normalized graph positions to screen pixels and back.
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    pub rect: egui::Rect,
}

impl CanvasTransform {
    pub fn new(rect: egui::Rect) -> Self {
        Self { rect }
    }

    pub fn to_screen(&self, position: Position) -> egui::Pos2 {
        egui::pos2(
            self.rect.left() + position.x as f32 * self.rect.width(),
            self.rect.top() + position.y as f32 * self.rect.height(),
        )
    }

    /// Convert a screen point to a graph position. Returns `None` outside the canvas.
    pub fn to_graph(&self, screen: egui::Pos2) -> Option<Position> {
        if !self.rect.contains(screen) || self.rect.width() <= 0.0 || self.rect.height() <= 0.0 {
            return None;
        }
        let x = (screen.x - self.rect.left()) / self.rect.width();
        let y = (screen.y - self.rect.top()) / self.rect.height();
        Some(Position::new(f64::from(x), f64::from(y)))
    }
}

/// Format a weight for display: integral values without a fraction.
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{weight}")
    }
}

/// Where a weight label goes: the midpoint of the edge, nudged off the line.
fn label_anchor(from: egui::Pos2, to: egui::Pos2) -> egui::Pos2 {
    let mid = from.lerp(to, 0.5);
    let dir = to - from;
    let len = dir.length();
    if len <= f32::EPSILON {
        return mid;
    }
    let normal = egui::vec2(-dir.y, dir.x) / len;
    mid + normal * 10.0
}

/// Draw the canvas background, edges, highlighted path, weight labels and nodes, in that order.
pub fn draw_graph(
    painter: &egui::Painter,
    transform: &CanvasTransform,
    graph: &GraphStore,
    highlighted: Option<&ShortestPath>,
    node_color: NodeColor,
    theme: &Theme,
) {
    painter.rect_filled(transform.rect, 0.0, theme.canvas_background);

    let screen_of = |id: NodeId| graph.node(id).map(|n| transform.to_screen(n.position));
    let radius = theme.node_radius;
    let edge_stroke = egui::Stroke::new(theme.edge_width, theme.edge_color);
    let path_stroke = egui::Stroke::new(theme.path_width, theme.path_color);

    for edge in graph.edges() {
        let (Some(from), Some(to)) = (screen_of(edge.source), screen_of(edge.target)) else {
            continue;
        };
        if edge.is_self_loop() {
            let center = from - egui::vec2(0.0, radius * 1.6);
            painter.circle_stroke(center, radius * 0.8, edge_stroke);
        } else {
            painter.line_segment([from, to], edge_stroke);
        }
    }

    if let Some(path) = highlighted {
        for (u, v) in path.edges() {
            if let (Some(from), Some(to)) = (screen_of(u), screen_of(v)) {
                painter.line_segment([from, to], path_stroke);
            }
        }
    }

    let label_font = egui::FontId::proportional(theme.label_size);
    for edge in graph.edges() {
        let (Some(from), Some(to)) = (screen_of(edge.source), screen_of(edge.target)) else {
            continue;
        };
        let anchor = if edge.is_self_loop() {
            from - egui::vec2(0.0, radius * 3.0)
        } else {
            label_anchor(from, to)
        };
        painter.text(
            anchor,
            egui::Align2::CENTER_CENTER,
            format_weight(edge.weight),
            label_font.clone(),
            theme.edge_label_color,
        );
    }

    let fill = node_color.color32();
    let outline = egui::Stroke::new(1.5, theme.node_outline);
    let id_font = egui::FontId::proportional(theme.label_size + 2.0);
    for node in graph.node_entries() {
        let center = transform.to_screen(node.position);
        painter.circle(center, radius, fill, outline);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            node.id.to_string(),
            id_font.clone(),
            theme.node_label,
        );
    }
}

/// Shrink a canvas rect by the margin used for node placement.
pub fn canvas_rect(available: egui::Rect) -> egui::Rect {
    available.shrink(CANVAS_MARGIN)
}
