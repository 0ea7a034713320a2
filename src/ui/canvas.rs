//! Canvas: zeichnet Editor-Pfad und Epizykel-Kette aus der RenderScene.

use crate::core::gradient::trail_color;
use crate::shared::RenderScene;
use glam::Vec2;

const PATH_STROKE_WIDTH: f32 = 2.0;
const ENDPOINT_RADIUS: f32 = 5.0;
const CONTROL_POINT_HALF_SIZE: f32 = 4.0;
const HOVER_RING_RADIUS: f32 = 8.0;
const TRAIL_STROKE_WIDTH: f32 = 2.0;

/// Wandelt eine RGBA-Farbe (0..1) in eine egui-Farbe.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn to_pos(rect: egui::Rect, point: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + point.x, rect.min.y + point.y)
}

/// Zeichnet die komplette Szene in `rect`.
pub fn render_canvas(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let options = &scene.options;
    painter.rect_filled(rect, 0.0, color32(options.background_color));

    // Trennlinie zwischen Editor und Epizykeln
    let divider = rect.min.x + scene.divider_x;
    painter.line_segment(
        [
            egui::pos2(divider, rect.min.y),
            egui::pos2(divider, rect.max.y),
        ],
        egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
    );

    paint_path(painter, rect, scene);
    paint_points(painter, rect, scene);
    paint_trail(painter, rect, scene);
    paint_epicycles(painter, rect, scene);

    if scene.points.is_empty() {
        painter.text(
            to_pos(rect, Vec2::new(scene.divider_x / 2.0, scene.viewport_size[1] / 2.0)),
            egui::Align2::CENTER_CENTER,
            "Klicken zum Zeichnen, Ctrl+O für SVG-Import",
            egui::FontId::proportional(18.0),
            egui::Color32::from_gray(140),
        );
    }
}

fn paint_path(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    if !scene.has_path() {
        return;
    }
    let points: Vec<egui::Pos2> = scene
        .path_polyline
        .iter()
        .map(|&p| to_pos(rect, p))
        .collect();
    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(PATH_STROKE_WIDTH, color32(scene.options.path_color)),
    ));
}

fn paint_points(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let options = &scene.options;
    let handle_stroke = egui::Stroke::new(1.0, color32(options.handle_color));
    for [control, endpoint] in &scene.handles {
        painter.line_segment([to_pos(rect, *control), to_pos(rect, *endpoint)], handle_stroke);
    }

    for point in &scene.points {
        let center = to_pos(rect, point.position);
        if point.is_endpoint {
            painter.circle_filled(center, ENDPOINT_RADIUS, color32(options.endpoint_color));
        } else {
            let half = egui::vec2(CONTROL_POINT_HALF_SIZE, CONTROL_POINT_HALF_SIZE);
            painter.rect_filled(
                egui::Rect::from_min_max(center - half, center + half),
                0.0,
                color32(options.control_point_color),
            );
        }

        if point.hovered || point.dragged {
            painter.circle_stroke(
                center,
                HOVER_RING_RADIUS,
                egui::Stroke::new(1.5, color32(options.hover_color)),
            );
        }
    }
}

fn paint_epicycles(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    for epicycle in &scene.epicycles {
        let color = color32(epicycle.color);
        let center = to_pos(rect, epicycle.center);
        painter.circle_stroke(
            center,
            epicycle.radius,
            egui::Stroke::new(1.0, color.gamma_multiply(0.5)),
        );
        painter.line_segment(
            [center, to_pos(rect, epicycle.tip)],
            egui::Stroke::new(1.5, color),
        );
    }
}

/// Spur mit Farbverlauf vom Hintergrund (alt) zur Stiftfarbe (neu).
fn paint_trail(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let options = &scene.options;
    let count = scene.trail.len();
    for (index, pair) in scene.trail.windows(2).enumerate() {
        let color = trail_color(options.background_color, options.pencil_color, index, count);
        painter.line_segment(
            [to_pos(rect, pair[0]), to_pos(rect, pair[1])],
            egui::Stroke::new(TRAIL_STROKE_WIDTH, color32(color)),
        );
    }
}
