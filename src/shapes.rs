//! Rounded rectangle outlines and gradient fills.

use eframe::egui::epaint::Mesh;
use eframe::egui::{Color32, Pos2, Rect, Shape, Stroke, pos2};
use std::f32::consts::FRAC_PI_2;

/// Line segments used per rounded corner.
const CORNER_SEGMENTS: usize = 8;

/// Outline of a rounded rectangle, clockwise from the top-left corner's arc.
///
/// The radius is clamped to half of the shorter side.
pub fn rounded_rect_points(rect: Rect, radius: f32) -> Vec<Pos2> {
    let radius = radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
    if radius <= 0.0 {
        return vec![
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ];
    }

    // Corner centers paired with the angle each arc starts at.
    let corners = [
        (pos2(rect.left() + radius, rect.top() + radius), 2.0 * FRAC_PI_2),
        (pos2(rect.right() - radius, rect.top() + radius), 3.0 * FRAC_PI_2),
        (pos2(rect.right() - radius, rect.bottom() - radius), 0.0),
        (pos2(rect.left() + radius, rect.bottom() - radius), FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (center, start) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = start + FRAC_PI_2 * step as f32 / CORNER_SEGMENTS as f32;
            let (sin, cos) = angle.sin_cos();
            points.push(center + radius * eframe::egui::vec2(cos, sin));
        }
    }
    points
}

/// Rounded rectangle filled with a diagonal gradient from top-left to bottom-right.
pub fn gradient_rounded_rect(rect: Rect, radius: f32, from: Color32, to: Color32) -> Shape {
    let outline = rounded_rect_points(rect, radius);
    let start = rect.left_top();
    let axis = rect.right_bottom() - start;
    let axis_len_sq = axis.length_sq();

    let color_at = |p: Pos2| {
        let t = if axis_len_sq > 0.0 {
            ((p - start).dot(axis) / axis_len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        lerp_color(from, to, t)
    };

    let mut mesh = Mesh::default();
    let center = rect.center();
    mesh.colored_vertex(center, color_at(center));
    for &p in &outline {
        mesh.colored_vertex(p, color_at(p));
    }
    let ring = outline.len() as u32;
    for i in 0..ring {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % ring);
    }
    Shape::mesh(mesh)
}

/// Closed outline stroke of a rounded rectangle.
pub fn rounded_rect_stroke(rect: Rect, radius: f32, stroke: Stroke) -> Shape {
    Shape::closed_line(rounded_rect_points(rect, radius), stroke)
}

/// Linear interpolation between two colors in unmultiplied sRGBA space.
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    let a = from.to_srgba_unmultiplied();
    let b = to.to_srgba_unmultiplied();
    let mix = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(mix(0), mix(1), mix(2), mix(3))
}
