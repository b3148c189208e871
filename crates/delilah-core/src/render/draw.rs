//! Per-primitive path emission against the drawing surface.

use delilah_canvas::Canvas;
use glam::Vec3;
use std::f32::consts::TAU;

use crate::color;
use crate::scene::{LineStyle, PointShape, PointStyle};

/// Fill a triangle, then stroke each edge whose selector is nonzero with the
/// selected line style. Edge slot n runs from corner n to corner (n+1)%3;
/// clipped subtriangles keep their original selectors, so an internal clip
/// edge is stroked with the style of the original edge in that slot.
pub(crate) fn triangle<C: Canvas + ?Sized>(
    canvas: &mut C,
    corners: [Vec3; 3],
    fill: u16,
    edges: [u8; 3],
    line_styles: &[LineStyle],
) {
    let [r, g, b] = color::unpack(fill);
    canvas.set_fill_color(r, g, b);
    canvas.begin_path();
    canvas.move_to(corners[0].x, corners[0].y);
    canvas.line_to(corners[1].x, corners[1].y);
    canvas.line_to(corners[2].x, corners[2].y);
    canvas.close_path();
    canvas.fill();

    for (slot, &selector) in edges.iter().enumerate() {
        if selector == 0 {
            continue;
        }
        let from = corners[slot];
        let to = corners[(slot + 1) % 3];
        segment(
            canvas,
            from,
            to,
            &line_styles[usize::from(selector) - 1],
        );
    }
}

/// Stroke a single line segment.
pub(crate) fn segment<C: Canvas + ?Sized>(canvas: &mut C, from: Vec3, to: Vec3, style: &LineStyle) {
    let [r, g, b] = color::unpack(style.color);
    canvas.set_stroke_color(r, g, b);
    canvas.set_line_width(style.width);
    canvas.begin_path();
    canvas.move_to(from.x, from.y);
    canvas.line_to(to.x, to.y);
    canvas.stroke();
}

/// Draw a sphere as a 2D circle at the projected origin. There is no
/// silhouette-correct projection or depth shading.
pub(crate) fn sphere<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Vec3,
    radius: f32,
    fill: Option<u16>,
    outline: Option<&LineStyle>,
) {
    canvas.begin_path();
    canvas.arc(center.x, center.y, radius, 0.0, TAU);
    if let Some(fill) = fill {
        let [r, g, b] = color::unpack(fill);
        canvas.set_fill_color(r, g, b);
        canvas.fill();
    }
    if let Some(style) = outline {
        let [r, g, b] = color::unpack(style.color);
        canvas.set_stroke_color(r, g, b);
        canvas.set_line_width(style.width);
        canvas.stroke();
    }
}

/// Draw a point glyph centered on the projected position. The glyph size is
/// in screen units and does not depth-attenuate.
pub(crate) fn point<C: Canvas + ?Sized>(canvas: &mut C, center: Vec3, style: &PointStyle) {
    let (x, y) = (center.x, center.y);
    let k = style.size / 2.0;

    canvas.begin_path();
    match style.shape {
        PointShape::Circle => canvas.arc(x, y, k, 0.0, TAU),
        PointShape::Square => canvas.rect(x - k, y - k, style.size, style.size),
        PointShape::Diamond => {
            canvas.move_to(x, y - k);
            canvas.line_to(x + k, y);
            canvas.line_to(x, y + k);
            canvas.line_to(x - k, y);
            canvas.close_path();
        }
        PointShape::TriangleUp => {
            canvas.move_to(x, y - k);
            canvas.line_to(x + k, y + k);
            canvas.line_to(x - k, y + k);
            canvas.close_path();
        }
        PointShape::TriangleDown => {
            canvas.move_to(x, y + k);
            canvas.line_to(x + k, y - k);
            canvas.line_to(x - k, y - k);
            canvas.close_path();
        }
        PointShape::TriangleLeft => {
            canvas.move_to(x - k, y);
            canvas.line_to(x + k, y - k);
            canvas.line_to(x + k, y + k);
            canvas.close_path();
        }
        PointShape::TriangleRight => {
            canvas.move_to(x + k, y);
            canvas.line_to(x - k, y + k);
            canvas.line_to(x - k, y - k);
            canvas.close_path();
        }
        // Plus and cross are open strokes, not closed outlines.
        PointShape::Plus => {
            canvas.move_to(x - k, y);
            canvas.line_to(x + k, y);
            canvas.move_to(x, y - k);
            canvas.line_to(x, y + k);
        }
        PointShape::Cross => {
            canvas.move_to(x - k, y - k);
            canvas.line_to(x + k, y + k);
            canvas.move_to(x - k, y + k);
            canvas.line_to(x + k, y - k);
        }
    }

    if let Some(fill) = style.fill {
        let [r, g, b] = color::unpack(fill);
        canvas.set_fill_color(r, g, b);
        canvas.fill();
    }
    // Ink is present exactly when the stroke width is positive.
    if let Some(ink) = style.ink {
        let [r, g, b] = color::unpack(ink);
        canvas.set_stroke_color(r, g, b);
        canvas.set_line_width(style.stroke);
        canvas.stroke();
    }
}
