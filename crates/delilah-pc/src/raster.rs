//! Software raster implementation of the canvas contract.
//!
//! Paths are collected as polylines; arcs are sampled into segments. Filling
//! uses even-odd scanline coverage at pixel centers, and strokes are emitted
//! as filled quads, one per segment. Good enough for previews; no
//! antialiasing.

use delilah_canvas::Canvas;
use image::{Rgb, RgbImage};

type Point = (f32, f32);
type Edge = (Point, Point);

#[derive(Default)]
struct SubPath {
    points: Vec<Point>,
    closed: bool,
}

pub struct RasterCanvas {
    image: RgbImage,
    fill: Rgb<u8>,
    stroke: Rgb<u8>,
    line_width: f32,
    path: Vec<SubPath>,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
            fill: Rgb([0, 0, 0]),
            stroke: Rgb([0, 0, 0]),
            line_width: 1.0,
            path: Vec::new(),
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn current(&mut self) -> &mut SubPath {
        if self.path.is_empty() {
            self.path.push(SubPath::default());
        }
        let last = self.path.len() - 1;
        &mut self.path[last]
    }

    /// Quad covering a segment at the current pen width.
    fn segment_quad(&self, from: Point, to: Point) -> Option<[Point; 4]> {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            return None;
        }
        let half = self.line_width.max(1.0) / 2.0;
        let (nx, ny) = (-dy / len * half, dx / len * half);
        Some([
            (from.0 + nx, from.1 + ny),
            (to.0 + nx, to.1 + ny),
            (to.0 - nx, to.1 - ny),
            (from.0 - nx, from.1 - ny),
        ])
    }
}

impl Canvas for RasterCanvas {
    fn set_fill_color(&mut self, r: u8, g: u8, b: u8) {
        self.fill = Rgb([r, g, b]);
    }

    fn set_stroke_color(&mut self, r: u8, g: u8, b: u8) {
        self.stroke = Rgb([r, g, b]);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push(SubPath {
            points: vec![(x, y)],
            closed: false,
        });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.current().points.push((x, y));
    }

    fn close_path(&mut self) {
        self.current().closed = true;
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) {
        let sweep = end - start;
        let steps = ((sweep.abs() / std::f32::consts::TAU) * 64.0).ceil().max(8.0) as usize;
        let mut points = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let angle = start + sweep * (i as f32) / (steps as f32);
            points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
        }
        self.path.push(SubPath {
            points,
            closed: false,
        });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.path.push(SubPath {
            points: vec![(x, y), (x + width, y), (x + width, y + height), (x, y + height)],
            closed: true,
        });
    }

    fn fill(&mut self) {
        let mut edges = Vec::new();
        for sub in &self.path {
            collect_edges(&sub.points, &mut edges);
        }
        fill_even_odd(&mut self.image, &edges, self.fill);
    }

    fn stroke(&mut self) {
        let mut quads = Vec::new();
        for sub in &self.path {
            let points = &sub.points;
            if points.len() < 2 {
                continue;
            }
            for pair in points.windows(2) {
                quads.push((pair[0], pair[1]));
            }
            if sub.closed {
                quads.push((points[points.len() - 1], points[0]));
            }
        }
        for (from, to) in quads {
            if let Some(quad) = self.segment_quad(from, to) {
                let mut edges = Vec::new();
                collect_edges(&quad, &mut edges);
                fill_even_odd(&mut self.image, &edges, self.stroke);
            }
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        let x0 = (x.floor() as i64).clamp(0, w);
        let y0 = (y.floor() as i64).clamp(0, h);
        let x1 = ((x + width).ceil() as i64).clamp(0, w);
        let y1 = ((y + height).ceil() as i64).clamp(0, h);
        for py in y0..y1 {
            for px in x0..x1 {
                self.image.put_pixel(px as u32, py as u32, self.fill);
            }
        }
    }
}

/// Turn a polyline into edges, auto-closing for area coverage.
fn collect_edges(points: &[Point], edges: &mut Vec<Edge>) {
    if points.len() < 2 {
        return;
    }
    for pair in points.windows(2) {
        edges.push((pair[0], pair[1]));
    }
    let (first, last) = (points[0], points[points.len() - 1]);
    if first != last {
        edges.push((last, first));
    }
}

/// Even-odd scanline fill, sampling at pixel centers.
fn fill_even_odd(image: &mut RgbImage, edges: &[Edge], color: Rgb<u8>) {
    if edges.is_empty() {
        return;
    }
    let (w, h) = (image.width() as i64, image.height() as i64);
    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;
    for &((_, y1), (_, y2)) in edges {
        y_min = y_min.min(y1).min(y2);
        y_max = y_max.max(y1).max(y2);
    }
    let row0 = (y_min.floor() as i64).clamp(0, h.saturating_sub(1));
    let row1 = (y_max.ceil() as i64).clamp(0, h.saturating_sub(1));

    let mut crossings = Vec::new();
    for py in row0..=row1 {
        let yc = py as f32 + 0.5;
        crossings.clear();
        for &((x1, y1), (x2, y2)) in edges {
            if (y1 <= yc) != (y2 <= yc) {
                crossings.push(x1 + (x2 - x1) * (yc - y1) / (y2 - y1));
            }
        }
        crossings.sort_by(f32::total_cmp);
        for span in crossings.chunks_exact(2) {
            let x0 = ((span[0] - 0.5).ceil() as i64).max(0);
            let x1 = ((span[1] - 0.5).floor() as i64).min(w - 1);
            for px in x0..=x1 {
                image.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
