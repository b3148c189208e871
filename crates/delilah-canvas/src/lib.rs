//! Abstract 2D drawing surface for the delilah renderer.
//!
//! The renderer issues filled and stroked paths through this trait and never
//! names a concrete surface. Coordinates are in pixels with the origin at the
//! top-left corner. Colors are 8-bit RGB.

/// A stateful 2D path renderer, modeled on an immediate-mode canvas.
///
/// The renderer clobbers the pen state (fill color, stroke color, line width,
/// current path) during a frame; callers must not rely on it afterward. Line
/// cap, join, and miter settings are the host's concern and are never touched
/// here.
pub trait Canvas {
    /// Set the color used by subsequent `fill` and `fill_rect` calls.
    fn set_fill_color(&mut self, r: u8, g: u8, b: u8);

    /// Set the color used by subsequent `stroke` calls.
    fn set_stroke_color(&mut self, r: u8, g: u8, b: u8);

    /// Set the pen width, in pixels, used by subsequent `stroke` calls.
    fn set_line_width(&mut self, width: f32);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new subpath at the given point.
    fn move_to(&mut self, x: f32, y: f32);

    /// Extend the current subpath with a straight segment to the given point.
    fn line_to(&mut self, x: f32, y: f32);

    /// Close the current subpath back to its starting point.
    fn close_path(&mut self);

    /// Append a circular arc centered at (cx, cy) with the given radius,
    /// sweeping from `start` to `end` radians.
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32);

    /// Append an axis-aligned rectangle subpath.
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill the current path with the fill color.
    fn fill(&mut self);

    /// Stroke the current path with the stroke color and line width.
    fn stroke(&mut self);

    /// Fill an axis-aligned rectangle directly, without touching the path.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}
