//! End-to-end renderer tests against a recording canvas.

use delilah_core::{CameraState, Canvas, Engine, Projection, Vec3};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
enum Call {
    FillColor(u8, u8, u8),
    StrokeColor(u8, u8, u8),
    LineWidth(f32),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    ClosePath,
    Arc { cx: f32, cy: f32, r: f32 },
    Rect(f32, f32, f32, f32),
    Fill,
    Stroke,
    FillRect(f32, f32, f32, f32),
}

/// Canvas that records every call for later inspection.
#[derive(Default)]
struct RecordingCanvas {
    calls: Vec<Call>,
}

impl RecordingCanvas {
    fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| matches(c)).count()
    }

    fn position(&self, call: &Call) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }
}

impl Canvas for RecordingCanvas {
    fn set_fill_color(&mut self, r: u8, g: u8, b: u8) {
        self.calls.push(Call::FillColor(r, g, b));
    }
    fn set_stroke_color(&mut self, r: u8, g: u8, b: u8) {
        self.calls.push(Call::StrokeColor(r, g, b));
    }
    fn set_line_width(&mut self, width: f32) {
        self.calls.push(Call::LineWidth(width));
    }
    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.calls.push(Call::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f32, y: f32) {
        self.calls.push(Call::LineTo(x, y));
    }
    fn close_path(&mut self) {
        self.calls.push(Call::ClosePath);
    }
    fn arc(&mut self, cx: f32, cy: f32, r: f32, _start: f32, _end: f32) {
        self.calls.push(Call::Arc { cx, cy, r });
    }
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(Call::Rect(x, y, w, h));
    }
    fn fill(&mut self) {
        self.calls.push(Call::Fill);
    }
    fn stroke(&mut self) {
        self.calls.push(Call::Stroke);
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(Call::FillRect(x, y, w, h));
    }
}

/// Load `json` (or keep the default scene when None), pose the camera, and
/// render one 200x200 frame.
fn render_frame(
    json: Option<&str>,
    camera: CameraState,
    projection: Projection,
) -> RecordingCanvas {
    let mut engine = Engine::new();
    if let Some(json) = json {
        assert!(engine.load_scene(json), "load failed: {}", engine.last_error());
    }
    engine.set_camera(camera);
    engine.set_projection(projection);
    let mut canvas = RecordingCanvas::default();
    engine.render(&mut canvas, 200, 200);
    canvas
}

fn origin_camera() -> CameraState {
    CameraState::default()
}

mod frame_setup {
    use super::*;

    #[test]
    fn frame_starts_with_background_clear() {
        let canvas = render_frame(None, origin_camera(), Projection::default());
        assert_eq!(canvas.calls[0], Call::FillColor(170, 170, 170));
        assert_eq!(canvas.calls[1], Call::FillRect(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    #[should_panic(expected = "at least 2x2")]
    fn degenerate_viewport_is_a_programmer_error() {
        let mut engine = Engine::new();
        let mut canvas = RecordingCanvas::default();
        engine.render(&mut canvas, 1, 1);
    }
}

mod default_scene_visibility {
    use super::*;

    #[test]
    fn backed_up_camera_sees_the_whole_grid() {
        // From (0, 0, 30) every grid node sits strictly inside the slab.
        let camera = CameraState::new(Vec3::new(0.0, 0.0, 30.0), 0.0, 0.0, 0.0);
        let canvas = render_frame(None, camera, Projection::default());

        let circles = canvas.count(|c| matches!(c, Call::Arc { .. }));
        assert_eq!(circles, 120, "grid points minus the omitted center");

        let fills = canvas.count(|c| matches!(c, Call::Fill));
        assert_eq!(fills, 120, "each point circle is filled");

        let strokes = canvas.count(|c| matches!(c, Call::Stroke));
        assert_eq!(strokes, 1, "the Y-axis line");
    }

    #[test]
    fn camera_at_origin_sees_only_the_near_half() {
        // With near = 0 the rows at Z >= 0 and the axis line (both endpoints
        // at Z = 0) fail the strict slab test.
        let canvas = render_frame(None, origin_camera(), Projection::default());
        let circles = canvas.count(|c| matches!(c, Call::Arc { .. }));
        assert_eq!(circles, 55, "five rows of eleven grid points");
        assert_eq!(canvas.count(|c| matches!(c, Call::Stroke)), 0);
    }
}

mod triangle_visibility {
    use super::*;

    #[test]
    fn triangle_behind_the_camera_leaves_only_background() {
        let json = r#"{
            "vertex": [0,0,1, 1,0,1, 0,1,1],
            "scene": [0, 1, 2, 31, 0]
        }"#;
        let canvas = render_frame(Some(json), origin_camera(), Projection::default());
        assert_eq!(canvas.calls.len(), 2, "only the clear, got {:?}", canvas.calls);
    }

    #[test]
    fn counter_wound_triangle_is_kept() {
        let json = r#"{
            "vertex": [0,0,-5, 1,0,-5, 0,1,-5],
            "scene": [0, 1, 2, 31, 0]
        }"#;
        let canvas = render_frame(Some(json), origin_camera(), Projection::default());
        assert_eq!(canvas.count(|c| matches!(c, Call::Fill)), 1);
    }

    #[test]
    fn mirror_wound_triangle_is_culled() {
        let json = r#"{
            "vertex": [0,0,-5, 1,0,-5, 0,1,-5],
            "scene": [0, 2, 1, 31, 0]
        }"#;
        let canvas = render_frame(Some(json), origin_camera(), Projection::default());
        assert_eq!(canvas.count(|c| matches!(c, Call::Fill)), 0);
    }

    #[test]
    fn edge_selectors_stroke_with_the_selected_style() {
        let json = r#"{
            "vertex": [0,0,-5, 1,0,-5, 0,1,-5],
            "scene": [0, 1, 2, 31, 1024],
            "lstyle": [{"width": 2, "color": 992}]
        }"#;
        let canvas = render_frame(Some(json), origin_camera(), Projection::default());
        assert_eq!(canvas.count(|c| matches!(c, Call::Fill)), 1);
        assert_eq!(canvas.count(|c| matches!(c, Call::Stroke)), 1);
        assert!(canvas.position(&Call::StrokeColor(0, 255, 0)).is_some());
        assert!(canvas.position(&Call::LineWidth(2.0)).is_some());
    }
}

mod triangle_clipping {
    use super::*;

    #[test]
    fn near_straddling_triangle_splits_in_two() {
        let json = r#"{
            "vertex": [-1,-1,-1, 1,-1,-1, 0,1,0.5],
            "scene": [0, 1, 2, 31, 0]
        }"#;
        let canvas = render_frame(
            Some(json),
            origin_camera(),
            Projection::new(0.25, 0.0, -10.0),
        );
        assert_eq!(
            canvas.count(|c| matches!(c, Call::Fill)),
            2,
            "one vertex above near yields exactly two subtriangles"
        );
    }

    #[test]
    fn far_straddling_triangle_splits_in_two() {
        let json = r#"{
            "vertex": [-1,-1,-5, 1,-1,-5, 0,1,-15],
            "scene": [0, 1, 2, 31, 0]
        }"#;
        let canvas = render_frame(
            Some(json),
            origin_camera(),
            Projection::new(0.25, 0.0, -10.0),
        );
        assert_eq!(canvas.count(|c| matches!(c, Call::Fill)), 2);
    }

    #[test]
    fn interior_triangle_is_not_subdivided() {
        let json = r#"{
            "vertex": [0,0,-5, 1,0,-5, 0,1,-5],
            "scene": [0, 1, 2, 31, 0]
        }"#;
        let canvas = render_frame(
            Some(json),
            origin_camera(),
            Projection::new(0.25, 0.0, -10.0),
        );
        assert_eq!(canvas.count(|c| matches!(c, Call::Fill)), 1);
    }
}

mod line_clipping {
    use super::*;

    #[test]
    fn near_violating_endpoint_lands_on_the_near_plane() {
        let json = r#"{
            "vertex": [2,0,5, 2,0,-5],
            "scene": [0, 1, 65535, 0, 0],
            "lstyle": [{"width": 1, "color": 0}]
        }"#;
        let canvas = render_frame(Some(json), origin_camera(), Projection::default());
        assert_eq!(canvas.count(|c| matches!(c, Call::Stroke)), 1);

        // The clamped endpoint is (2, 0, 0) in camera space; at Z = 0 the
        // projection divides by W = 1, so it maps to (2 * h/2 + w/2, h/2).
        let moved = canvas
            .calls
            .iter()
            .find_map(|c| match c {
                Call::MoveTo(x, y) => Some((*x, *y)),
                _ => None,
            })
            .expect("line emits a MoveTo");
        assert!((moved.0 - 300.0).abs() < 1e-3, "x was {}", moved.0);
        assert!((moved.1 - 100.0).abs() < 1e-3, "y was {}", moved.1);
    }

    #[test]
    fn interior_line_draws_without_clipping() {
        let json = r#"{
            "vertex": [0,0,-5, 1,1,-6],
            "scene": [0, 1, 65535, 0, 0],
            "lstyle": [{"width": 1, "color": 0}]
        }"#;
        let canvas = render_frame(Some(json), origin_camera(), Projection::default());
        assert_eq!(canvas.count(|c| matches!(c, Call::Stroke)), 1);
    }
}

mod spheres {
    use super::*;

    #[test]
    fn projected_radius_follows_the_pinhole_model() {
        // The sphere sits at Z = -focal, so the divisor (focal - z) doubles
        // the focal length and the projected radius is r * h/4.
        let json = r#"{
            "vertex": [0, 0, -2.414213562373095],
            "radius": [1],
            "scene": [0, 65535, 0, 31, 65535]
        }"#;
        let canvas = render_frame(Some(json), origin_camera(), Projection::default());
        let arc = canvas
            .calls
            .iter()
            .find_map(|c| match c {
                Call::Arc { cx, cy, r } => Some((*cx, *cy, *r)),
                _ => None,
            })
            .expect("sphere emits an arc");
        assert!((arc.0 - 100.0).abs() < 1e-3, "cx was {}", arc.0);
        assert!((arc.1 - 100.0).abs() < 1e-3, "cy was {}", arc.1);
        assert!((arc.2 - 50.0).abs() < 0.01, "r was {}", arc.2);
        assert_eq!(canvas.count(|c| matches!(c, Call::Fill)), 1);
        assert_eq!(canvas.count(|c| matches!(c, Call::Stroke)), 0);
    }

    #[test]
    fn sphere_outside_the_slab_is_culled() {
        let json = r#"{
            "vertex": [0, 0, 5],
            "radius": [1],
            "scene": [0, 65535, 0, 31, 65535]
        }"#;
        let canvas = render_frame(Some(json), origin_camera(), Projection::default());
        assert_eq!(canvas.calls.len(), 2, "only the clear");
    }
}

mod paint_order {
    use super::*;

    #[test]
    fn farther_objects_are_painted_first() {
        let json = r#"{
            "vertex": [0,0,-50, 3,0,-5],
            "scene": [
                1, 65535, 65535, 0, 1,
                0, 65535, 65535, 0, 0
            ],
            "pstyle": [
                {"shape": "c", "size": 3, "stroke": 0, "fill": 31744},
                {"shape": "c", "size": 3, "stroke": 0, "fill": 31}
            ]
        }"#;
        let canvas = render_frame(Some(json), origin_camera(), Projection::default());
        let red = canvas
            .position(&Call::FillColor(255, 0, 0))
            .expect("far point painted");
        let blue = canvas
            .position(&Call::FillColor(0, 0, 255))
            .expect("near point painted");
        assert!(red < blue, "far red point must be painted before near blue");
    }
}
