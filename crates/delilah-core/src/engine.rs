//! The owned rendering context.
//!
//! All previewer state lives here: the loaded scene, the per-scene scratch
//! buffers, camera, projection, background, and the last soft-failure
//! message. Hosts create one `Engine` and pass it around explicitly; there
//! is no process-wide state.

use delilah_canvas::Canvas;

use crate::camera::{CameraState, Projection};
use crate::render::{self, FrameScratch};
use crate::scene::{default_scene, parser, SceneStore};

/// Neutral gray shown behind every scene.
const DEFAULT_BACKGROUND: [u8; 3] = [170, 170, 170];

pub struct Engine {
    scene: SceneStore,
    scratch: FrameScratch,
    camera: CameraState,
    projection: Projection,
    background: [u8; 3],
    last_error: String,
}

impl Engine {
    /// Create an engine holding the built-in default scene.
    pub fn new() -> Self {
        let scene = default_scene::build();
        let scratch = FrameScratch::for_scene(&scene);
        Self {
            scene,
            scratch,
            camera: CameraState::default(),
            projection: Projection::default(),
            background: DEFAULT_BACKGROUND,
            last_error: String::new(),
        }
    }

    /// Validate and install a scene file. Returns false on rejection, in
    /// which case `last_error` describes the first violation and the current
    /// scene is left untouched.
    pub fn load_scene(&mut self, text: &str) -> bool {
        match parser::parse_scene(text) {
            Ok(scene) => {
                self.install(scene);
                true
            }
            Err(err) => {
                log::debug!("scene rejected: {err}");
                self.last_error = err.to_string();
                false
            }
        }
    }

    /// Replace the current scene with the built-in default.
    pub fn load_default_scene(&mut self) {
        self.install(default_scene::build());
    }

    /// Message for the most recent rejected load, or empty if the last load
    /// succeeded.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Render one frame onto `canvas`. The target must be at least 2x2
    /// pixels. The canvas pen state is clobbered; camera and scene are not
    /// modified.
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, width: u32, height: u32) {
        render::render_frame(
            canvas,
            width,
            height,
            &self.scene,
            &mut self.scratch,
            &self.camera,
            &self.projection,
            self.background,
        );
    }

    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn set_camera(&mut self, camera: CameraState) {
        self.camera = camera;
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    pub fn background_color(&self) -> [u8; 3] {
        self.background
    }

    pub fn set_background_color(&mut self, r: u8, g: u8, b: u8) {
        self.background = [r, g, b];
    }

    fn install(&mut self, scene: SceneStore) {
        self.scratch = FrameScratch::for_scene(&scene);
        self.scene = scene;
        self.last_error.clear();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
