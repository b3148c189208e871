//! Software rendering core for delilah, a previewer for simple 3D scenes.
//!
//! Scenes are built from four primitives (points, lines, spheres, triangles)
//! and rendered with a painter's algorithm against an abstract 2D surface:
//! vertices pass through a view and a pinhole projection matrix, primitives
//! are culled and clipped against the camera-space near/far slab, sorted by
//! quantized depth, and emitted back to front as filled and stroked paths.
//!
//! The intended use is composing a camera (position, orientation, field of
//! view) interactively before handing the parameters to a full-quality
//! offline renderer; there is no lighting, shading, or depth buffering.

pub mod camera;
pub mod color;
pub mod engine;
pub mod math;
pub mod render;
pub mod scene;

pub use camera::{CameraState, Projection};
pub use engine::Engine;
pub use math::Mat4;

pub use delilah_canvas::Canvas;
pub use glam::Vec3;
