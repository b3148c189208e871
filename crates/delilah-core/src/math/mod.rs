//! Scalar math types for the rendering pipeline.

pub mod mat4;

pub use mat4::Mat4;
