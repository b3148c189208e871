//! Camera pose and projection parameters with validated construction.
//!
//! Out-of-range arguments are programmer errors and panic; user-supplied
//! values must be range-checked by the host before they reach these types.

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Camera pose: world-space origin plus normalized-turn orientation.
///
/// The pose applies Roll-Z, Pitch-X, Yaw-Y, then the translation; the view
/// matrix the renderer builds is the inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    roll: f32,
}

impl CameraState {
    /// `yaw` and `roll` are turns in [0, 1); `pitch` is in [-1, 1] with the
    /// extremes meaning straight up and straight down (a quarter turn each
    /// way). Panics when any argument is out of range or non-finite.
    pub fn new(position: Vec3, yaw: f32, pitch: f32, roll: f32) -> Self {
        assert!(
            position.is_finite(),
            "camera position must be finite, got {position}"
        );
        assert!((0.0..1.0).contains(&yaw), "camera yaw must lie in [0, 1), got {yaw}");
        assert!(
            (-1.0..=1.0).contains(&pitch),
            "camera pitch must lie in [-1, 1], got {pitch}"
        );
        assert!(
            (0.0..1.0).contains(&roll),
            "camera roll must lie in [0, 1), got {roll}"
        );
        Self {
            position,
            yaw,
            pitch,
            roll,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn set_position(&mut self, position: Vec3) {
        *self = Self::new(position, self.yaw, self.pitch, self.roll);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        *self = Self::new(self.position, yaw, self.pitch, self.roll);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        *self = Self::new(self.position, self.yaw, pitch, self.roll);
    }

    pub fn set_roll(&mut self, roll: f32) {
        *self = Self::new(self.position, self.yaw, self.pitch, roll);
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0, 0.0, 0.0)
    }
}

/// Field of view and near/far slab.
///
/// `fov` is a fraction of a half turn, so 1.0 would be a 180-degree full
/// angle; the open range (0, 1) keeps the pinhole distance finite. The slab
/// satisfies `far < near < 1/tan(fov * pi/2)`, the Z at which the projection
/// matrix entry 1/d stays finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    fov: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// Panics when the arguments violate the invariants above.
    pub fn new(fov: f32, near: f32, far: f32) -> Self {
        assert!(
            fov > 0.0 && fov < 1.0,
            "field of view must lie in (0, 1), got {fov}"
        );
        assert!(
            near.is_finite() && far.is_finite(),
            "near and far must be finite, got near {near} far {far}"
        );
        let limit = 1.0 / (fov * FRAC_PI_2).tan();
        assert!(
            far < near && near < limit,
            "projection requires far < near < {limit}, got near {near} far {far}"
        );
        Self { fov, near, far }
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Distance from the image plane to the pinhole, 1/tan(fov * pi/2).
    pub fn focal(&self) -> f32 {
        1.0 / (self.fov * FRAC_PI_2).tan()
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(0.25, 0.0, -100.0)
    }
}
