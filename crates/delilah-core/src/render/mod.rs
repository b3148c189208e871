//! Per-frame rendering: view/projection build, two-pass vertex transform,
//! visibility, painter's sort, and draw dispatch.
//!
//! The renderer is generic over the drawing surface and owns no state of its
//! own; the per-scene scratch buffers live in [`FrameScratch`] and are reused
//! across frames without reallocation.

pub(crate) mod clip;
pub(crate) mod draw;

use delilah_canvas::Canvas;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::camera::{CameraState, Projection};
use crate::math::Mat4;
use crate::scene::{SceneObject, SceneStore};

/// Paint-key value for a culled object; sorts after every accepted key.
const REJECTED: u32 = 0xFFFF_FFFF;

/// Transform and sort buffers sized to the loaded scene.
#[derive(Debug)]
pub struct FrameScratch {
    /// Vertex positions after the view transform.
    camera_space: Vec<Vec3>,
    /// Camera-space positions pushed through the projection matrix.
    projected: Vec<Vec3>,
    /// One packed key per scene object: quantized Z in the high half, object
    /// index in the low half.
    paint: Vec<u32>,
}

impl FrameScratch {
    pub fn for_scene(scene: &SceneStore) -> Self {
        Self {
            camera_space: vec![Vec3::ZERO; scene.vertices.len()],
            projected: vec![Vec3::ZERO; scene.vertices.len()],
            paint: vec![REJECTED; scene.objects.len()],
        }
    }
}

/// Render one frame. Clears to the background color, then paints the scene
/// back to front. Skips everything but the clear when the view matrix is
/// degenerate.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    width: u32,
    height: u32,
    scene: &SceneStore,
    scratch: &mut FrameScratch,
    camera: &CameraState,
    projection: &Projection,
    background: [u8; 3],
) {
    assert!(
        width >= 2 && height >= 2,
        "render target must be at least 2x2, got {width}x{height}"
    );

    canvas.set_fill_color(background[0], background[1], background[2]);
    canvas.fill_rect(0.0, 0.0, width as f32, height as f32);

    let view = view_matrix(camera);
    if !view.is_finite() {
        log::warn!("view matrix is not finite, skipping frame");
        return;
    }
    let proj = projection_matrix(projection, width, height);

    for (i, &world) in scene.vertices.iter().enumerate() {
        let cam = view.transform(world);
        scratch.camera_space[i] = cam;
        scratch.projected[i] = proj.transform(cam);
    }

    build_paint_keys(scene, scratch, projection);
    scratch.paint.sort_unstable();

    for slot in 0..scratch.paint.len() {
        let key = scratch.paint[slot];
        if key == REJECTED {
            break;
        }
        let index = (key & 0xFFFF) as usize;
        draw_object(canvas, scene, scratch, projection, &proj, index, height);
    }
}

/// Inverse of the camera pose (Roll-Z, Pitch-X, Yaw-Y, Translate), applied
/// in reverse with negated arguments.
fn view_matrix(camera: &CameraState) -> Mat4 {
    let pos = camera.position();
    let mut view = Mat4::IDENTITY;
    view.translate(-pos.x, -pos.y, -pos.z);
    view.rotate_y(-camera.yaw() * TAU);
    view.rotate_x(-camera.pitch() * FRAC_PI_2);
    view.rotate_z(-camera.roll() * TAU);
    view
}

/// Pinhole projection followed by the flip into screen-down pixel space with
/// the origin at the top-left corner.
fn projection_matrix(projection: &Projection, width: u32, height: u32) -> Mat4 {
    let (w, h) = (width as f32, height as f32);
    let mut proj = Mat4::IDENTITY;
    proj.perspective(projection.focal());
    proj.scale(h / 2.0, -h / 2.0, 1.0);
    proj.translate(w / 2.0, h / 2.0, 0.0);
    proj
}

/// Cull each object against the slab (and, for triangles, the view
/// direction), then pack accepted objects into sortable paint keys.
fn build_paint_keys(scene: &SceneStore, scratch: &mut FrameScratch, projection: &Projection) {
    let near = projection.near();
    let far = projection.far();

    for (index, object) in scene.objects.iter().enumerate() {
        let centroid = match *object {
            SceneObject::Point { vertex, .. }
            | SceneObject::Sphere { center: vertex, .. } => {
                let z = scratch.camera_space[usize::from(vertex)].z;
                (far < z && z < near).then_some(z)
            }
            SceneObject::Line { start, end, .. } => {
                let z1 = scratch.camera_space[usize::from(start)].z;
                let z2 = scratch.camera_space[usize::from(end)].z;
                let outside = (z1 >= near && z2 >= near) || (z1 <= far && z2 <= far);
                (!outside).then(|| (z1 + z2) / 2.0)
            }
            SceneObject::Triangle { a, b, c, .. } => {
                let v1 = scratch.camera_space[usize::from(a)];
                let v2 = scratch.camera_space[usize::from(b)];
                let v3 = scratch.camera_space[usize::from(c)];
                // Visible iff the view ray to v1 opposes the outward normal.
                if v1.dot((v2 - v1).cross(v3 - v1)) >= 0.0 {
                    None
                } else if v1.z >= near && v2.z >= near && v3.z >= near {
                    None
                } else if v1.z <= far && v2.z <= far && v3.z <= far {
                    None
                } else {
                    Some((v1.z + v2.z + v3.z) / 3.0)
                }
            }
        };

        scratch.paint[index] = match centroid {
            Some(z) => (u32::from(quantize_depth(z, near, far)) << 16) | index as u32,
            None => REJECTED,
        };
    }
}

/// Map a camera-space Z to [0, 65535] with far at 0 and near at 65535.
fn quantize_depth(z: f32, near: f32, far: f32) -> u16 {
    let z = if z.is_finite() { z } else { 0.0 };
    let z = z.clamp(far, near);
    let scaled = (z - far) / (near - far) * 65535.0;
    scaled.round().clamp(0.0, 65535.0) as u16
}

fn draw_object<C: Canvas + ?Sized>(
    canvas: &mut C,
    scene: &SceneStore,
    scratch: &FrameScratch,
    projection: &Projection,
    proj: &Mat4,
    index: usize,
    height: u32,
) {
    let near = projection.near();
    let far = projection.far();

    match scene.objects[index] {
        SceneObject::Point { vertex, style } => {
            draw::point(
                canvas,
                scratch.projected[usize::from(vertex)],
                &scene.point_styles[usize::from(style)],
            );
        }
        SceneObject::Line { start, end, style } => {
            let (i, j) = (usize::from(start), usize::from(end));
            let style = &scene.line_styles[usize::from(style)];
            let inside = |z: f32| far < z && z < near;
            if inside(scratch.camera_space[i].z) && inside(scratch.camera_space[j].z) {
                draw::segment(canvas, scratch.projected[i], scratch.projected[j], style);
            } else {
                let (p1, p2) =
                    clip::clip_line(scratch.camera_space[i], scratch.camera_space[j], near, far);
                draw::segment(canvas, proj.transform(p1), proj.transform(p2), style);
            }
        }
        SceneObject::Sphere {
            center,
            radius,
            fill,
            stroke,
        } => {
            let z = scratch.camera_space[usize::from(center)].z;
            let focal = projection.focal();
            // Pinhole projection of a world-space length at this depth,
            // pre-scaled to half the viewport height.
            let radius_px = scene.radii[usize::from(radius)] * (focal * height as f32 / 2.0)
                / (focal - z);
            if radius_px.is_finite() && radius_px > 0.0 {
                draw::sphere(
                    canvas,
                    scratch.projected[usize::from(center)],
                    radius_px,
                    fill,
                    stroke.map(|s| &scene.line_styles[usize::from(s)]),
                );
            }
        }
        SceneObject::Triangle {
            a,
            b,
            c,
            fill,
            edges,
        } => {
            let cam = [
                scratch.camera_space[usize::from(a)],
                scratch.camera_space[usize::from(b)],
                scratch.camera_space[usize::from(c)],
            ];
            if cam.iter().all(|v| far < v.z && v.z < near) {
                let corners = [
                    scratch.projected[usize::from(a)],
                    scratch.projected[usize::from(b)],
                    scratch.projected[usize::from(c)],
                ];
                draw::triangle(canvas, corners, fill, edges, &scene.line_styles);
            } else {
                let k_max = clip::subtriangle_count([cam[0].z, cam[1].z, cam[2].z], near, far);
                for k in 1..=k_max {
                    let clipped = clip::clip_triangle(cam, near, far, k, k_max);
                    let corners = clipped.map(|v| proj.transform(v));
                    draw::triangle(canvas, corners, fill, edges, &scene.line_styles);
                }
            }
        }
    }
}
