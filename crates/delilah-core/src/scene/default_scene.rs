//! The built-in scene shown before any file is loaded.

use glam::Vec3;

use super::{LineStyle, PointShape, PointStyle, SceneObject, SceneStore};

/// Grid nodes per side.
const GRID_SIDE: i32 = 11;
/// World units between neighboring grid nodes.
const GRID_SPACING: f32 = 5.0;

/// Build the default scene: an 11x11 grid of points on the XZ plane with the
/// center node omitted, plus a line marking the Y axis.
pub fn build() -> SceneStore {
    let half = (GRID_SIDE - 1) / 2;
    let extent = half as f32 * GRID_SPACING;

    let mut vertices = Vec::with_capacity((GRID_SIDE * GRID_SIDE + 1) as usize);
    let mut objects = Vec::with_capacity((GRID_SIDE * GRID_SIDE) as usize);
    for ix in -half..=half {
        for iz in -half..=half {
            if ix == 0 && iz == 0 {
                continue;
            }
            objects.push(SceneObject::Point {
                vertex: vertices.len() as u16,
                style: 0,
            });
            vertices.push(Vec3::new(
                ix as f32 * GRID_SPACING,
                0.0,
                iz as f32 * GRID_SPACING,
            ));
        }
    }

    let top = vertices.len() as u16;
    vertices.push(Vec3::new(0.0, extent, 0.0));
    vertices.push(Vec3::new(0.0, -extent, 0.0));
    objects.push(SceneObject::Line {
        start: top,
        end: top + 1,
        style: 0,
    });

    SceneStore {
        vertices,
        radii: Vec::new(),
        objects,
        point_styles: vec![PointStyle {
            shape: PointShape::Circle,
            size: 3.0,
            stroke: 0.0,
            fill: Some(31), // pure blue
            ink: None,
        }],
        line_styles: vec![LineStyle {
            width: 2.0,
            color: 992, // pure green
        }],
    }
}
