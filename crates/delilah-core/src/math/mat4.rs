//! Row-major 4x4 homogeneous matrix.
//!
//! Points are treated as row vectors with an implicit W of 1, so composition
//! reads top to bottom: each builder method post-multiplies self by the named
//! elementary matrix, and the op applied last in source order acts last on the
//! point.

use glam::{Vec3, Vec4};

/// A 4x4 matrix stored as four rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    rows: [Vec4; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        rows: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// Post-multiply self by a translation.
    pub fn translate(&mut self, tx: f32, ty: f32, tz: f32) {
        self.post_multiply(&Self {
            rows: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::new(tx, ty, tz, 1.0)],
        });
    }

    /// Post-multiply self by a non-uniform scale.
    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.post_multiply(&Self {
            rows: [
                Vec4::new(sx, 0.0, 0.0, 0.0),
                Vec4::new(0.0, sy, 0.0, 0.0),
                Vec4::new(0.0, 0.0, sz, 0.0),
                Vec4::W,
            ],
        });
    }

    /// Post-multiply self by a rotation of `angle` radians about the X axis.
    pub fn rotate_x(&mut self, angle: f32) {
        let (s, c) = angle.sin_cos();
        self.post_multiply(&Self {
            rows: [
                Vec4::X,
                Vec4::new(0.0, c, s, 0.0),
                Vec4::new(0.0, -s, c, 0.0),
                Vec4::W,
            ],
        });
    }

    /// Post-multiply self by a rotation of `angle` radians about the Y axis.
    pub fn rotate_y(&mut self, angle: f32) {
        let (s, c) = angle.sin_cos();
        self.post_multiply(&Self {
            rows: [
                Vec4::new(c, 0.0, -s, 0.0),
                Vec4::Y,
                Vec4::new(s, 0.0, c, 0.0),
                Vec4::W,
            ],
        });
    }

    /// Post-multiply self by a rotation of `angle` radians about the Z axis.
    pub fn rotate_z(&mut self, angle: f32) {
        let (s, c) = angle.sin_cos();
        self.post_multiply(&Self {
            rows: [
                Vec4::new(c, s, 0.0, 0.0),
                Vec4::new(-s, c, 0.0, 0.0),
                Vec4::Z,
                Vec4::W,
            ],
        });
    }

    /// Post-multiply self by the pinhole projection matrix for a projection
    /// point at Z = `d`. The image plane lies at Z = 0 and is not flipped; the
    /// only non-identity entry is m[2][3] = -1/d.
    pub fn perspective(&mut self, d: f32) {
        let mut pinhole = Self::IDENTITY;
        pinhole.rows[2].w = -1.0 / d;
        self.post_multiply(&pinhole);
    }

    /// Transform a point: row vector times matrix, then divide by the
    /// resulting W. A resulting W of zero maps the point to the origin, and
    /// any non-finite output component is coerced to zero.
    pub fn transform(&self, point: Vec3) -> Vec3 {
        let row = point.x * self.rows[0]
            + point.y * self.rows[1]
            + point.z * self.rows[2]
            + self.rows[3];
        if row.w == 0.0 {
            return Vec3::ZERO;
        }
        let v = row.truncate() / row.w;
        Vec3::new(scrub(v.x), scrub(v.y), scrub(v.z))
    }

    /// True iff all sixteen cells are finite.
    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(|row| row.is_finite())
    }

    fn post_multiply(&mut self, rhs: &Self) {
        for row in &mut self.rows {
            *row = row.x * rhs.rows[0]
                + row.y * rhs.rows[1]
                + row.z * rhs.rows[2]
                + row.w * rhs.rows[3];
        }
    }
}

fn scrub(component: f32) -> f32 {
    if component.is_finite() {
        component
    } else {
        0.0
    }
}
