//! Unit tests for the row-major matrix type.

use delilah_core::{Mat4, Vec3};

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

mod composition {
    use super::*;

    #[test]
    fn identity_passes_points_through() {
        let m = Mat4::IDENTITY;
        let p = Vec3::new(1.5, -2.0, 7.0);
        assert_eq!(m.transform(p), p);
    }

    #[test]
    fn consecutive_translations_sum() {
        let mut chained = Mat4::IDENTITY;
        chained.translate(1.0, 2.0, 3.0);
        chained.translate(4.0, 5.0, 6.0);

        let mut direct = Mat4::IDENTITY;
        direct.translate(5.0, 7.0, 9.0);

        assert_eq!(chained, direct);
    }

    #[test]
    fn ops_apply_in_source_order() {
        // Translate first, then scale: the translation gets scaled.
        let mut m = Mat4::IDENTITY;
        m.translate(1.0, 0.0, 0.0);
        m.scale(2.0, 2.0, 2.0);
        assert!(close(m.transform(Vec3::ZERO), Vec3::new(2.0, 0.0, 0.0)));

        // Scale first, then translate: the translation is untouched.
        let mut m = Mat4::IDENTITY;
        m.scale(2.0, 2.0, 2.0);
        m.translate(1.0, 0.0, 0.0);
        assert!(close(m.transform(Vec3::ZERO), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn scale_is_per_axis() {
        let mut m = Mat4::IDENTITY;
        m.scale(2.0, 3.0, 4.0);
        assert!(close(
            m.transform(Vec3::new(1.0, 1.0, 1.0)),
            Vec3::new(2.0, 3.0, 4.0)
        ));
    }
}

mod rotation {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    #[test]
    fn quarter_turn_about_y_sends_x_to_negative_z() {
        let mut m = Mat4::IDENTITY;
        m.rotate_y(FRAC_PI_2);
        assert!(close(m.transform(Vec3::X), Vec3::NEG_Z));
    }

    #[test]
    fn quarter_turn_about_x_sends_y_to_z() {
        let mut m = Mat4::IDENTITY;
        m.rotate_x(FRAC_PI_2);
        assert!(close(m.transform(Vec3::Y), Vec3::Z));
    }

    #[test]
    fn quarter_turn_about_z_sends_x_to_y() {
        let mut m = Mat4::IDENTITY;
        m.rotate_z(FRAC_PI_2);
        assert!(close(m.transform(Vec3::X), Vec3::Y));
    }

    #[test]
    fn full_turn_is_identity() {
        let mut m = Mat4::IDENTITY;
        m.rotate_y(TAU);
        let p = Vec3::new(3.0, -1.0, 2.0);
        assert!(close(m.transform(p), p));
    }

    #[test]
    fn opposite_rotations_cancel() {
        let mut m = Mat4::IDENTITY;
        m.rotate_z(0.7);
        m.rotate_z(-0.7);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(close(m.transform(p), p));
    }
}

mod perspective {
    use super::*;

    #[test]
    fn screen_plane_is_unscaled() {
        // Points at Z = 0 have W = 1 and pass through untouched.
        let mut m = Mat4::IDENTITY;
        m.perspective(2.0);
        let p = Vec3::new(3.0, -4.0, 0.0);
        assert!(close(m.transform(p), p));
    }

    #[test]
    fn points_behind_the_screen_shrink() {
        let mut m = Mat4::IDENTITY;
        m.perspective(2.0);
        // z = -2 gives W = 2, halving X and Y.
        let out = m.transform(Vec3::new(4.0, 2.0, -2.0));
        assert!(close(out, Vec3::new(2.0, 1.0, -1.0)), "got {out}");
    }

    #[test]
    fn projection_point_maps_to_origin() {
        // At Z = d the divisor W reaches exactly zero.
        let mut m = Mat4::IDENTITY;
        m.perspective(2.0);
        assert_eq!(m.transform(Vec3::new(5.0, 5.0, 2.0)), Vec3::ZERO);
    }
}

mod degeneracy {
    use super::*;

    #[test]
    fn overflowed_cells_are_not_finite() {
        let mut m = Mat4::IDENTITY;
        m.translate(f32::MAX, 0.0, 0.0);
        m.scale(2.0, 1.0, 1.0);
        assert!(!m.is_finite());
    }

    #[test]
    fn identity_is_finite() {
        assert!(Mat4::IDENTITY.is_finite());
    }

    #[test]
    fn non_finite_components_are_scrubbed_to_zero() {
        let mut m = Mat4::IDENTITY;
        m.translate(f32::MAX, 1.0, 0.0);
        m.scale(2.0, 1.0, 1.0);
        let out = m.transform(Vec3::ZERO);
        assert_eq!(out.x, 0.0, "overflowed X must be scrubbed");
        assert_eq!(out.y, 1.0, "finite components survive");
    }
}
