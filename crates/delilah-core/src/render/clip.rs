//! Near/far slab clipping in camera space.
//!
//! Triangles straddling the slab are emitted as one, two, or four
//! subtriangles; each plane with exactly one violating vertex doubles the
//! count, and the iteration index selects which piece of the partition to
//! produce. Lines clamp both endpoints to the slab by interpolation.

use glam::Vec3;

/// How many subtriangles the clip of this triangle produces.
pub(crate) fn subtriangle_count(z: [f32; 3], near: f32, far: f32) -> u32 {
    let mut k_max = 1;
    if z.iter().filter(|&&z| z < far).count() == 1 {
        k_max *= 2;
    }
    if z.iter().filter(|&&z| z > near).count() == 1 {
        k_max *= 2;
    }
    k_max
}

/// Produce the k-th subtriangle (1-based, k <= k_max) of a triangle that
/// straddles the slab. The caller guarantees at least one vertex inside.
pub(crate) fn clip_triangle(corners: [Vec3; 3], near: f32, far: f32, k: u32, k_max: u32) -> [Vec3; 3] {
    // Sort descending by Z; three-element bubble.
    let mut v = corners;
    if v[0].z < v[1].z {
        v.swap(0, 1);
    }
    if v[1].z < v[2].z {
        v.swap(1, 2);
    }
    if v[0].z < v[1].z {
        v.swap(0, 1);
    }

    // Near plane, acting on the highest vertices.
    if v[0].z > near && v[1].z > near {
        // Two vertices in front: slide both down to near, toward the third.
        v[0] = slide_to(v[2], v[0], near);
        v[1] = slide_to(v[2], v[1], near);
    } else if v[0].z > near {
        // One vertex in front: the surviving quad splits into two triangles,
        // selected by which half of the iterations we are in.
        let onto_mid = slide_to(v[0], v[1], near);
        if k > k_max / 2 {
            v[1] = slide_to(v[0], v[2], near);
        }
        v[0] = onto_mid;
    }

    // Far plane, acting on the lowest vertices.
    if v[1].z < far && v[2].z < far {
        v[1] = slide_to(v[0], v[1], far);
        v[2] = slide_to(v[0], v[2], far);
    } else if v[2].z < far {
        let onto_top = slide_to(v[0], v[2], far);
        if k % 2 == 0 {
            v[0] = slide_to(v[1], v[2], far);
        }
        v[2] = onto_top;
    }

    v
}

/// Clamp a line to the slab. The caller guarantees the line is not wholly
/// outside. Returns the endpoints ordered by descending Z.
pub(crate) fn clip_line(p1: Vec3, p2: Vec3, near: f32, far: f32) -> (Vec3, Vec3) {
    let (a, b) = if p1.z > p2.z { (p1, p2) } else { (p2, p1) };
    let t1 = if a.z > near {
        (near - a.z) / (b.z - a.z)
    } else {
        0.0
    };
    let t2 = if b.z < far { (far - a.z) / (b.z - a.z) } else { 1.0 };
    (a + (b - a) * t1, a + (b - a) * t2)
}

/// Point on the segment from..to whose Z equals `plane`.
fn slide_to(from: Vec3, to: Vec3, plane: f32) -> Vec3 {
    let t = (plane - from.z) / (to.z - from.z);
    from + (to - from) * t
}
