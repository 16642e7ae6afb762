// ray.rs - Ray and bounding box intersection
//
// Slab test in the box's local space. The world transform is affine, so the
// local ray parameter equals the world distance along a unit direction.

use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize_or_zero() }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance to the oriented box `[min, max]` placed by `transform`
    pub fn hit_obb(&self, transform: &Mat4, min: Vec3, max: Vec3) -> Option<f32> {
        // Only a singular transform is unpickable; tiny scales are fine
        let inv = transform.inverse();
        if !inv.is_finite() {
            return None;
        }
        let origin = inv.transform_point3(self.origin);
        let direction = inv.transform_vector3(self.direction);
        hit_aabb(origin, direction, min, max)
    }
}

/// Nearest non-negative t where `origin + t * direction` enters the box.
/// A ray starting inside reports the exit point.
pub fn hit_aabb(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let (o, d) = (origin[axis], direction[axis]);
        let (lo, hi) = (min[axis], max[axis]);

        if d == 0.0 {
            // Parallel to this slab
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let (mut t0, mut t1) = ((lo - o) * inv, (hi - o) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}
