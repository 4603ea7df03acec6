//! Ray/plane intersection used to anchor drag gestures in world space.
//!
//! Plane-locked dragging and pivot-plane panning both work the same way:
//! capture a world-space hit at drag start, recompute the hit each move,
//! and translate by the difference so the anchored point tracks the
//! cursor.

use glam::Vec3;

/// Rays whose direction is closer than this to the plane are treated as
/// parallel (no intersection).
const PARALLEL_EPSILON: f32 = 1e-6;

/// World-space ray with an origin and a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin (the camera eye for picking rays).
    pub origin: Vec3,
    /// Normalized ray direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Intersect a ray with the infinite plane through `point` with `normal`.
///
/// Returns `None` when the ray is parallel to the plane or the
/// intersection lies behind the ray origin. Callers treat a miss as
/// "no delta this update" rather than an error.
#[must_use]
pub fn intersect_ray_plane(
    ray: &Ray,
    point: Vec3,
    normal: Vec3,
) -> Option<Vec3> {
    let denom = normal.dot(ray.direction);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = normal.dot(point - ray.origin) / denom;
    if t < 0.0 {
        return None;
    }
    Some(ray.at(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_ground_plane_from_above() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = intersect_ray_plane(&ray, Vec3::ZERO, Vec3::Y).unwrap();
        assert!(hit.abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn oblique_hit_lands_on_plane() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 5.0), Vec3::new(0.0, -1.0, -1.0));
        let hit = intersect_ray_plane(&ray, Vec3::ZERO, Vec3::Y).unwrap();
        assert!(hit.abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(intersect_ray_plane(&ray, Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn plane_behind_origin_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(intersect_ray_plane(&ray, Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn offset_plane_point_shifts_hit() {
        let ray = Ray::new(Vec3::new(3.0, 10.0, -2.0), Vec3::new(0.0, -1.0, 0.0));
        let hit =
            intersect_ray_plane(&ray, Vec3::new(0.0, 4.0, 0.0), Vec3::Y).unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(3.0, 4.0, -2.0), 1e-5));
    }
}
