use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

use crate::camera::transform::Transform;
use crate::geometry::Ray;

/// Perspective camera defined by eye position, look-at target, and
/// projection parameters.
///
/// Derived state (view matrix, world-space pose) is cached and only
/// refreshed by [`update_matrices`](Self::update_matrices). The
/// navigation controller relies on this: it refreshes after every
/// mutation so that axis getters read back fresh orientation within the
/// same event, and the guard/drag math would silently go wrong on stale
/// matrices otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position, in node-local space when the owning node
    /// has a transform, otherwise in world space.
    pub eye: Vec3,
    /// Look-at target position, same space as `eye`.
    pub target: Vec3,
    /// Up hint used to build the view matrix. Stays fixed under rotation
    /// so the orbit pole guard can compare it against the view direction.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,

    // Cached world-space pose, refreshed by update_matrices.
    view: Mat4,
    view_inv: Mat4,
    world_eye: Vec3,
    world_target: Vec3,
    world_up: Vec3,
}

impl Camera {
    /// Create a camera looking from `eye` toward `target` with a world-Y
    /// up hint. Derived matrices are computed immediately.
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3, fovy: f32, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            eye,
            target,
            up: Vec3::Y,
            fovy,
            znear,
            zfar,
            view: Mat4::IDENTITY,
            view_inv: Mat4::IDENTITY,
            world_eye: eye,
            world_target: target,
            world_up: Vec3::Y,
        };
        camera.update_matrices(None);
        camera
    }

    /// Recompute the cached view matrices and world-space pose,
    /// composing the owning node's transform when present.
    ///
    /// Every getter below reads only the cache, so mutations are
    /// invisible until this is called.
    pub fn update_matrices(&mut self, parent: Option<&Transform>) {
        match parent {
            Some(t) => {
                self.world_eye = t.apply_point(self.eye);
                self.world_target = t.apply_point(self.target);
                self.world_up = t.apply_vector(self.up);
            }
            None => {
                self.world_eye = self.eye;
                self.world_target = self.target;
                self.world_up = self.up;
            }
        }
        self.view =
            Mat4::look_at_rh(self.world_eye, self.world_target, self.world_up);
        self.view_inv = self.view.inverse();
    }

    /// World-space view direction (eye toward target).
    #[must_use]
    pub fn front(&self) -> Vec3 {
        (self.world_target - self.world_eye).normalize()
    }

    /// World-space right axis derived from the cached view matrix.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.view_inv.transform_vector3(Vec3::X).normalize()
    }

    /// World-space up hint. Not orthonormalized against the view
    /// direction — near the poles its dot product with [`front`](Self::front)
    /// approaches ±1, which is exactly what the pole guard tests.
    #[must_use]
    pub fn up_axis(&self) -> Vec3 {
        self.world_up
    }

    /// World-space look-at center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.world_target
    }

    /// Rotate a camera-space vector into world space (camera-space -Z is
    /// the view direction). Length is preserved.
    #[must_use]
    pub fn local_vector(&self, v: Vec3) -> Vec3 {
        self.view_inv.transform_vector3(v)
    }

    /// World-space ray from the eye through a screen pixel.
    ///
    /// `pixel` uses a top-left origin; `viewport` is the canvas size in
    /// the same units. Passed explicitly so the conversion has no hidden
    /// global context. Returns `None` for a degenerate viewport or
    /// projection.
    #[must_use]
    pub fn ray_through_pixel(&self, pixel: Vec2, viewport: Vec2) -> Option<Ray> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let ndc_x = 2.0 * pixel.x / viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * pixel.y / viewport.y;
        let clip = Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            viewport.x / viewport.y,
            self.znear,
            self.zfar,
        );
        let world = (proj * self.view).inverse() * clip;
        if world.w.abs() < f32::EPSILON {
            return None;
        }
        let direction = world.truncate() / world.w - self.world_eye;
        Some(Ray::new(self.world_eye, direction))
    }

    /// Translate eye and target by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.eye += delta;
        self.target += delta;
    }

    /// Rotate the view direction in place by `angle` radians about
    /// `axis`. The eye stays put; the up hint is untouched.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        let q = Quat::from_axis_angle(axis.normalize(), angle);
        let dir = self.target - self.eye;
        self.target = self.eye + q * dir;
    }

    /// Rigidly rotate the camera about `pivot` by `angle` radians around
    /// `axis`. When the pivot is the look-at center the target is a fixed
    /// point and the camera orbits while facing it.
    pub fn orbit(&mut self, angle: f32, axis: Vec3, pivot: Vec3) {
        let q = Quat::from_axis_angle(axis.normalize(), angle);
        self.eye = pivot + q * (self.eye - pivot);
        self.target = pivot + q * (self.target - pivot);
    }

    /// Scale the eye's distance from `pivot` (or the look-at center when
    /// `None`) by `factor`. Used by wheel zoom.
    pub fn zoom_about(&mut self, factor: f32, pivot: Option<Vec3>) {
        let pivot = pivot.unwrap_or(self.target);
        self.eye = pivot + (self.eye - pivot) * factor;
    }
}
