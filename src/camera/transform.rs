use glam::{Quat, Vec3};

/// Rigid pose of the scene node carrying a camera.
///
/// When a node has a transform, drag and orbit deltas are applied here
/// instead of to the camera itself; the camera then composes the parent
/// pose when refreshing its matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// World-space translation of the node.
    pub translation: Vec3,
    /// World-space orientation of the node.
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity pose at the world origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    /// Translate the node by a world-space delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Rotate the node in place by `angle` radians about `axis`.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        let q = Quat::from_axis_angle(axis.normalize(), angle);
        self.rotation = q * self.rotation;
    }

    /// Rigidly rotate the node about `pivot` by `angle` radians around
    /// `axis`. Both the position and the orientation rotate, so a camera
    /// carried by the node keeps facing the pivot.
    pub fn orbit(&mut self, angle: f32, axis: Vec3, pivot: Vec3) {
        let q = Quat::from_axis_angle(axis.normalize(), angle);
        self.translation = pivot + q * (self.translation - pivot);
        self.rotation = q * self.rotation;
    }

    /// Transform a point from node-local space into world space.
    #[must_use]
    pub fn apply_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    /// Rotate a direction from node-local space into world space.
    #[must_use]
    pub fn apply_vector(&self, v: Vec3) -> Vec3 {
        self.rotation * v
    }
}
