//! Scene-side collaborators: the node carrying the camera, the observer
//! registry, and the redraw-request flag.
//!
//! Event delivery is explicit rather than a global bus: an observer
//! registers the exact event kinds it handles, and detaching releases
//! exactly those bindings, so no dangling callbacks survive removal.

use glam::Vec2;

use crate::camera::{Camera, Transform};
use crate::input::event::{EventKind, SceneEvent};
use crate::navigation::NavigationController;

/// Identity of a registered event observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Scene node owning the camera and, optionally, the transform the
/// camera is parented to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneNode {
    /// The camera this node carries, if any. Handlers are no-ops
    /// without one.
    pub camera: Option<Camera>,
    /// Node pose. When present, translation/orbit deltas apply here and
    /// the camera is treated as relative to it.
    pub transform: Option<Transform>,
}

impl SceneNode {
    /// Node carrying a camera directly (no parent transform).
    #[must_use]
    pub fn with_camera(camera: Camera) -> Self {
        Self {
            camera: Some(camera),
            transform: None,
        }
    }

    /// Recompute the camera's derived matrices, composing the node
    /// transform when present. Must run after every camera or transform
    /// mutation before derived getters are read again.
    pub fn refresh_camera(&mut self) {
        if let Some(camera) = self.camera.as_mut() {
            camera.update_matrices(self.transform.as_ref());
        }
    }
}

/// Scene state the navigation controller interacts with: one node, the
/// viewport size for pixel→ray conversion, the redraw-request flag, and
/// the observer registry.
#[derive(Debug, Default)]
pub struct Scene {
    /// The node the controller is attached to.
    pub node: Option<SceneNode>,
    viewport: Vec2,
    redraw_requested: bool,
    bindings: Vec<(ObserverId, EventKind)>,
    next_observer: u64,
}

impl Scene {
    /// Empty scene with the given viewport size in physical pixels.
    #[must_use]
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Current viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Update the viewport size (window resize).
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Flag that a frame-visible mutation happened.
    pub fn request_refresh(&mut self) {
        self.redraw_requested = true;
    }

    /// Consume the redraw-request flag. The render loop calls this once
    /// per frame.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Allocate a fresh observer identity.
    pub fn register_observer(&mut self) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        id
    }

    /// Bind an observer to one event kind.
    pub fn bind(&mut self, observer: ObserverId, kind: EventKind) {
        if !self.is_bound(observer, kind) {
            self.bindings.push((observer, kind));
        }
    }

    /// Remove one (observer, kind) binding if present.
    pub fn unbind(&mut self, observer: ObserverId, kind: EventKind) {
        self.bindings.retain(|b| *b != (observer, kind));
    }

    /// Whether the observer is bound to the event kind.
    #[must_use]
    pub fn is_bound(&self, observer: ObserverId, kind: EventKind) -> bool {
        self.bindings.contains(&(observer, kind))
    }

    /// Number of live bindings across all observers.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Route an event to the controller if it is bound to the event's
    /// kind. Handlers run synchronously to completion.
    pub fn dispatch(
        &mut self,
        controller: &mut NavigationController,
        event: &SceneEvent,
    ) {
        let Some(observer) = controller.observer() else {
            return;
        };
        if !self.is_bound(observer, event.kind()) {
            return;
        }
        controller.handle_event(self, event);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn bindings_are_deduplicated() {
        let mut scene = Scene::new(Vec2::new(800.0, 600.0));
        let id = scene.register_observer();
        scene.bind(id, EventKind::Wheel);
        scene.bind(id, EventKind::Wheel);
        assert_eq!(scene.binding_count(), 1);
    }

    #[test]
    fn unbind_is_symmetric_and_exact() {
        let mut scene = Scene::new(Vec2::new(800.0, 600.0));
        let a = scene.register_observer();
        let b = scene.register_observer();
        scene.bind(a, EventKind::Wheel);
        scene.bind(a, EventKind::PointerMove);
        scene.bind(b, EventKind::Wheel);

        scene.unbind(a, EventKind::Wheel);
        assert!(!scene.is_bound(a, EventKind::Wheel));
        assert!(scene.is_bound(a, EventKind::PointerMove));
        assert!(scene.is_bound(b, EventKind::Wheel));
    }

    #[test]
    fn redraw_request_is_consumed_once() {
        let mut scene = Scene::new(Vec2::new(800.0, 600.0));
        assert!(!scene.take_redraw_request());
        scene.request_refresh();
        assert!(scene.take_redraw_request());
        assert!(!scene.take_redraw_request());
    }

    #[test]
    fn refresh_composes_node_transform() {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            45.0,
            0.1,
            1000.0,
        );
        let mut node = SceneNode::with_camera(camera);
        let mut transform = Transform::new();
        transform.translation = Vec3::new(5.0, 0.0, 0.0);
        node.transform = Some(transform);
        node.refresh_camera();

        let camera = node.camera.as_ref().unwrap();
        assert!(camera.center().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-5));
    }
}
