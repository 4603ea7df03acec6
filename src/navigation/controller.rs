//! The navigation controller: event handlers and per-mode drag logic.
//!
//! Discrete input events mutate the drag/intent state and, while a drag
//! is live, immediately apply a camera delta through the active mode
//! strategy. The per-frame tick applies continuous first-person
//! movement. Every frame-visible mutation requests a scene redraw.

use glam::{Vec2, Vec3};
use log::debug;

use crate::camera::Camera;
use crate::geometry::intersect_ray_plane;
use crate::input::event::{
    EventKind, Modifiers, PointerButton, SceneEvent,
};
use crate::input::state::{DragState, MoveIntent};
use crate::navigation::mode::NavMode;
use crate::options::{KeybindingOptions, NavigationOptions};
use crate::scene::{ObserverId, Scene, SceneNode};

/// Yaw deltas at or below this are treated as no rotation at all.
const YAW_DEAD_ZONE: f32 = 1e-4;
/// Pole guard threshold: once |dot(up, front)| exceeds this, pitch that
/// would push further toward the pole is skipped.
const POLE_LIMIT: f32 = 0.99;
/// Wheel zoom step per notch, before `wheel_speed` scaling.
const WHEEL_STEP: f32 = 0.05;

/// Camera-navigation controller for one scene node.
///
/// Created with defaults, configured once from a
/// [`NavigationOptions`] record, attached to a scene (which registers
/// its event bindings), and detached on removal. All handlers are
/// no-ops while `enabled` is false or the scene has no node with a
/// camera.
#[derive(Debug)]
pub struct NavigationController {
    /// Master switch; `false` suppresses every handler.
    pub enabled: bool,
    /// Active navigation behavior.
    pub mode: NavMode,
    /// Continuous movement speed, world units per frame tick.
    pub move_speed: f32,
    /// Drag rotation speed, radians per pixel.
    pub rotate_speed: f32,
    /// Wheel zoom sensitivity multiplier.
    pub wheel_speed: f32,
    /// Request a redraw every frame even without input, for continuous
    /// damping applied elsewhere.
    pub smooth: bool,
    /// Allow the pan sub-behavior in Orbit mode.
    pub allow_panning: bool,
    /// Fixed orbit pivot; `None` uses the camera's look-at center.
    pub orbit_center: Option<Vec3>,

    intent: MoveIntent,
    drag: DragState,
    bindings: KeybindingOptions,
    observer: Option<ObserverId>,
    subscriptions: Vec<EventKind>,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    /// The event streams the controller subscribes to on attach.
    const HANDLED_EVENTS: [EventKind; 6] = [
        EventKind::PointerDown,
        EventKind::PointerMove,
        EventKind::Wheel,
        EventKind::KeyDown,
        EventKind::KeyUp,
        EventKind::FrameUpdate,
    ];

    /// Controller with default configuration (orbit mode, panning
    /// allowed), not yet attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            mode: NavMode::Orbit,
            move_speed: 10.0,
            rotate_speed: 0.01,
            wheel_speed: 1.0,
            smooth: false,
            allow_panning: true,
            orbit_center: None,
            intent: MoveIntent::new(),
            drag: DragState::default(),
            bindings: KeybindingOptions::default(),
            observer: None,
            subscriptions: Vec::new(),
        }
    }

    /// Controller configured from an options record.
    #[must_use]
    pub fn from_options(options: &NavigationOptions) -> Self {
        let mut controller = Self::new();
        controller.configure(options);
        controller
    }

    /// Apply an options record. Speed values are taken as-is; the
    /// caller is responsible for sane ranges.
    pub fn configure(&mut self, options: &NavigationOptions) {
        self.enabled = options.enabled;
        self.mode = options.mode;
        self.move_speed = options.move_speed;
        self.rotate_speed = options.rotate_speed;
        self.wheel_speed = options.wheel_speed;
        self.smooth = options.smooth;
        self.allow_panning = options.allow_panning;
        self.orbit_center = options.orbit_center.map(Vec3::from);
    }

    /// Replace the key bindings (defaults are WASD + left shift).
    pub fn set_bindings(&mut self, bindings: KeybindingOptions) {
        self.bindings = bindings;
    }

    /// The observer identity while attached.
    #[must_use]
    pub fn observer(&self) -> Option<ObserverId> {
        self.observer
    }

    /// Current per-axis movement intent, components in {-1, 0, 1}.
    #[must_use]
    pub fn moving_axes(&self) -> Vec3 {
        self.intent.axes
    }

    /// Register the controller's event bindings on the scene. Does
    /// nothing if already attached.
    pub fn attach(&mut self, scene: &mut Scene) {
        if self.observer.is_some() {
            return;
        }
        let id = scene.register_observer();
        for kind in Self::HANDLED_EVENTS {
            scene.bind(id, kind);
            self.subscriptions.push(kind);
        }
        self.observer = Some(id);
        debug!(
            "navigation controller attached ({} bindings)",
            self.subscriptions.len()
        );
    }

    /// Release exactly the bindings registered on attach.
    pub fn detach(&mut self, scene: &mut Scene) {
        let Some(id) = self.observer.take() else {
            return;
        };
        for kind in self.subscriptions.drain(..) {
            scene.unbind(id, kind);
        }
        debug!("navigation controller detached");
    }

    /// Handle a dispatched scene event. Runs synchronously to
    /// completion; never fails.
    pub fn handle_event(&mut self, scene: &mut Scene, event: &SceneEvent) {
        if !self.enabled {
            return;
        }
        match event {
            SceneEvent::PointerDown { pixel, button, .. } => {
                self.on_pointer_down(scene, *pixel, *button);
            }
            SceneEvent::PointerMove {
                pixel,
                delta,
                dragging,
                button,
                modifiers,
            } => {
                if *dragging {
                    self.on_drag_move(scene, *pixel, *delta, *button, *modifiers);
                }
            }
            SceneEvent::Wheel { delta } => self.on_wheel(scene, *delta),
            SceneEvent::Key { key, pressed } => {
                self.on_key(scene, key, *pressed);
            }
            SceneEvent::FrameUpdate => self.on_frame_update(scene),
        }
    }

    /// Capture the drag anchor for the active mode and remember which
    /// button started the drag.
    fn on_pointer_down(
        &mut self,
        scene: &Scene,
        pixel: Vec2,
        button: PointerButton,
    ) {
        let viewport = scene.viewport();
        let Some(node) = scene.node.as_ref() else {
            return;
        };
        let Some(camera) = node.camera.as_ref() else {
            return;
        };
        let anchor = match self.mode {
            NavMode::Plane => ground_plane_hit(camera, pixel, viewport),
            NavMode::Orbit | NavMode::FirstPerson => {
                let pivot =
                    self.orbit_center.unwrap_or_else(|| camera.center());
                view_plane_hit(camera, pixel, viewport, pivot)
            }
        };
        self.drag = DragState { anchor, button };
    }

    /// Drag in progress: route to the active mode strategy and request
    /// a redraw if anything was applied.
    fn on_drag_move(
        &mut self,
        scene: &mut Scene,
        pixel: Vec2,
        delta: Vec2,
        button: PointerButton,
        modifiers: Modifiers,
    ) {
        let viewport = scene.viewport();
        let Some(node) = scene.node.as_mut() else {
            return;
        };
        if node.camera.is_none() {
            return;
        }
        let changed = match self.mode {
            NavMode::Orbit => {
                self.orbit_drag(node, pixel, delta, viewport, button, modifiers)
            }
            NavMode::FirstPerson => self.first_person_drag(node, delta),
            NavMode::Plane => self.plane_drag(node, pixel, delta, viewport),
        };
        if changed {
            scene.request_refresh();
        }
    }

    /// Orbit mode: pan on the pivot plane when the gesture asks for it,
    /// otherwise yaw around world up and pitch around the camera's
    /// right axis, both about the pivot, with the pole guard on pitch.
    fn orbit_drag(
        &mut self,
        node: &mut SceneNode,
        pixel: Vec2,
        delta: Vec2,
        viewport: Vec2,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> bool {
        let is_pan_gesture =
            modifiers.ctrl || button == PointerButton::Secondary;
        if self.allow_panning && is_pan_gesture {
            let Some(anchor) = self.drag.anchor else {
                return false;
            };
            let hit = node.camera.as_ref().and_then(|camera| {
                let pivot =
                    self.orbit_center.unwrap_or_else(|| camera.center());
                view_plane_hit(camera, pixel, viewport, pivot)
            });
            let Some(hit) = hit else {
                return false;
            };
            // Translating by the anchor delta keeps the grabbed point
            // under the cursor 1:1 on the pivot plane.
            apply_translation(node, anchor - hit);
            return true;
        }

        let pivot = {
            let Some(camera) = node.camera.as_ref() else {
                return false;
            };
            self.orbit_center.unwrap_or_else(|| camera.center())
        };
        let mut changed = false;

        let yaw = delta.x * self.rotate_speed;
        if yaw.abs() > YAW_DEAD_ZONE {
            apply_orbit(node, -yaw, Vec3::Y, pivot);
            changed = true;
        }

        // Axes must be re-read after the yaw orbit so the pitch uses the
        // fresh right axis.
        let pitch = -delta.y * self.rotate_speed;
        let (blocked, right) = {
            let Some(camera) = node.camera.as_ref() else {
                return changed;
            };
            let problem_angle = camera.up_axis().dot(camera.front());
            let blocked = (problem_angle > POLE_LIMIT && pitch > 0.0)
                || (problem_angle < -POLE_LIMIT && pitch < 0.0);
            (blocked, camera.right())
        };
        if !blocked {
            apply_orbit(node, -pitch, right, pivot);
            changed = true;
        }
        changed
    }

    /// First-person mode: free-look in place, no pivot and no pole
    /// guard. Pitch goes to the node transform when the camera is
    /// parented, otherwise to the camera itself.
    fn first_person_drag(&mut self, node: &mut SceneNode, delta: Vec2) -> bool {
        {
            let Some(camera) = node.camera.as_mut() else {
                return false;
            };
            camera.rotate(-delta.x * self.rotate_speed, Vec3::Y);
        }
        node.refresh_camera();

        let right = {
            let Some(camera) = node.camera.as_ref() else {
                return false;
            };
            camera.local_vector(Vec3::X)
        };
        let pitch = -delta.y * self.rotate_speed;
        if let Some(transform) = node.transform.as_mut() {
            transform.rotate(pitch, right);
        } else if let Some(camera) = node.camera.as_mut() {
            camera.rotate(pitch, right);
        }
        node.refresh_camera();
        true
    }

    /// Plane mode: the secondary button gives a horizontal-only look
    /// around the look-at center; any other button drags the scene so
    /// the grabbed ground point stays under the cursor.
    fn plane_drag(
        &mut self,
        node: &mut SceneNode,
        pixel: Vec2,
        delta: Vec2,
        viewport: Vec2,
    ) -> bool {
        if self.drag.button == PointerButton::Secondary {
            let center = {
                let Some(camera) = node.camera.as_ref() else {
                    return false;
                };
                camera.center()
            };
            apply_orbit(node, -delta.x * self.rotate_speed, Vec3::Y, center);
            return true;
        }

        let Some(anchor) = self.drag.anchor else {
            return false;
        };
        let hit = node
            .camera
            .as_ref()
            .and_then(|camera| ground_plane_hit(camera, pixel, viewport));
        let Some(hit) = hit else {
            return false;
        };
        apply_translation(node, anchor - hit);
        true
    }

    /// Wheel zoom: scale the distance from the pivot by
    /// `1 + sign * -0.05 * wheel_speed`. Mode-independent.
    fn on_wheel(&mut self, scene: &mut Scene, delta: f32) {
        let orbit_center = self.orbit_center;
        let factor = {
            let direction = if delta > 0.0 { 1.0 } else { -1.0 };
            1.0 + direction * -WHEEL_STEP * self.wheel_speed
        };
        {
            let Some(node) = scene.node.as_mut() else {
                return;
            };
            let Some(camera) = node.camera.as_mut() else {
                return;
            };
            camera.zoom_about(factor, orbit_center);
            node.refresh_camera();
        }
        scene.request_refresh();
    }

    /// Map a bound key change onto the movement intent.
    fn on_key(&mut self, scene: &Scene, key: &str, pressed: bool) {
        if scene
            .node
            .as_ref()
            .and_then(|node| node.camera.as_ref())
            .is_none()
        {
            return;
        }
        if let Some(action) = self.bindings.lookup(key) {
            self.intent.apply(action, pressed);
        }
    }

    /// Per-frame tick: continuous first-person movement scaled by the
    /// fast modifier, plus the unconditional smooth redraw.
    fn on_frame_update(&mut self, scene: &mut Scene) {
        if scene
            .node
            .as_ref()
            .and_then(|node| node.camera.as_ref())
            .is_none()
        {
            return;
        }
        let mut changed = false;
        if self.mode == NavMode::FirstPerson && self.intent.is_moving() {
            if let Some(node) = scene.node.as_mut() {
                let delta = node.camera.as_ref().map(|camera| {
                    camera.local_vector(self.intent.axes)
                        * self.move_speed
                        * self.intent.speed_multiplier()
                });
                if let Some(delta) = delta {
                    apply_translation(node, delta);
                    changed = true;
                }
            }
        }
        if changed || self.smooth {
            scene.request_refresh();
        }
    }
}

/// Translate the node transform when present, else the camera, then
/// refresh derived matrices.
fn apply_translation(node: &mut SceneNode, delta: Vec3) {
    if let Some(transform) = node.transform.as_mut() {
        transform.translate(delta);
    } else if let Some(camera) = node.camera.as_mut() {
        camera.translate(delta);
    }
    node.refresh_camera();
}

/// Orbit the node transform when present, else the camera, then refresh
/// derived matrices.
fn apply_orbit(node: &mut SceneNode, angle: f32, axis: Vec3, pivot: Vec3) {
    if let Some(transform) = node.transform.as_mut() {
        transform.orbit(angle, axis, pivot);
    } else if let Some(camera) = node.camera.as_mut() {
        camera.orbit(angle, axis, pivot);
    }
    node.refresh_camera();
}

/// Intersection of the pixel ray with the world ground plane (origin,
/// world up).
fn ground_plane_hit(
    camera: &Camera,
    pixel: Vec2,
    viewport: Vec2,
) -> Option<Vec3> {
    let ray = camera.ray_through_pixel(pixel, viewport)?;
    intersect_ray_plane(&ray, Vec3::ZERO, Vec3::Y)
}

/// Intersection of the pixel ray with the plane through `center`
/// perpendicular to the camera's forward axis.
fn view_plane_hit(
    camera: &Camera,
    pixel: Vec2,
    viewport: Vec2,
    center: Vec3,
) -> Option<Vec3> {
    let ray = camera.ray_through_pixel(pixel, viewport)?;
    intersect_ray_plane(&ray, center, camera.front())
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);
    const CENTER_PIXEL: Vec2 = Vec2::new(400.0, 300.0);

    fn scene_with_camera(eye: Vec3, target: Vec3) -> Scene {
        let mut scene = Scene::new(VIEWPORT);
        scene.node = Some(SceneNode::with_camera(Camera::new(
            eye, target, 45.0, 0.1, 1000.0,
        )));
        scene
    }

    fn attached(scene: &mut Scene, mode: NavMode) -> NavigationController {
        let mut controller = NavigationController::new();
        controller.mode = mode;
        controller.attach(scene);
        controller
    }

    fn camera(scene: &Scene) -> &Camera {
        scene.node.as_ref().unwrap().camera.as_ref().unwrap()
    }

    fn eye(scene: &Scene) -> Vec3 {
        camera(scene).eye
    }

    fn pointer_down(pixel: Vec2, button: PointerButton) -> SceneEvent {
        SceneEvent::PointerDown {
            pixel,
            button,
            modifiers: Modifiers::default(),
        }
    }

    fn drag_move(pixel: Vec2, delta: Vec2) -> SceneEvent {
        SceneEvent::PointerMove {
            pixel,
            delta,
            dragging: true,
            button: PointerButton::Primary,
            modifiers: Modifiers::default(),
        }
    }

    fn key(key: &str, pressed: bool) -> SceneEvent {
        SceneEvent::Key {
            key: key.into(),
            pressed,
        }
    }

    /// Camera whose front axis makes dot(up, front) = 0.995, just past
    /// the pole guard threshold.
    fn near_pole_scene() -> Scene {
        let front = Vec3::new(0.0, 0.995, (1.0f32 - 0.995 * 0.995).sqrt());
        scene_with_camera(-front * 10.0, Vec3::ZERO)
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        let before = camera(&scene).clone();

        scene.dispatch(
            &mut controller,
            &SceneEvent::PointerMove {
                pixel: CENTER_PIXEL,
                delta: Vec2::new(25.0, -10.0),
                dragging: false,
                button: PointerButton::Primary,
                modifiers: Modifiers::default(),
            },
        );

        assert_eq!(*camera(&scene), before);
        assert!(!scene.take_redraw_request());
    }

    #[test]
    fn wheel_zooms_by_five_percent() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);

        scene.dispatch(&mut controller, &SceneEvent::Wheel { delta: 1.0 });
        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 9.5), 1e-5));
        assert!(scene.take_redraw_request());

        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        scene.dispatch(&mut controller, &SceneEvent::Wheel { delta: -1.0 });
        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 10.5), 1e-5));
    }

    #[test]
    fn wheel_zooms_about_fixed_orbit_center() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        controller.orbit_center = Some(Vec3::new(0.0, 0.0, 5.0));

        scene.dispatch(&mut controller, &SceneEvent::Wheel { delta: 1.0 });
        // 5 + (10 - 5) * 0.95
        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 9.75), 1e-5));
    }

    #[test]
    fn orbit_yaw_rotates_about_world_up() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        controller.rotate_speed = 0.01;

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(&mut controller, &drag_move(CENTER_PIXEL, Vec2::new(10.0, 0.0)));

        let expected =
            Quat::from_axis_angle(Vec3::Y, -0.1) * Vec3::new(0.0, 0.0, 10.0);
        assert!(eye(&scene).abs_diff_eq(expected, 1e-4));
        assert!(scene.take_redraw_request());
    }

    #[test]
    fn orbit_pitch_blocked_near_pole() {
        let mut scene = near_pole_scene();
        let mut controller = attached(&mut scene, NavMode::Orbit);
        let before = eye(&scene);

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        // Dragging up: pitch > 0 would push past the pole.
        scene.dispatch(&mut controller, &drag_move(CENTER_PIXEL, Vec2::new(0.0, -5.0)));

        assert!(eye(&scene).abs_diff_eq(before, 1e-6));
    }

    #[test]
    fn orbit_pitch_away_from_pole_is_allowed() {
        let mut scene = near_pole_scene();
        let mut controller = attached(&mut scene, NavMode::Orbit);
        let before = eye(&scene);

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(&mut controller, &drag_move(CENTER_PIXEL, Vec2::new(0.0, 5.0)));

        assert!(!eye(&scene).abs_diff_eq(before, 1e-6));
    }

    #[test]
    fn orbit_yaw_unaffected_by_pole_guard() {
        let mut scene = near_pole_scene();
        let mut controller = attached(&mut scene, NavMode::Orbit);
        let before = eye(&scene);

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(&mut controller, &drag_move(CENTER_PIXEL, Vec2::new(5.0, 0.0)));

        assert!(!eye(&scene).abs_diff_eq(before, 1e-6));
        // Still orbiting, not translating.
        assert!((eye(&scene).length() - before.length()).abs() < 1e-4);
    }

    #[test]
    fn orbit_pan_translates_by_anchor_delta() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        let start = camera(&scene).clone();

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );

        // Expected delta computed from the pre-drag camera state.
        let anchor =
            view_plane_hit(&start, CENTER_PIXEL, VIEWPORT, start.center())
                .unwrap();
        let moved_pixel = Vec2::new(450.0, 300.0);
        let hit = view_plane_hit(&start, moved_pixel, VIEWPORT, start.center())
            .unwrap();

        scene.dispatch(
            &mut controller,
            &SceneEvent::PointerMove {
                pixel: moved_pixel,
                delta: moved_pixel - CENTER_PIXEL,
                dragging: true,
                button: PointerButton::Primary,
                modifiers: Modifiers {
                    ctrl: true,
                    shift: false,
                },
            },
        );

        let expected = Vec3::new(0.0, 0.0, 10.0) + (anchor - hit);
        assert!(eye(&scene).abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn orbit_pan_with_no_pointer_movement_applies_zero_delta() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(
            &mut controller,
            &SceneEvent::PointerMove {
                pixel: CENTER_PIXEL,
                delta: Vec2::ZERO,
                dragging: true,
                button: PointerButton::Primary,
                modifiers: Modifiers {
                    ctrl: true,
                    shift: false,
                },
            },
        );

        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-5));
    }

    #[test]
    fn pan_gesture_orbits_when_panning_disallowed() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        controller.allow_panning = false;

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(
            &mut controller,
            &SceneEvent::PointerMove {
                pixel: Vec2::new(450.0, 300.0),
                delta: Vec2::new(50.0, 0.0),
                dragging: true,
                button: PointerButton::Primary,
                modifiers: Modifiers {
                    ctrl: true,
                    shift: false,
                },
            },
        );

        // Orbiting preserves the distance to the pivot; panning would not.
        assert!((eye(&scene).length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn plane_drag_translates_by_ground_delta() {
        let mut scene =
            scene_with_camera(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Plane);
        let start = camera(&scene).clone();

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );

        let anchor = ground_plane_hit(&start, CENTER_PIXEL, VIEWPORT).unwrap();
        let moved_pixel = Vec2::new(400.0, 350.0);
        let hit = ground_plane_hit(&start, moved_pixel, VIEWPORT).unwrap();

        scene.dispatch(
            &mut controller,
            &drag_move(moved_pixel, moved_pixel - CENTER_PIXEL),
        );

        let expected = Vec3::new(0.0, 10.0, 10.0) + (anchor - hit);
        assert!(eye(&scene).abs_diff_eq(expected, 1e-4));
        assert!(scene.take_redraw_request());
    }

    #[test]
    fn plane_drag_zero_movement_applies_zero_delta() {
        let mut scene =
            scene_with_camera(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Plane);

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(&mut controller, &drag_move(CENTER_PIXEL, Vec2::ZERO));

        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 10.0, 10.0), 1e-4));
    }

    #[test]
    fn plane_secondary_button_is_horizontal_look() {
        let mut scene =
            scene_with_camera(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Plane);
        let before = eye(&scene);

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Secondary),
        );
        scene.dispatch(
            &mut controller,
            &SceneEvent::PointerMove {
                pixel: Vec2::new(420.0, 300.0),
                delta: Vec2::new(20.0, 0.0),
                dragging: true,
                button: PointerButton::Secondary,
                modifiers: Modifiers::default(),
            },
        );

        let after = eye(&scene);
        assert!(!after.abs_diff_eq(before, 1e-6));
        // Height and distance to the center are preserved.
        assert!((after.y - before.y).abs() < 1e-4);
        assert!((after.length() - before.length()).abs() < 1e-3);
    }

    #[test]
    fn plane_drag_skipped_when_anchor_missed() {
        // Camera looking straight along the ground plane: the drag-start
        // ray through the horizon never hits it.
        let mut scene = scene_with_camera(
            Vec3::new(0.0, 5.0, 10.0),
            Vec3::new(0.0, 5.0, 0.0),
        );
        let mut controller = attached(&mut scene, NavMode::Plane);
        let before = eye(&scene);

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(
            &mut controller,
            &drag_move(Vec2::new(420.0, 300.0), Vec2::new(20.0, 0.0)),
        );

        assert!(eye(&scene).abs_diff_eq(before, 1e-6));
        assert!(!scene.take_redraw_request());
    }

    #[test]
    fn first_person_drag_rotates_in_place() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::FirstPerson);
        controller.rotate_speed = 0.01;

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(&mut controller, &drag_move(CENTER_PIXEL, Vec2::new(10.0, 0.0)));

        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-5));
        let expected_front = Quat::from_axis_angle(Vec3::Y, -0.1) * Vec3::NEG_Z;
        assert!(camera(&scene).front().abs_diff_eq(expected_front, 1e-4));
    }

    #[test]
    fn first_person_vertical_drag_pitches_view() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::FirstPerson);
        controller.rotate_speed = 0.01;

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(&mut controller, &drag_move(CENTER_PIXEL, Vec2::new(0.0, 10.0)));

        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-5));
        // Dragging down pitches the view downward.
        assert!(camera(&scene).front().y < -1e-3);
    }

    #[test]
    fn first_person_frame_step_has_exact_magnitude() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::FirstPerson);
        controller.move_speed = 10.0;

        scene.dispatch(&mut controller, &key("KeyW", true));
        scene.dispatch(&mut controller, &SceneEvent::FrameUpdate);

        // One step of exactly move_speed along the local forward axis.
        assert!(eye(&scene).abs_diff_eq(Vec3::ZERO, 1e-4));
        assert!(scene.take_redraw_request());
    }

    #[test]
    fn fast_modifier_multiplies_frame_step() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::FirstPerson);
        controller.move_speed = 1.0;

        scene.dispatch(&mut controller, &key("ShiftLeft", true));
        scene.dispatch(&mut controller, &key("KeyW", true));
        scene.dispatch(&mut controller, &SceneEvent::FrameUpdate);

        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn frame_update_is_inert_outside_first_person() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);

        scene.dispatch(&mut controller, &key("KeyW", true));
        scene.dispatch(&mut controller, &SceneEvent::FrameUpdate);

        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-6));
        assert!(!scene.take_redraw_request());
    }

    #[test]
    fn key_up_clears_axis_even_with_opposite_key_held() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::FirstPerson);

        scene.dispatch(&mut controller, &key("KeyW", true));
        scene.dispatch(&mut controller, &key("KeyS", true));
        assert_eq!(controller.moving_axes().z, 1.0);
        // Releasing the stale key still clears the axis.
        scene.dispatch(&mut controller, &key("KeyW", false));
        assert_eq!(controller.moving_axes().z, 0.0);

        scene.dispatch(&mut controller, &SceneEvent::FrameUpdate);
        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-6));
    }

    #[test]
    fn smooth_requests_redraw_every_frame() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        controller.smooth = true;

        scene.dispatch(&mut controller, &SceneEvent::FrameUpdate);
        assert!(scene.take_redraw_request());
        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-6));
    }

    #[test]
    fn smooth_redraw_still_requires_a_camera() {
        let mut scene = Scene::new(VIEWPORT);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        controller.smooth = true;

        scene.dispatch(&mut controller, &SceneEvent::FrameUpdate);
        assert!(!scene.take_redraw_request());

        scene.node = Some(SceneNode::default());
        scene.dispatch(&mut controller, &SceneEvent::FrameUpdate);
        assert!(!scene.take_redraw_request());
    }

    #[test]
    fn disabling_mid_drag_suppresses_all_further_events() {
        let mut scene =
            scene_with_camera(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Plane);

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        controller.enabled = false;
        let frozen = camera(&scene).clone();

        scene.dispatch(
            &mut controller,
            &drag_move(Vec2::new(500.0, 400.0), Vec2::new(100.0, 100.0)),
        );
        scene.dispatch(&mut controller, &SceneEvent::Wheel { delta: 1.0 });
        scene.dispatch(&mut controller, &SceneEvent::FrameUpdate);

        assert_eq!(*camera(&scene), frozen);
        assert!(!scene.take_redraw_request());
    }

    #[test]
    fn detach_releases_exactly_the_registered_bindings() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        assert_eq!(scene.binding_count(), 6);

        controller.detach(&mut scene);
        assert_eq!(scene.binding_count(), 0);
        assert!(controller.observer().is_none());

        scene.dispatch(&mut controller, &SceneEvent::Wheel { delta: 1.0 });
        assert!(eye(&scene).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-6));
    }

    #[test]
    fn attach_is_idempotent() {
        let mut scene = scene_with_camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut controller = attached(&mut scene, NavMode::Orbit);
        controller.attach(&mut scene);
        assert_eq!(scene.binding_count(), 6);
    }

    #[test]
    fn events_without_a_camera_are_no_ops() {
        let mut scene = Scene::new(VIEWPORT);
        let mut controller = attached(&mut scene, NavMode::Orbit);

        scene.dispatch(&mut controller, &SceneEvent::Wheel { delta: 1.0 });
        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        scene.dispatch(&mut controller, &key("KeyW", true));
        scene.dispatch(&mut controller, &SceneEvent::FrameUpdate);

        assert_eq!(controller.moving_axes(), Vec3::ZERO);
        assert!(!scene.take_redraw_request());
    }

    #[test]
    fn noded_camera_routes_deltas_through_transform() {
        let mut scene =
            scene_with_camera(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
        if let Some(node) = scene.node.as_mut() {
            node.transform = Some(crate::camera::Transform::new());
            node.refresh_camera();
        }
        let mut controller = attached(&mut scene, NavMode::Plane);
        let start = camera(&scene).clone();

        scene.dispatch(
            &mut controller,
            &pointer_down(CENTER_PIXEL, PointerButton::Primary),
        );
        let anchor = ground_plane_hit(&start, CENTER_PIXEL, VIEWPORT).unwrap();
        let moved_pixel = Vec2::new(400.0, 350.0);
        let hit = ground_plane_hit(&start, moved_pixel, VIEWPORT).unwrap();
        scene.dispatch(
            &mut controller,
            &drag_move(moved_pixel, moved_pixel - CENTER_PIXEL),
        );

        let node = scene.node.as_ref().unwrap();
        let translation = node.transform.as_ref().unwrap().translation;
        assert!(translation.abs_diff_eq(anchor - hit, 1e-4));
        // The camera's own pose is untouched; the node carries it.
        assert_eq!(node.camera.as_ref().unwrap().eye, Vec3::new(0.0, 10.0, 10.0));
    }
}
