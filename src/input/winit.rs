//! Translation from winit window events into [`SceneEvent`]s.
//!
//! Only compiled with the `viewer` feature. The adapter owns the little
//! bit of state winit does not carry per-event: the last cursor
//! position (for per-move deltas), the held button (for the drag flag),
//! and the current modifier keys.

use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::event::{Modifiers, PointerButton, SceneEvent};

impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Auxiliary,
            _ => Self::Primary,
        }
    }
}

/// Stateful winit → [`SceneEvent`] translator.
#[derive(Debug, Default)]
pub struct WindowAdapter {
    last_pos: Vec2,
    held_button: Option<PointerButton>,
    modifiers: Modifiers,
}

impl WindowAdapter {
    /// Fresh adapter with no tracked pointer state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event. Returns `None` for events the
    /// navigation layer does not consume (including bookkeeping-only
    /// events like modifier changes).
    pub fn translate(&mut self, event: &WindowEvent) -> Option<SceneEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let pixel = Vec2::new(position.x as f32, position.y as f32);
                let delta = pixel - self.last_pos;
                self.last_pos = pixel;
                Some(SceneEvent::PointerMove {
                    pixel,
                    delta,
                    dragging: self.held_button.is_some(),
                    button: self.held_button.unwrap_or_default(),
                    modifiers: self.modifiers,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = PointerButton::from(*button);
                if *state == ElementState::Pressed {
                    self.held_button = Some(button);
                    Some(SceneEvent::PointerDown {
                        pixel: self.last_pos,
                        button,
                        modifiers: self.modifiers,
                    })
                } else {
                    if self.held_button == Some(button) {
                        self.held_button = None;
                    }
                    None
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(SceneEvent::Wheel { delta })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = Modifiers {
                    ctrl: modifiers.state().control_key(),
                    shift: modifiers.state().shift_key(),
                };
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(SceneEvent::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            _ => None,
        }
    }
}
