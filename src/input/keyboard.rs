use serde::{Deserialize, Serialize};

/// Navigation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// fast_modifier = "ShiftLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Move along the camera's forward axis.
    MoveForward,
    /// Move against the camera's forward axis.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Hold to multiply movement speed by 10.
    FastModifier,
}
