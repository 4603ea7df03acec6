use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::navigation::NavMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Navigation controller parameters.
pub struct NavigationOptions {
    /// Master switch; a disabled controller ignores all input.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Active navigation mode.
    #[schemars(title = "Mode")]
    pub mode: NavMode,
    /// Continuous movement speed in world units per frame tick.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Drag rotation speed in radians per pixel.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Wheel zoom sensitivity multiplier.
    #[schemars(title = "Wheel Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub wheel_speed: f32,
    /// Request a redraw every frame for externally applied damping.
    #[schemars(title = "Smooth")]
    pub smooth: bool,
    /// Allow the pan sub-behavior in Orbit mode.
    #[schemars(title = "Allow Panning")]
    pub allow_panning: bool,
    /// Fixed orbit pivot in world space; unset means the camera's
    /// look-at center.
    #[schemars(skip)]
    pub orbit_center: Option<[f32; 3]>,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: NavMode::Orbit,
            move_speed: 10.0,
            rotate_speed: 0.01,
            wheel_speed: 1.0,
            smooth: false,
            allow_panning: true,
            orbit_center: None,
        }
    }
}
