use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Navigation behavior selector. Fixed per configuration; never switched
/// while a drag is in progress.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum NavMode {
    /// Orbit around a pivot (the configured center or the camera's
    /// look-at center), with optional cursor-tracking panning.
    #[default]
    Orbit,
    /// Free-look in place with WASD-style continuous movement relative
    /// to the camera.
    FirstPerson,
    /// Drag the scene along the world ground plane, with a
    /// horizontal-only look on the secondary button.
    Plane,
}

impl NavMode {
    /// All modes, in UI presentation order. Consumed by tooling
    /// (editor dropdowns); the controller never iterates this.
    pub const ALL: [Self; 3] = [Self::Orbit, Self::FirstPerson, Self::Plane];

    /// Human-readable label for editor UI.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Orbit => "Orbit",
            Self::FirstPerson => "First Person",
            Self::Plane => "Plane",
        }
    }
}
