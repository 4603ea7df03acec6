use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::NavAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping movement actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<NavAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, NavAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (NavAction::MoveForward, "KeyW".into()),
            (NavAction::MoveBackward, "KeyS".into()),
            (NavAction::MoveLeft, "KeyA".into()),
            (NavAction::MoveRight, "KeyD".into()),
            (NavAction::FastModifier, "ShiftLeft".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavAction> {
        self.key_to_action.get(key).copied()
    }
}
