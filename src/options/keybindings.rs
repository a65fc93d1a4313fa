use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::navigation::NavCommand;

/// Key strings bound to navigation commands.
///
/// Keys use the host's key-code names (`"Equal"`, `"KeyW"`). Each key may
/// trigger at most one command; [`validate`](Self::validate) rejects tables
/// where two commands share a key, since the lookup would then depend on
/// map iteration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Command → key string.
    pub bindings: HashMap<NavCommand, String>,
    #[serde(skip)]
    commands_by_key: HashMap<String, NavCommand>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
            commands_by_key: HashMap::new(),
        };
        let _ = keys.bind(NavCommand::ZoomIn, "Equal");
        let _ = keys.bind(NavCommand::ZoomOut, "Minus");
        keys
    }
}

// Only the bindings count; the key index is derived from them.
impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeybindingOptions {}

impl KeybindingOptions {
    /// Bind `key` to `command`, replacing the command's previous key.
    /// Returns the command that `key` triggered before, if it was another
    /// one; that command is left unbound.
    pub fn bind(&mut self, command: NavCommand, key: &str) -> Option<NavCommand> {
        let displaced = self
            .commands_by_key
            .get(key)
            .copied()
            .filter(|&previous| previous != command);
        if let Some(previous) = displaced {
            let _ = self.bindings.remove(&previous);
        }
        let _ = self.bindings.insert(command, key.to_owned());
        self.rebuild_reverse_map();
        displaced
    }

    /// Remove the binding for `command`.
    pub fn unbind(&mut self, command: NavCommand) {
        if self.bindings.remove(&command).is_some() {
            self.rebuild_reverse_map();
        }
    }

    /// Rebuild the key index from `bindings`. Needed after editing
    /// `bindings` directly or deserializing.
    pub fn rebuild_reverse_map(&mut self) {
        self.commands_by_key = self
            .bindings
            .iter()
            .map(|(command, key)| (key.clone(), *command))
            .collect();
    }

    /// Reject empty key strings and keys bound to more than one command.
    pub fn validate(&self) -> Result<(), NavError> {
        let mut seen: HashMap<&str, NavCommand> = HashMap::new();
        for (command, key) in &self.bindings {
            if key.trim().is_empty() {
                return Err(NavError::InvalidOptions(format!(
                    "{command:?} is bound to an empty key"
                )));
            }
            if let Some(other) = seen.insert(key.as_str(), *command) {
                return Err(NavError::InvalidOptions(format!(
                    "key {key:?} is bound to both {other:?} and {command:?}"
                )));
            }
        }
        Ok(())
    }

    /// Command triggered by `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavCommand> {
        self.commands_by_key.get(key).copied()
    }
}
