use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ArsenalError;
use crate::input::{KeyAction, KeyChord};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable key chords mapping actions to key strings.
pub struct KeybindingOptions {
    /// Maps action → chord string (e.g. `NextWeapon` → `"ControlLeft+Tab"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Parsed chord cache. Rebuilt on load.
    #[serde(skip)]
    chords: HashMap<KeyAction, KeyChord>,
}

fn default_chord(action: KeyAction) -> KeyChord {
    match action {
        KeyAction::ZoomIn => KeyChord::new(&["ControlLeft"], "BracketRight"),
        KeyAction::ZoomOut => KeyChord::new(&["ControlLeft"], "Slash"),
        KeyAction::NextWeapon => KeyChord::new(&["ControlLeft"], "Tab"),
        KeyAction::PreviousWeapon => {
            KeyChord::new(&["ControlLeft", "ShiftLeft"], "Tab")
        }
        KeyAction::Exit => KeyChord::new(&["ControlLeft"], "KeyQ"),
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let chords: HashMap<KeyAction, KeyChord> = KeyAction::ALL
            .iter()
            .map(|&action| (action, default_chord(action)))
            .collect();
        let bindings = chords
            .iter()
            .map(|(action, chord)| (*action, chord.to_string()))
            .collect();
        Self { bindings, chords }
    }
}

impl KeybindingOptions {
    /// Re-parse the chord strings. Actions missing from `bindings` fall
    /// back to their default chord.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::InvalidChord`] if any binding string does
    /// not parse; the previous cache is kept in that case.
    pub fn rebuild_chords(&mut self) -> Result<(), ArsenalError> {
        let mut chords = HashMap::with_capacity(KeyAction::ALL.len());
        for action in KeyAction::ALL {
            let chord = match self.bindings.get(&action) {
                Some(s) => s.parse()?,
                None => {
                    let chord = default_chord(action);
                    let _ = self.bindings.insert(action, chord.to_string());
                    chord
                }
            };
            let _ = chords.insert(action, chord);
        }
        self.chords = chords;
        Ok(())
    }

    /// Rebind `action` to `chord`.
    pub fn bind(&mut self, action: KeyAction, chord: KeyChord) {
        let _ = self.bindings.insert(action, chord.to_string());
        let _ = self.chords.insert(action, chord);
    }

    /// Parsed chord bound to `action`.
    #[must_use]
    pub fn chord(&self, action: KeyAction) -> Option<&KeyChord> {
        self.chords.get(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_updates_string_and_cache() {
        let mut opts = KeybindingOptions::default();
        opts.bind(KeyAction::Exit, KeyChord::new(&[], "Escape"));
        assert_eq!(opts.bindings[&KeyAction::Exit], "Escape");
        assert_eq!(
            opts.chord(KeyAction::Exit),
            Some(&KeyChord::new(&[], "Escape"))
        );
    }

    #[test]
    fn failed_rebuild_keeps_previous_cache() {
        let mut opts = KeybindingOptions::default();
        let _ = opts
            .bindings
            .insert(KeyAction::ZoomIn, "ControlLeft++".to_owned());
        assert!(opts.rebuild_chords().is_err());
        assert_eq!(
            opts.chord(KeyAction::ZoomIn),
            Some(&KeyChord::new(&["ControlLeft"], "BracketRight"))
        );
    }
}
