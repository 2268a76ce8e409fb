use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InputDevice;
use crate::error::ArsenalError;

/// Viewer actions that can be bound to key chords.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// next_weapon = "ControlLeft+Tab"
/// exit = "ControlLeft+KeyQ"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Narrow the field of view while held.
    ZoomIn,
    /// Widen the field of view while held.
    ZoomOut,
    /// Select the next weapon slot.
    NextWeapon,
    /// Select the previous weapon slot.
    PreviousWeapon,
    /// Release resources and leave the viewer.
    Exit,
}

impl KeyAction {
    /// Every bindable action.
    pub const ALL: [Self; 5] = [
        Self::ZoomIn,
        Self::ZoomOut,
        Self::NextWeapon,
        Self::PreviousWeapon,
        Self::Exit,
    ];

    /// How the action's trigger key is evaluated.
    #[must_use]
    pub const fn trigger(self) -> Trigger {
        match self {
            Self::ZoomIn | Self::ZoomOut => Trigger::Held,
            Self::NextWeapon | Self::PreviousWeapon | Self::Exit => {
                Trigger::Pressed
            }
        }
    }
}

/// Whether a chord fires while its trigger key is held or only on the frame
/// the trigger goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// True on every frame the trigger key is down.
    Held,
    /// True only on the frame the trigger key went down.
    Pressed,
}

/// A trigger key plus the modifier keys that must be held with it.
///
/// Written as `+`-joined key names; the last name is the trigger:
/// `"ControlLeft+ShiftLeft+Tab"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    modifiers: Vec<String>,
    key: String,
}

impl KeyChord {
    /// Chord from modifier names and a trigger key.
    #[must_use]
    pub fn new(modifiers: &[&str], key: &str) -> Self {
        Self {
            modifiers: modifiers.iter().map(|&m| m.to_owned()).collect(),
            key: key.to_owned(),
        }
    }

    /// Trigger key name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Modifier key names, in binding order.
    #[must_use]
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    fn modifiers_held<D: InputDevice + ?Sized>(&self, device: &D) -> bool {
        self.modifiers.iter().all(|m| device.key_down(m))
    }

    /// All modifiers and the trigger key are held.
    pub fn held<D: InputDevice + ?Sized>(&self, device: &D) -> bool {
        self.modifiers_held(device) && device.key_down(&self.key)
    }

    /// All modifiers are held and the trigger key went down this frame.
    pub fn pressed<D: InputDevice + ?Sized>(&self, device: &D) -> bool {
        self.modifiers_held(device) && device.key_pressed(&self.key)
    }

    /// Evaluate the chord with the given trigger policy.
    pub fn is_active<D: InputDevice + ?Sized>(
        &self,
        device: &D,
        trigger: Trigger,
    ) -> bool {
        match trigger {
            Trigger::Held => self.held(device),
            Trigger::Pressed => self.pressed(device),
        }
    }
}

impl FromStr for KeyChord {
    type Err = ArsenalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<String> =
            s.split('+').map(|p| p.trim().to_owned()).collect();
        if parts.iter().any(String::is_empty) {
            return Err(ArsenalError::InvalidChord(s.to_owned()));
        }
        let key = parts
            .pop()
            .ok_or_else(|| ArsenalError::InvalidChord(s.to_owned()))?;
        Ok(Self {
            modifiers: parts,
            key,
        })
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{m}+")?;
        }
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DeviceState, InputEvent};

    #[test]
    fn parse_splits_modifiers_and_trigger() {
        let chord: KeyChord = "ControlLeft+ShiftLeft+Tab".parse().unwrap();
        assert_eq!(chord.key(), "Tab");
        assert_eq!(chord.modifiers(), ["ControlLeft", "ShiftLeft"]);
        assert_eq!(chord.to_string(), "ControlLeft+ShiftLeft+Tab");
    }

    #[test]
    fn parse_accepts_bare_key() {
        let chord: KeyChord = "Escape".parse().unwrap();
        assert_eq!(chord.key(), "Escape");
        assert!(chord.modifiers().is_empty());
    }

    #[test]
    fn parse_rejects_empty_parts() {
        assert!("".parse::<KeyChord>().is_err());
        assert!("ControlLeft+".parse::<KeyChord>().is_err());
        assert!("+Tab".parse::<KeyChord>().is_err());
    }

    #[test]
    fn pressed_requires_modifiers_held() {
        let chord = KeyChord::new(&["ControlLeft"], "Tab");
        let mut device = DeviceState::new();
        device.handle_event(&InputEvent::key("Tab", true));
        assert!(!chord.pressed(&device));

        device.end_frame();
        device.handle_event(&InputEvent::key("Tab", false));
        device.handle_event(&InputEvent::key("ControlLeft", true));
        device.handle_event(&InputEvent::key("Tab", true));
        assert!(chord.pressed(&device));
        assert!(chord.held(&device));
    }

    #[test]
    fn zoom_actions_are_held_and_switches_are_edges() {
        assert_eq!(KeyAction::ZoomIn.trigger(), Trigger::Held);
        assert_eq!(KeyAction::ZoomOut.trigger(), Trigger::Held);
        assert_eq!(KeyAction::NextWeapon.trigger(), Trigger::Pressed);
        assert_eq!(KeyAction::PreviousWeapon.trigger(), Trigger::Pressed);
        assert_eq!(KeyAction::Exit.trigger(), Trigger::Pressed);
    }
}
