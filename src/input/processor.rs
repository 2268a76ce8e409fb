//! Converts device state into frozen per-frame intents.
//!
//! The `InputSampler` owns the key-binding map. It is the only thing that
//! sits between device state and the session's
//! [`advance`](crate::session::Session::advance) entry point.

use super::keyboard::KeyAction;
use super::InputDevice;
use crate::options::KeybindingOptions;

/// Named boolean intents for one frame.
///
/// Both weapon intents may be set at once (the previous-weapon chord is a
/// superset of the next-weapon chord by default); the weapon selector
/// resolves that in favour of `prev_weapon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameIntents {
    /// Zoom-in chord held.
    pub zoom_in: bool,
    /// Zoom-out chord held.
    pub zoom_out: bool,
    /// Next-weapon chord went down this frame.
    pub next_weapon: bool,
    /// Previous-weapon chord went down this frame.
    pub prev_weapon: bool,
    /// Exit chord went down this frame, or the window asked to close.
    pub exit: bool,
}

/// Samples an [`InputDevice`] against the configured key chords.
///
/// # Usage
///
/// ```
/// use arsenal::input::{DeviceState, InputEvent, InputSampler};
///
/// let sampler = InputSampler::new();
/// let mut device = DeviceState::new();
/// device.handle_event(&InputEvent::key("ControlLeft", true));
/// device.handle_event(&InputEvent::key("Tab", true));
///
/// let intents = sampler.sample(&device);
/// assert!(intents.next_weapon);
/// device.end_frame();
/// assert!(!sampler.sample(&device).next_weapon);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    bindings: KeybindingOptions,
}

impl InputSampler {
    /// Sampler with the default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sampler with custom key bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeybindingOptions) -> Self {
        Self { bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Freeze the device state into this frame's intents.
    pub fn sample<D: InputDevice + ?Sized>(&self, device: &D) -> FrameIntents {
        FrameIntents {
            zoom_in: self.active(device, KeyAction::ZoomIn),
            zoom_out: self.active(device, KeyAction::ZoomOut),
            next_weapon: self.active(device, KeyAction::NextWeapon),
            prev_weapon: self.active(device, KeyAction::PreviousWeapon),
            exit: self.active(device, KeyAction::Exit)
                || device.close_requested(),
        }
    }

    fn active<D: InputDevice + ?Sized>(
        &self,
        device: &D,
        action: KeyAction,
    ) -> bool {
        self.bindings
            .chord(action)
            .is_some_and(|chord| chord.is_active(device, action.trigger()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DeviceState, InputEvent};

    fn hold(device: &mut DeviceState, keys: &[&str]) {
        for key in keys {
            device.handle_event(&InputEvent::key(*key, true));
        }
    }

    #[test]
    fn nothing_held_means_no_intents() {
        let sampler = InputSampler::new();
        assert_eq!(sampler.sample(&DeviceState::new()), FrameIntents::default());
    }

    #[test]
    fn zoom_requires_modifier_and_stays_while_held() {
        let sampler = InputSampler::new();
        let mut device = DeviceState::new();
        hold(&mut device, &["BracketRight"]);
        assert!(!sampler.sample(&device).zoom_in);

        hold(&mut device, &["ControlLeft"]);
        assert!(sampler.sample(&device).zoom_in);
        device.end_frame();
        assert!(sampler.sample(&device).zoom_in);
    }

    #[test]
    fn zoom_out_uses_slash() {
        let sampler = InputSampler::new();
        let mut device = DeviceState::new();
        hold(&mut device, &["ControlLeft", "Slash"]);
        let intents = sampler.sample(&device);
        assert!(intents.zoom_out);
        assert!(!intents.zoom_in);
    }

    #[test]
    fn previous_weapon_chord_also_satisfies_next() {
        let sampler = InputSampler::new();
        let mut device = DeviceState::new();
        hold(&mut device, &["ControlLeft", "ShiftLeft", "Tab"]);
        let intents = sampler.sample(&device);
        assert!(intents.prev_weapon);
        assert!(intents.next_weapon);
    }

    #[test]
    fn weapon_switch_is_edge_triggered() {
        let sampler = InputSampler::new();
        let mut device = DeviceState::new();
        hold(&mut device, &["ControlLeft", "Tab"]);
        assert!(sampler.sample(&device).next_weapon);
        device.end_frame();
        assert!(!sampler.sample(&device).next_weapon);
    }

    #[test]
    fn exit_from_chord_or_close_request() {
        let sampler = InputSampler::new();
        let mut device = DeviceState::new();
        hold(&mut device, &["ControlLeft", "KeyQ"]);
        assert!(sampler.sample(&device).exit);

        let mut device = DeviceState::new();
        device.handle_event(&InputEvent::CloseRequested);
        assert!(sampler.sample(&device).exit);
    }
}
