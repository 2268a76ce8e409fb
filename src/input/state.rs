use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::InputDevice;

/// Tracks held keys and buttons, their press edges for the current frame,
/// the cursor position, and window close requests.
///
/// Feed events with [`handle_event`](Self::handle_event) as they arrive and
/// call [`end_frame`](Self::end_frame) after the frame has been sampled so
/// edges fire on exactly one frame.
#[derive(Debug, Clone, Default)]
pub struct DeviceState {
    held_keys: HashSet<String>,
    pressed_keys: HashSet<String>,
    held_buttons: HashSet<MouseButton>,
    pressed_buttons: HashSet<MouseButton>,
    cursor: Vec2,
    close_requested: bool,
}

impl DeviceState {
    /// Empty state: nothing held, cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one platform event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { key, pressed } => self.handle_key(key, *pressed),
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(*x, *y);
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_button(*button, *pressed);
            }
            InputEvent::CloseRequested => self.close_requested = true,
        }
    }

    fn handle_key(&mut self, key: &str, pressed: bool) {
        if pressed {
            // OS key repeat re-sends presses for a held key; only the first
            // one is an edge.
            if self.held_keys.insert(key.to_owned()) {
                let _ = self.pressed_keys.insert(key.to_owned());
            }
        } else {
            let _ = self.held_keys.remove(key);
        }
    }

    fn handle_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            if self.held_buttons.insert(button) {
                let _ = self.pressed_buttons.insert(button);
            }
        } else {
            let _ = self.held_buttons.remove(&button);
        }
    }

    /// Clear press edges. Held state, cursor and close requests persist.
    pub fn end_frame(&mut self) {
        self.pressed_keys.clear();
        self.pressed_buttons.clear();
    }

    /// Forget everything, e.g. after the window loses focus.
    pub fn release_all(&mut self) {
        self.held_keys.clear();
        self.pressed_keys.clear();
        self.held_buttons.clear();
        self.pressed_buttons.clear();
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether `button` is held.
    #[must_use]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.held_buttons.contains(&button)
    }

    /// Whether `button` went down this frame.
    #[must_use]
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }
}

impl InputDevice for DeviceState {
    fn key_down(&self, key: &str) -> bool {
        self.held_keys.contains(key)
    }

    fn key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }
}
