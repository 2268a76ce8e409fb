/// Platform-agnostic input events.
///
/// These are fed into a [`DeviceState`](super::DeviceState), which the
/// [`InputSampler`](super::InputSampler) reads once per frame.
///
/// # Example
///
/// ```
/// use arsenal::input::{DeviceState, InputEvent};
///
/// let mut device = DeviceState::new();
/// device.handle_event(&InputEvent::key("ControlLeft", true));
/// device.handle_event(&InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard key pressed or released.
    Key {
        /// Physical key in `KeyCode` debug format, e.g. `"Tab"`.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window asked to close.
    CloseRequested,
}

impl InputEvent {
    /// Shorthand for a [`InputEvent::Key`] event.
    #[must_use]
    pub fn key(key: impl Into<String>, pressed: bool) -> Self {
        Self::Key {
            key: key.into(),
            pressed,
        }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
