//! Input handling: platform-agnostic events, device state with edge
//! tracking, key chords, and the sampler that freezes per-frame intents.

/// Platform-agnostic input events.
pub mod event;
/// Key actions and `+`-joined key chords.
pub mod keyboard;
/// Converts device state into frozen per-frame intents.
pub mod processor;
/// Held/pressed-this-frame tracking for keys and mouse buttons.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use keyboard::{KeyAction, KeyChord, Trigger};
pub use processor::{FrameIntents, InputSampler};
pub use state::DeviceState;

/// Read-only view of input device state for the current frame.
///
/// Keys are named in the `winit::keyboard::KeyCode` debug format
/// (`"ControlLeft"`, `"Tab"`, `"KeyQ"`, ...).
pub trait InputDevice {
    /// Whether `key` is currently held.
    fn key_down(&self, key: &str) -> bool;
    /// Whether `key` went down during the current frame.
    fn key_pressed(&self, key: &str) -> bool;
    /// Whether the window asked to close.
    fn close_requested(&self) -> bool;
}
