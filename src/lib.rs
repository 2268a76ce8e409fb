// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive weapon viewer core: smoothed camera zoom and a bounded
//! weapon-slot selector, driven once per frame.
//!
//! Rendering, model decoding and text drawing stay outside the crate. The
//! core consumes device input through [`input::InputDevice`], loads assets
//! through [`assets::AssetBackend`] and hands every frame to a
//! [`session::Presenter`].
//!
//! # Key entry points
//!
//! - [`session::Session`] - the frame driver owning all per-session state
//! - [`camera::zoom::ZoomController`] - smoothed zoom intensity and fovy
//! - [`weapons::WeaponSelector`] - bounded, non-wrapping weapon selection
//! - [`input::InputSampler`] - turns device state into frozen intents
//! - [`options::Options`] - TOML-configurable tuning values
//!
//! # Frame order
//!
//! Each [`tick`](session::Session::tick) samples intents, checks for exit,
//! advances the camera rig and zoom, dispatches the weapon selector, then
//! presents an immutable [`session::FrameView`]. A "continue" click
//! reported by the presenter resets the session.

pub mod assets;
pub mod camera;
pub mod error;
pub mod hud;
pub mod input;
pub mod options;
pub mod session;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
pub mod weapons;

pub use error::ArsenalError;
pub use input::{DeviceState, FrameIntents, InputEvent, InputSampler};
pub use options::Options;
pub use session::{FrameOutcome, Session, SessionState};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
