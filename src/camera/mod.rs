//! Camera system for the weapon viewer.
//!
//! Provides a perspective camera orbiting the displayed weapon and the
//! smoothed zoom controller that drives its field of view.

/// Orbital camera rig combining the camera pose with the zoom controller.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Smoothed zoom intensity and bounded field of view.
pub mod zoom;

pub use controller::CameraController;
pub use zoom::{zoom_percentage, ZoomController, FOVY_MAX, FOVY_MIN};
