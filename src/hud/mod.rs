//! Heads-up display model: selection and zoom fades, the formatted labels,
//! and the continue button's screen rectangle.
//!
//! Nothing here draws; a presenter reads these values from the frame view.

mod fade;

use glam::Vec2;
pub use fade::{model_alpha, wire_alpha, SelectionFade, OPAQUE};

/// Formatted HUD strings for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLabels {
    /// `"fps: N"`.
    pub fps: String,
    /// `"zoom: N%"`.
    pub zoom: String,
    /// Selected weapon name.
    pub weapon: String,
    /// `"(i of N)"`, 1-based.
    pub position: String,
}

impl HudLabels {
    /// Format the labels from raw values. `index` is 0-based.
    #[must_use]
    pub fn new(
        fps: f32,
        zoom_percentage: f32,
        weapon: &str,
        index: usize,
        count: usize,
    ) -> Self {
        Self {
            fps: format!("fps: {:.0}", fps.max(0.0)),
            zoom: format!("zoom: {zoom_percentage:.0}%"),
            weapon: weapon.to_owned(),
            position: format!("({} of {count})", index + 1),
        }
    }
}

/// Axis-aligned screen rectangle of the continue button, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinueButton {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl ContinueButton {
    /// Default button size in physical pixels.
    pub const SIZE: Vec2 = Vec2::new(220.0, 60.0);
    /// Gap between the button and the window edges.
    pub const EDGE_OFFSET: f32 = 65.0;

    /// Button anchored to the bottom-right corner of a `width` x `height`
    /// viewport.
    #[must_use]
    pub fn anchored(width: f32, height: f32) -> Self {
        let max = Vec2::new(width, height) - Vec2::splat(Self::EDGE_OFFSET);
        Self {
            min: (max - Self::SIZE).max(Vec2::ZERO),
            max,
        }
    }

    /// Whether `point` lies inside the button.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
