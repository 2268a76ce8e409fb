use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArsenalError;

/// How the zoom smoothing and fovy step scale with frame time.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomTiming {
    /// Rates are multiplied by `dt * reference_rate`, so the response is
    /// the same at any frame rate.
    #[default]
    FrameTime,
    /// Rates are applied once per frame regardless of `dt`; faster frame
    /// rates zoom faster.
    PerFrame,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default, deny_unknown_fields)]
/// Smoothed zoom tuning. The fovy bounds are fixed, see
/// [`FOVY_MIN`](crate::camera::zoom::FOVY_MIN) and
/// [`FOVY_MAX`](crate::camera::zoom::FOVY_MAX).
pub struct ZoomOptions {
    /// Degrees of fovy change per unit intensity per reference frame.
    #[schemars(title = "Zoom Step", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub step: f32,
    /// Fraction of the remaining distance to the target intensity covered
    /// per reference frame.
    #[schemars(title = "Smoothing", range(min = 0.0001, max = 0.05), extend("step" = 0.0001))]
    pub smoothing: f32,
    /// Reference frames per second used to scale rates by `dt`.
    #[schemars(skip)]
    pub reference_rate: f32,
    /// Frame-time scaling policy.
    #[schemars(title = "Timing")]
    pub timing: ZoomTiming,
}

impl ZoomOptions {
    /// Check that every rate is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::OptionsParse`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ArsenalError> {
        for (name, value) in [
            ("step", self.step),
            ("smoothing", self.smoothing),
            ("reference_rate", self.reference_rate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ArsenalError::OptionsParse(format!(
                    "zoom.{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            step: 0.08,
            smoothing: 0.0023,
            reference_rate: 946.0,
            timing: ZoomTiming::FrameTime,
        }
    }
}
