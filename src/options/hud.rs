use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "HUD", inline)]
#[serde(default)]
/// Fading and frame pacing for the heads-up display.
pub struct HudOptions {
    /// Below this fovy the solid model fades out and its wireframe fades in.
    #[schemars(title = "Model Fade FOV", range(min = 10.0, max = 30.0), extend("step" = 0.5))]
    pub model_fade_fovy: f32,
    /// Exponential decay rate (per second) of the weapon-name highlight
    /// after a switch.
    #[schemars(title = "Selection Fade Rate", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub selection_fade_rate: f32,
    /// Frame limiter target (0 = unlimited).
    #[schemars(skip)]
    pub target_fps: u32,
}

impl Default for HudOptions {
    fn default() -> Self {
        Self {
            model_fade_fovy: 13.0,
            selection_fade_rate: 1.5,
            target_fps: 144,
        }
    }
}
