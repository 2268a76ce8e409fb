use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera pose and projection parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Look-at target the camera orbits around.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Up direction, also the orbit axis.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Initial vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 100.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbital rotation speed in radians per second.
    #[schemars(title = "Orbit Speed", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub orbit_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [-10.0, 15.0, -10.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fovy: 45.0,
            znear: 0.01,
            zfar: 1000.0,
            orbit_speed: 0.5,
        }
    }
}
