use glam::{Quat, Vec3};

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::zoom::ZoomController;
use crate::input::FrameIntents;
use crate::options::{CameraOptions, ZoomOptions};

/// Orbital camera rig: the eye circles the focus point about the up axis at
/// a constant angular speed while the zoom controller drives the field of
/// view.
#[derive(Debug, Clone)]
pub struct CameraController {
    orientation: Quat,
    focus_point: Vec3,
    /// Eye offset from the focus point at zero orbit angle.
    offset: Vec3,
    axis: Vec3,
    orbit_speed: f32,
    initial_fovy: f32,

    /// Camera reflecting the latest update.
    pub camera: Camera,
    /// Uniform block refreshed on every update.
    pub uniform: CameraUniform,
    zoom: ZoomController,
}

impl CameraController {
    /// Rig at the configured pose and field of view.
    #[must_use]
    pub fn new(
        camera_options: &CameraOptions,
        zoom_options: ZoomOptions,
        aspect: f32,
    ) -> Self {
        let camera = Camera::from_options(camera_options, aspect);
        let zoom = ZoomController::new(camera_options.fovy, zoom_options);
        let axis = camera.up.try_normalize().unwrap_or(Vec3::Y);

        let mut rig = Self {
            orientation: Quat::IDENTITY,
            focus_point: camera.target,
            offset: camera.eye - camera.target,
            axis,
            orbit_speed: camera_options.orbit_speed,
            initial_fovy: camera_options.fovy,
            camera,
            uniform: CameraUniform::new(),
            zoom,
        };
        rig.update_camera_pos();
        rig
    }

    fn update_camera_pos(&mut self) {
        self.camera.eye = self.focus_point + self.orientation * self.offset;
        self.camera.target = self.focus_point;
        self.camera.fovy = self.zoom.fovy();
        self.uniform.update_view_proj(&self.camera);
    }

    /// Advance the orbit by `dt` seconds and step the zoom with this frame's
    /// intents.
    pub fn update(&mut self, dt: f32, intents: &FrameIntents) {
        let step = Quat::from_axis_angle(self.axis, self.orbit_speed * dt);
        self.orientation = (step * self.orientation).normalize();
        let _ = self.zoom.advance(dt, intents);
        self.update_camera_pos();
    }

    /// Return to the initial pose with the zoom at rest.
    pub fn reset(&mut self) {
        self.orientation = Quat::IDENTITY;
        self.zoom.reset(self.initial_fovy);
        self.update_camera_pos();
    }

    /// Update the viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            #[allow(clippy::cast_precision_loss)]
            let aspect = width as f32 / height as f32;
            self.camera.aspect = aspect;
            self.uniform.update_view_proj(&self.camera);
        }
    }

    /// Zoom controller driving the field of view.
    #[must_use]
    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    /// Current orbit angle in radians, in `(-PI, PI]`.
    #[must_use]
    pub fn orbit_angle(&self) -> f32 {
        let (axis, angle) = self.orientation.to_axis_angle();
        if axis.dot(self.axis) < 0.0 {
            -angle
        } else {
            angle
        }
    }
}
