//! The frame driver: owns every piece of per-session state and advances it
//! once per frame.
//!
//! A [`Session`] samples input, advances the camera rig and zoom,
//! dispatches the weapon selector, then hands an immutable [`FrameView`] to
//! a [`Presenter`]. An exit intent releases the loaded weapons exactly once
//! and moves the session to its terminal [`SessionState::Exiting`] state.

use crate::assets::{load_roster, release_roster, AssetBackend};
use crate::camera::core::{Camera, CameraUniform};
use crate::camera::zoom::FOVY_MIN;
use crate::camera::CameraController;
use crate::error::ArsenalError;
use crate::hud::{model_alpha, wire_alpha, HudLabels, SelectionFade};
use crate::input::{FrameIntents, InputDevice, InputSampler};
use crate::options::{HudOptions, InitialSelection, Options};
use crate::util::frame_timing::FrameTime;
use crate::weapons::{WeaponSelector, WeaponSet, WeaponSlot};

/// Aspect ratio used until the first resize.
const DEFAULT_ASPECT: f32 = 1680.0 / 1050.0;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Frames are being processed.
    Running,
    /// Resources have been released; no further frames run.
    Exiting,
}

/// What a call to [`Session::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was advanced and presented.
    Presented,
    /// The frame was presented and the presenter asked to start over.
    Reset,
    /// The session has exited.
    Exited,
}

/// Events a presenter reports back after drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The continue button was clicked.
    Continue,
}

/// Immutable snapshot of everything a presenter needs to draw one frame.
#[derive(Debug)]
pub struct FrameView<'a, M> {
    /// Camera after this frame's orbit and zoom.
    pub camera: &'a Camera,
    /// GPU-ready camera block.
    pub uniform: CameraUniform,
    /// Selected weapon.
    pub weapon: &'a WeaponSlot<M>,
    /// Number of weapons in the roster.
    pub weapon_count: usize,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Zoom as a 0-100 percentage.
    pub zoom_percentage: f32,
    /// Weapon-name highlight alpha in `[0, 255]`.
    pub selection_alpha: f32,
    /// Solid model alpha.
    pub model_alpha: u8,
    /// Wireframe overlay alpha.
    pub wire_alpha: u8,
    /// Formatted HUD strings.
    pub labels: HudLabels,
}

/// Draws frames and reports UI interaction.
pub trait Presenter<M> {
    /// Draw `view`. Return [`UiEvent::Continue`] if the user asked to
    /// start over.
    fn present(&mut self, view: &FrameView<'_, M>) -> Option<UiEvent>;
}

impl<M, F> Presenter<M> for F
where
    F: FnMut(&FrameView<'_, M>) -> Option<UiEvent>,
{
    fn present(&mut self, view: &FrameView<'_, M>) -> Option<UiEvent> {
        self(view)
    }
}

/// One viewing session over a loaded weapon roster.
///
/// The session owns the asset backend and every loaded model. Models are
/// released exactly once: on an exit intent, on [`shutdown`](Self::shutdown)
/// or when the session is dropped, whichever comes first.
pub struct Session<B: AssetBackend> {
    backend: B,
    weapons: Option<WeaponSet<B::Model>>,
    sampler: InputSampler,
    rig: CameraController,
    selector: WeaponSelector,
    fade: SelectionFade,
    initial: InitialSelection,
    hud: HudOptions,
    state: SessionState,
}

impl<B: AssetBackend> Session<B> {
    /// Load the roster through `backend` and set up the initial state.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::OptionsParse`] for invalid zoom tuning, the
    /// first asset failure (nothing stays loaded in that case) or
    /// [`ArsenalError::EmptyRoster`].
    pub fn new(
        mut backend: B,
        options: &Options,
    ) -> Result<Self, ArsenalError> {
        options.validate()?;
        let weapons = load_roster(&mut backend, &options.roster)?;
        let initial = options.roster.initial;
        let count = weapons.len();
        let selector =
            WeaponSelector::new(count, initial.pick(count, &mut rand::rng()));

        log::info!(
            "Session started with {count} weapons, selected {}",
            selector.selected()
        );

        Ok(Self {
            backend,
            weapons: Some(weapons),
            sampler: InputSampler::with_bindings(options.keybindings.clone()),
            rig: CameraController::new(
                &options.camera,
                options.zoom.clone(),
                DEFAULT_ASPECT,
            ),
            selector,
            fade: SelectionFade::new(options.hud.selection_fade_rate),
            initial,
            hud: options.hud.clone(),
            state: SessionState::Running,
        })
    }

    /// Sample `device` and run one frame.
    pub fn tick<D, P>(
        &mut self,
        device: &D,
        time: FrameTime,
        presenter: &mut P,
    ) -> FrameOutcome
    where
        D: InputDevice + ?Sized,
        P: Presenter<B::Model> + ?Sized,
    {
        let intents = self.sampler.sample(device);
        self.advance(intents, time, presenter)
    }

    /// Run one frame with already-sampled intents.
    pub fn advance<P>(
        &mut self,
        intents: FrameIntents,
        time: FrameTime,
        presenter: &mut P,
    ) -> FrameOutcome
    where
        P: Presenter<B::Model> + ?Sized,
    {
        if self.state == SessionState::Exiting {
            return FrameOutcome::Exited;
        }
        if intents.exit {
            log::info!("Exit requested");
            self.shutdown();
            return FrameOutcome::Exited;
        }

        self.rig.update(time.dt, &intents);

        if let Some(direction) = self.selector.dispatch(&intents) {
            self.fade.reset();
            log::debug!(
                "Switched {direction:?} to weapon {}",
                self.selector.selected()
            );
        } else {
            self.fade.decay(time.dt);
        }

        let event = match self.frame_view(time.fps) {
            Some(view) => presenter.present(&view),
            None => return FrameOutcome::Exited,
        };
        match event {
            Some(UiEvent::Continue) => {
                self.reset();
                FrameOutcome::Reset
            }
            None => FrameOutcome::Presented,
        }
    }

    fn frame_view(&self, fps: f32) -> Option<FrameView<'_, B::Model>> {
        let weapons = self.weapons.as_ref()?;
        let weapon = weapons.get(self.selector.selected())?;
        let zoom = self.rig.zoom();
        let fovy = zoom.fovy();
        let percentage = zoom.percentage();
        let solid = model_alpha(fovy, FOVY_MIN, self.hud.model_fade_fovy);

        Some(FrameView {
            camera: &self.rig.camera,
            uniform: self.rig.uniform,
            weapon,
            weapon_count: weapons.len(),
            fovy,
            zoom_percentage: percentage,
            selection_alpha: self.fade.alpha(),
            model_alpha: solid,
            wire_alpha: wire_alpha(solid),
            labels: HudLabels::new(
                fps,
                percentage,
                &weapon.name,
                weapon.index,
                weapons.len(),
            ),
        })
    }

    /// Put camera, zoom, selection and fade back to their initial state.
    /// The loaded weapons are kept.
    pub fn reset(&mut self) {
        if self.state == SessionState::Exiting {
            return;
        }
        self.rig.reset();
        let count = self.selector.count();
        self.selector.select(self.initial.pick(count, &mut rand::rng()));
        self.fade.reset();
        log::info!("Session reset, selected {}", self.selector.selected());
    }

    /// Release every loaded model and stop processing frames. Safe to call
    /// more than once.
    pub fn shutdown(&mut self) {
        if let Some(weapons) = self.weapons.take() {
            release_roster(&mut self.backend, weapons);
            log::info!("Session shut down");
        }
        self.state = SessionState::Exiting;
    }

    /// Update the viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.rig.resize(width, height);
    }

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.rig.zoom().fovy()
    }

    /// Current zoom as a 0-100 percentage.
    #[must_use]
    pub fn zoom_percentage(&self) -> f32 {
        self.rig.zoom().percentage()
    }

    /// Index of the selected weapon.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selector.selected()
    }

    /// Selected weapon slot, `None` once the session has exited.
    #[must_use]
    pub fn selected(&self) -> Option<&WeaponSlot<B::Model>> {
        self.weapons.as_ref()?.get(self.selector.selected())
    }

    /// Weapon-name highlight alpha in `[0, 255]`.
    #[must_use]
    pub fn selection_alpha(&self) -> f32 {
        self.fade.alpha()
    }

    /// Camera after the latest frame.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.rig.camera
    }

    /// Input sampler with the session's key bindings.
    #[must_use]
    pub fn sampler(&self) -> &InputSampler {
        &self.sampler
    }

    /// Asset backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: AssetBackend> Drop for Session<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
