//! Standalone viewer window backed by winit.
//!
//! The window title doubles as the HUD: fps, zoom percentage, the selected
//! weapon and its roster position. Clicking inside the continue button
//! region (bottom-right corner) restarts the session.
//!
//! ```no_run
//! # use arsenal::Viewer;
//! Viewer::builder()
//!     .with_title("Arsenal")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    assets::{FsAssets, FsModel},
    error::ArsenalError,
    hud::ContinueButton,
    input::{DeviceState, InputEvent, MouseButton},
    options::Options,
    session::{FrameOutcome, FrameView, Presenter, Session, UiEvent},
    util::frame_timing::FrameTiming,
};

/// Initial window size in logical pixels.
const WINDOW_SIZE: (u32, u32) = (1680, 1050);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Arsenal", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Arsenal".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that shows the weapon roster.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the session
    /// exits.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::Viewer`] if the event loop fails, or the
    /// startup error if the roster could not be loaded.
    pub fn run(self) -> Result<(), ArsenalError> {
        let event_loop = EventLoop::new()
            .map_err(|e| ArsenalError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            session: None,
            presenter: None,
            device: DeviceState::new(),
            timing: FrameTiming::new(self.options.hud.target_fps),
            options: self.options,
            title: self.title,
            startup_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ArsenalError::Viewer(e.to_string()))?;

        app.startup_error.map_or(Ok(()), Err)
    }
}

// ── Presenter ────────────────────────────────────────────────────────────

/// Writes the HUD into the window title and reports continue clicks.
struct TitlePresenter {
    window: Arc<Window>,
    base_title: String,
    last_title: String,
    button: ContinueButton,
    continue_clicked: bool,
}

impl TitlePresenter {
    fn new(window: Arc<Window>, base_title: String) -> Self {
        let button = continue_button(&window);
        Self {
            window,
            base_title,
            last_title: String::new(),
            button,
            continue_clicked: false,
        }
    }
}

impl Presenter<FsModel> for TitlePresenter {
    fn present(&mut self, view: &FrameView<'_, FsModel>) -> Option<UiEvent> {
        let labels = &view.labels;
        let title = format!(
            "{} | {} | {} | {} {}",
            self.base_title,
            labels.fps,
            labels.zoom,
            labels.weapon,
            labels.position
        );
        if title != self.last_title {
            self.window.set_title(&title);
            self.last_title = title;
        }
        std::mem::take(&mut self.continue_clicked).then_some(UiEvent::Continue)
    }
}

#[allow(clippy::cast_precision_loss)]
fn continue_button(window: &Window) -> ContinueButton {
    let inner = window.inner_size();
    ContinueButton::anchored(inner.width as f32, inner.height as f32)
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    session: Option<Session<FsAssets>>,
    presenter: Option<TitlePresenter>,
    device: DeviceState,
    timing: FrameTiming,
    options: Options,
    title: String,
    startup_error: Option<ArsenalError>,
}

impl ViewerApp {
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(session), Some(presenter)) =
            (&mut self.session, &mut self.presenter)
        else {
            return;
        };

        if self.timing.should_render() {
            presenter.continue_clicked = self
                .device
                .button_pressed(MouseButton::Left)
                && presenter.button.contains(self.device.cursor());

            let time = self.timing.tick();
            let outcome = session.tick(&self.device, time, presenter);
            self.device.end_frame();

            if outcome == FrameOutcome::Exited {
                event_loop.exit();
                return;
            }
        }

        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                WINDOW_SIZE.0,
                WINDOW_SIZE.1,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                self.startup_error = Some(ArsenalError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let mut session = match Session::new(FsAssets::new(), &self.options) {
            Ok(s) => s,
            Err(e) => {
                log::error!("Failed to start session: {e}");
                self.startup_error = Some(e);
                event_loop.exit();
                return;
            }
        };
        let inner = window.inner_size();
        session.resize(inner.width, inner.height);

        self.presenter =
            Some(TitlePresenter::new(Arc::clone(&window), self.title.clone()));
        window.request_redraw();
        self.window = Some(window);
        self.session = Some(session);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        // Guard: window and session must be initialised.
        if self.session.is_none() {
            if matches!(event, WindowEvent::CloseRequested) {
                event_loop.exit();
            }
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                // The session sees this as an exit intent on its next tick
                // and releases its weapons before the loop stops.
                self.device.handle_event(&InputEvent::CloseRequested);
                self.redraw(event_loop);
            }

            WindowEvent::Resized(size) => {
                if let Some(session) = &mut self.session {
                    session.resize(size.width, size.height);
                }
                if let (Some(presenter), Some(window)) =
                    (&mut self.presenter, &self.window)
                {
                    presenter.button = continue_button(window);
                }
            }

            WindowEvent::Focused(false) => self.device.release_all(),

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::MouseInput { button, state, .. } => {
                self.device.handle_event(&InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                self.device.handle_event(&InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.device.handle_event(&InputEvent::key(
                    format!("{code:?}"),
                    event.state == ElementState::Pressed,
                ));
            }

            _ => (),
        }
    }
}
