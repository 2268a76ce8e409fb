//! Smoothed zoom: an intensity signal eased toward the held zoom direction
//! and a field of view that follows it inside fixed bounds.
//!
//! Negative intensity narrows the field of view (zooms in). A step that
//! would leave `[FOVY_MIN, FOVY_MAX]` is dropped for that frame instead of
//! being clamped, so the fovy stalls softly just inside the bound until the
//! direction reverses.

use glam::FloatExt;

use crate::input::FrameIntents;
use crate::options::{ZoomOptions, ZoomTiming};

/// Narrowest field of view in degrees.
pub const FOVY_MIN: f32 = 10.0;
/// Widest field of view in degrees.
pub const FOVY_MAX: f32 = 100.0;

/// Intensity target while zoom-in is held.
pub const ZOOM_IN_TARGET: f32 = -1.0;
/// Intensity target while zoom-out is held.
pub const ZOOM_OUT_TARGET: f32 = 1.0;
/// Intensity target with no zoom intent.
pub const ZOOM_STOP_TARGET: f32 = 0.0;

/// Remap `fovy` onto a 0-100 zoom percentage where `min_fovy` reads 100
/// and `max_fovy` reads 0.
#[must_use]
pub fn zoom_percentage(fovy: f32, min_fovy: f32, max_fovy: f32) -> f32 {
    let mirrored = max_fovy - fovy + min_fovy;
    (mirrored - min_fovy) / (max_fovy - min_fovy) * 100.0
}

/// Pull `fovy` into the bounds. Non-finite input lands on the widest view.
fn clamp_fovy(fovy: f32) -> f32 {
    if fovy.is_finite() {
        fovy.clamp(FOVY_MIN, FOVY_MAX)
    } else {
        FOVY_MAX
    }
}

/// Smoothed zoom intensity plus the field of view it drives.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    intensity: f32,
    fovy: f32,
    options: ZoomOptions,
}

impl ZoomController {
    /// Controller at rest with the given starting fovy, clamped into bounds.
    #[must_use]
    pub fn new(fovy: f32, options: ZoomOptions) -> Self {
        Self {
            intensity: 0.0,
            fovy: clamp_fovy(fovy),
            options,
        }
    }

    /// Current smoothed intensity.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Current field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Tuning in use.
    #[must_use]
    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    /// Current fovy as a 0-100 zoom percentage.
    #[must_use]
    pub fn percentage(&self) -> f32 {
        zoom_percentage(self.fovy, FOVY_MIN, FOVY_MAX)
    }

    /// Whether `fovy` lies inside the inclusive bounds.
    #[must_use]
    pub fn in_bounds(&self, fovy: f32) -> bool {
        (FOVY_MIN..=FOVY_MAX).contains(&fovy)
    }

    /// Intensity target for this frame's intents. Zoom-in wins if both
    /// directions are held.
    #[must_use]
    pub fn target(intents: &FrameIntents) -> f32 {
        if intents.zoom_in {
            ZOOM_IN_TARGET
        } else if intents.zoom_out {
            ZOOM_OUT_TARGET
        } else {
            ZOOM_STOP_TARGET
        }
    }

    /// Multiplier turning per-reference-frame rates into this frame's rates.
    fn frame_scale(&self, dt: f32) -> f32 {
        match self.options.timing {
            ZoomTiming::FrameTime => dt * self.options.reference_rate,
            ZoomTiming::PerFrame => 1.0,
        }
    }

    /// Advance one frame: ease the intensity toward the intent target, then
    /// step the fovy. Returns whether the fovy changed.
    pub fn advance(&mut self, dt: f32, intents: &FrameIntents) -> bool {
        let scale = self.frame_scale(dt);

        let rate = (self.options.smoothing * scale).clamp(0.0, 1.0);
        self.intensity = self.intensity.lerp(Self::target(intents), rate);

        let candidate = self.fovy + self.options.step * scale * self.intensity;
        if !self.in_bounds(candidate) {
            return false;
        }
        let changed = candidate != self.fovy;
        self.fovy = candidate;
        changed
    }

    /// Return to rest at `fovy` (clamped into bounds).
    pub fn reset(&mut self, fovy: f32) {
        self.intensity = 0.0;
        self.fovy = clamp_fovy(fovy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn zoom_in() -> FrameIntents {
        FrameIntents {
            zoom_in: true,
            ..FrameIntents::default()
        }
    }

    fn zoom_out() -> FrameIntents {
        FrameIntents {
            zoom_out: true,
            ..FrameIntents::default()
        }
    }

    fn per_frame() -> ZoomOptions {
        ZoomOptions {
            timing: ZoomTiming::PerFrame,
            ..ZoomOptions::default()
        }
    }

    #[test]
    fn percentage_boundaries() {
        assert_eq!(zoom_percentage(10.0, 10.0, 100.0), 100.0);
        assert_eq!(zoom_percentage(100.0, 10.0, 100.0), 0.0);
        assert!((zoom_percentage(55.0, 10.0, 100.0) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn percentage_decreases_as_fovy_widens() {
        let narrow = zoom_percentage(30.0, 10.0, 100.0);
        let wide = zoom_percentage(60.0, 10.0, 100.0);
        assert!(narrow > wide);
    }

    #[test]
    fn target_selection() {
        assert_eq!(ZoomController::target(&zoom_in()), ZOOM_IN_TARGET);
        assert_eq!(ZoomController::target(&zoom_out()), ZOOM_OUT_TARGET);
        assert_eq!(
            ZoomController::target(&FrameIntents::default()),
            ZOOM_STOP_TARGET
        );
        let both = FrameIntents {
            zoom_in: true,
            zoom_out: true,
            ..FrameIntents::default()
        };
        assert_eq!(ZoomController::target(&both), ZOOM_IN_TARGET);
    }

    #[test]
    fn fovy_stays_in_bounds_for_any_frame_count() {
        for options in [ZoomOptions::default(), per_frame()] {
            let mut zoom = ZoomController::new(45.0, options);
            for frame in 0..3000 {
                let intents = if (frame / 400) % 2 == 0 {
                    zoom_in()
                } else {
                    zoom_out()
                };
                let _ = zoom.advance(DT, &intents);
                assert!(zoom.in_bounds(zoom.fovy()), "frame {frame}");
            }
        }
    }

    #[test]
    fn large_dt_does_not_overshoot_target() {
        let mut zoom = ZoomController::new(45.0, ZoomOptions::default());
        let _ = zoom.advance(10.0, &zoom_out());
        assert!(zoom.intensity() <= ZOOM_OUT_TARGET);
        assert!(zoom.in_bounds(zoom.fovy()));
    }

    #[test]
    fn intensity_decays_monotonically_without_intent() {
        for options in [ZoomOptions::default(), per_frame()] {
            let mut zoom = ZoomController::new(45.0, options);
            for _ in 0..30 {
                let _ = zoom.advance(DT, &zoom_in());
            }
            assert!(zoom.intensity() < 0.0);

            let mut previous = zoom.intensity().abs();
            for _ in 0..200 {
                let _ = zoom.advance(DT, &FrameIntents::default());
                let current = zoom.intensity().abs();
                assert!(current < previous);
                previous = current;
            }
        }
    }

    #[test]
    fn intensity_falls_below_epsilon_in_bounded_frames() {
        let mut zoom = ZoomController::new(45.0, ZoomOptions::default());
        for _ in 0..60 {
            let _ = zoom.advance(DT, &zoom_out());
        }
        let eps = 1e-4;
        let released = (0..2000)
            .position(|_| {
                let _ = zoom.advance(DT, &FrameIntents::default());
                zoom.intensity().abs() < eps
            })
            .unwrap();
        assert!(released > 0);
        // Exponential decay never lands exactly on zero.
        assert!(zoom.intensity() != 0.0);
    }

    #[test]
    fn sustained_zoom_out_freezes_below_max() {
        let mut zoom = ZoomController::new(45.0, ZoomOptions::default());
        let max_step = zoom.options().step * DT * zoom.options().reference_rate;
        let mut previous = zoom.fovy();
        let mut frozen_at = None;

        for _ in 0..1000 {
            let changed = zoom.advance(DT, &zoom_out());
            let fovy = zoom.fovy();
            match frozen_at {
                None if changed => {
                    assert!(fovy > previous);
                    previous = fovy;
                }
                None => frozen_at = Some(fovy),
                Some(frozen) => assert_eq!(fovy, frozen),
            }
        }

        let frozen = frozen_at.unwrap();
        assert!(frozen <= 100.0);
        assert!(frozen > 100.0 - max_step);
        assert!(zoom.intensity() > 0.9);
    }

    #[test]
    fn sustained_zoom_in_stops_above_min() {
        let mut zoom = ZoomController::new(45.0, per_frame());
        for _ in 0..5000 {
            let _ = zoom.advance(DT, &zoom_in());
        }
        assert!(zoom.fovy() >= 10.0);
        assert!(zoom.fovy() < 10.0 + zoom.options().step);
    }

    #[test]
    fn reversing_direction_unfreezes() {
        let mut zoom = ZoomController::new(99.9, ZoomOptions::default());
        for _ in 0..200 {
            let _ = zoom.advance(DT, &zoom_out());
        }
        let frozen = zoom.fovy();
        for _ in 0..200 {
            let _ = zoom.advance(DT, &zoom_in());
        }
        assert!(zoom.fovy() < frozen);
    }

    #[test]
    fn per_frame_timing_ignores_dt() {
        let mut slow = ZoomController::new(45.0, per_frame());
        let mut fast = ZoomController::new(45.0, per_frame());
        let _ = slow.advance(1.0 / 30.0, &zoom_out());
        let _ = fast.advance(1.0 / 240.0, &zoom_out());
        assert_eq!(slow.intensity(), fast.intensity());
        assert_eq!(slow.fovy(), fast.fovy());
    }

    #[test]
    fn frame_time_is_rate_independent_over_one_second() {
        let mut at_60 = ZoomController::new(45.0, ZoomOptions::default());
        let mut at_120 = ZoomController::new(45.0, ZoomOptions::default());
        for _ in 0..60 {
            let _ = at_60.advance(1.0 / 60.0, &zoom_out());
        }
        for _ in 0..120 {
            let _ = at_120.advance(1.0 / 120.0, &zoom_out());
        }
        assert!((at_60.fovy() - at_120.fovy()).abs() < 5.0);
    }

    #[test]
    fn non_finite_start_lands_in_bounds() {
        let zoom = ZoomController::new(f32::NAN, ZoomOptions::default());
        assert_eq!(zoom.fovy(), FOVY_MAX);
        let zoom = ZoomController::new(f32::NEG_INFINITY, per_frame());
        assert_eq!(zoom.fovy(), FOVY_MAX);
    }

    #[test]
    fn construction_and_reset_clamp_into_bounds() {
        let mut zoom = ZoomController::new(150.0, ZoomOptions::default());
        assert_eq!(zoom.fovy(), 100.0);
        zoom.reset(2.0);
        assert_eq!(zoom.fovy(), 10.0);
        assert_eq!(zoom.intensity(), 0.0);
    }
}
