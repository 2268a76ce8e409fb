use glam::FloatExt;

/// Fully opaque alpha.
pub const OPAQUE: f32 = 255.0;

/// Below this the selection highlight snaps to fully transparent.
const SNAP_BELOW: f32 = 0.5;

/// Highlight alpha for the weapon name: jumps to opaque on each switch and
/// decays exponentially toward zero afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionFade {
    alpha: f32,
    rate: f32,
}

impl SelectionFade {
    /// Opaque fade decaying at `rate` per second.
    #[must_use]
    pub const fn new(rate: f32) -> Self {
        Self {
            alpha: OPAQUE,
            rate,
        }
    }

    /// Current alpha in `[0, 255]`.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Back to fully opaque.
    pub fn reset(&mut self) {
        self.alpha = OPAQUE;
    }

    /// Decay by one frame of `dt` seconds.
    pub fn decay(&mut self, dt: f32) {
        let t = (self.rate * dt).clamp(0.0, 1.0);
        self.alpha = self.alpha.lerp(0.0, t);
        if self.alpha < SNAP_BELOW {
            self.alpha = 0.0;
        }
    }
}

/// Solid-model alpha for the current fovy. Fully opaque at or above
/// `fade_fovy`, fading linearly to transparent at `min_fovy`.
#[must_use]
pub fn model_alpha(fovy: f32, min_fovy: f32, fade_fovy: f32) -> u8 {
    if fovy >= fade_fovy || fade_fovy <= min_fovy {
        return u8::MAX;
    }
    let t = ((fovy - min_fovy) / (fade_fovy - min_fovy)).clamp(0.0, 1.0);
    to_u8(0.0_f32.lerp(OPAQUE, t))
}

/// Wireframe overlay alpha, the complement of [`model_alpha`].
#[must_use]
pub const fn wire_alpha(model_alpha: u8) -> u8 {
    u8::MAX - model_alpha
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(alpha: f32) -> u8 {
    alpha.round().clamp(0.0, OPAQUE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decays_toward_zero_and_snaps() {
        let mut fade = SelectionFade::new(1.5);
        let mut previous = fade.alpha();
        let mut frames = 0;
        while fade.alpha() > 0.0 {
            fade.decay(1.0 / 60.0);
            assert!(fade.alpha() < previous);
            previous = fade.alpha();
            frames += 1;
            assert!(frames < 10_000);
        }
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn reset_restores_opaque() {
        let mut fade = SelectionFade::new(1.5);
        for _ in 0..30 {
            fade.decay(1.0 / 60.0);
        }
        assert!(fade.alpha() < OPAQUE);
        fade.reset();
        assert_eq!(fade.alpha(), OPAQUE);
    }

    #[test]
    fn huge_dt_cannot_go_negative() {
        let mut fade = SelectionFade::new(1.5);
        fade.decay(100.0);
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn model_alpha_remaps_below_fade_fovy() {
        assert_eq!(model_alpha(45.0, 10.0, 13.0), 255);
        assert_eq!(model_alpha(13.0, 10.0, 13.0), 255);
        assert_eq!(model_alpha(10.0, 10.0, 13.0), 0);
        assert_eq!(model_alpha(11.5, 10.0, 13.0), 128);
    }

    #[test]
    fn wire_alpha_is_complement() {
        for alpha in [0, 64, 200, 255] {
            assert_eq!(alpha + wire_alpha(alpha), 255);
        }
    }
}
