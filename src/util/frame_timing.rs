//! Frame duration, smoothed FPS and an optional frame-rate cap.

use web_time::{Duration, Instant};

/// Longest frame time handed to the simulation, in seconds. Stalls such as
/// a dragged window would otherwise arrive as one enormous step.
const MAX_FRAME_DT: f32 = 0.25;

/// Timing for one frame: the elapsed time and the smoothed frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Smoothed frames per second.
    pub fps: f32,
}

impl FrameTime {
    /// Timing for a fixed-rate frame, e.g. in tests or headless replays.
    #[must_use]
    pub fn fixed(fps: f32) -> Self {
        Self {
            dt: if fps > 0.0 { 1.0 / fps } else { 0.0 },
            fps,
        }
    }
}

/// Frame timing with FPS calculation and optional frame limiting
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            // 5% new value, 95% old value for a steady readout
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// When the next frame is due, for `ControlFlow::WaitUntil`.
    #[must_use]
    pub fn next_frame_at(&self) -> Instant {
        self.last_frame + self.min_frame_duration
    }

    /// Close the current frame: returns its duration and the updated
    /// smoothed FPS.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed.as_secs_f32())
    }

    fn record(&mut self, frame_time: f32) -> FrameTime {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        FrameTime {
            dt: frame_time.min(MAX_FRAME_DT),
            fps: self.smoothed_fps,
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothed_fps_moves_toward_measurement() {
        let mut timing = FrameTiming::new(0);
        let time = timing.record(1.0 / 120.0);
        assert!(time.fps > 60.0 && time.fps < 120.0);
        assert!((time.dt - 1.0 / 120.0).abs() < 1e-6);
    }

    #[test]
    fn stalls_are_capped() {
        let mut timing = FrameTiming::new(60);
        let time = timing.record(3.0);
        assert_eq!(time.dt, MAX_FRAME_DT);
    }

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.next_frame_at(), timing.last_frame);
    }

    #[test]
    fn fixed_frame_time() {
        let time = FrameTime::fixed(60.0);
        assert!((time.dt - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(FrameTime::fixed(0.0).dt, 0.0);
    }
}
