use crate::api::types::FrameTime;

/// Default cap on a single frame delta (seconds).
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.1;

/// Variable-step frame clock.
/// Clamps each wall-clock delta so a suspended tab does not produce a
/// runaway jump, and accumulates simulation time in f64.
#[derive(Debug, Clone)]
pub struct FrameClock {
    max_dt: f32,
    elapsed: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: if max_dt.is_finite() && max_dt > 0.0 { max_dt } else { DEFAULT_MAX_FRAME_DT },
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Clamp a raw delta: negative or NaN → 0, above the cap (incl. +inf) → cap.
    pub fn clamp_dt(&self, frame_dt: f32) -> f32 {
        if frame_dt.is_nan() || frame_dt <= 0.0 {
            return 0.0;
        }
        frame_dt.min(self.max_dt)
    }

    /// Advance by one frame.
    pub fn advance(&mut self, frame_dt: f32) -> FrameTime {
        let dt = self.clamp_dt(frame_dt);
        self.elapsed += dt as f64;
        self.frame += 1;
        FrameTime {
            dt,
            elapsed: self.elapsed,
            frame: self.frame,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAME_DT)
    }
}
