//! Simulation clock and frame-rate telemetry.

use log::info;

pub const DEFAULT_MAX_DELTA: f32 = 0.25;

#[derive(Debug, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since start.
    pub elapsed: f32,
    /// Scaled seconds of the last frame.
    pub delta: f32,
    pub time_scale: f32,
    /// Raw frame deltas are clamped to this before scaling.
    pub max_delta: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Account for a frame that took `raw_dt` wall seconds. Returns the
    /// simulation delta: clamped to `[0, max_delta]`, then scaled. A negative
    /// or NaN `max_delta` freezes the clock instead of panicking.
    pub fn advance(&mut self, raw_dt: f32) -> f32 {
        let clamped = raw_dt.max(0.0).min(self.max_delta.max(0.0));
        let scaled_dt = clamped * self.time_scale;
        self.elapsed += scaled_dt;
        self.delta = scaled_dt;
        scaled_dt
    }
}

/// Counts frames and logs the average rate every `interval` wall seconds.
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    accumulated: f32,
    frames: u32,
    last_fps: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
            frames: 0,
            last_fps: 0.0,
        }
    }

    /// Last reported rate.
    pub fn fps(&self) -> f32 {
        self.last_fps
    }

    /// Record one frame of `raw_dt` seconds. Returns the rate when a report
    /// window closes.
    pub fn tick(&mut self, raw_dt: f32) -> Option<f32> {
        if self.interval <= 0.0 {
            return None;
        }
        self.frames += 1;
        self.accumulated += raw_dt;
        if self.accumulated < self.interval {
            return None;
        }
        self.last_fps = self.frames as f32 / self.accumulated;
        info!("FPS: {:.1} over {} frames", self.last_fps, self.frames);
        self.frames = 0;
        self.accumulated = 0.0;
        Some(self.last_fps)
    }
}
