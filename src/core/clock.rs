/// Timing handed to every frame callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the clock started.
    pub elapsed: f64,
}

/// Turns absolute timestamps into per-frame delta and elapsed time.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: f64,
    last: f64,
}

impl FrameClock {
    pub fn new(now_sec: f64) -> Self {
        Self {
            start: now_sec,
            last: now_sec,
        }
    }

    /// Sample the clock at `now_sec`. Timestamps that go backwards yield a
    /// zero delta.
    pub fn tick(&mut self, now_sec: f64) -> FrameTime {
        let delta = (now_sec - self.last).max(0.0);
        self.last = self.last.max(now_sec);
        FrameTime {
            delta: delta as f32,
            elapsed: self.last - self.start,
        }
    }
}

/// Source of frame callbacks.
///
/// The browser implementation drives the callback from
/// `requestAnimationFrame`; tests and headless runs use `FixedStepScheduler`.
pub trait FrameScheduler {
    fn on_frame(self, callback: Box<dyn FnMut(FrameTime)>);
}

/// Runs a fixed number of frames with a constant delta, synchronously.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepScheduler {
    pub step_sec: f64,
    pub frames: usize,
}

impl FixedStepScheduler {
    pub fn new(step_sec: f64, frames: usize) -> Self {
        Self { step_sec, frames }
    }

    /// Frames needed to cover `duration_sec` at `step_sec`.
    pub fn for_duration(step_sec: f64, duration_sec: f64) -> Self {
        let frames = (duration_sec / step_sec).ceil().max(0.0) as usize;
        Self { step_sec, frames }
    }
}

impl FrameScheduler for FixedStepScheduler {
    fn on_frame(self, mut callback: Box<dyn FnMut(FrameTime)>) {
        let mut clock = FrameClock::new(0.0);
        for frame in 1..=self.frames {
            callback(clock.tick(frame as f64 * self.step_sec));
        }
    }
}
