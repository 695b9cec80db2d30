use super::constants::{TRANSITION_SPEED_ACTIVE, TRANSITION_SPEED_IDLE};
use super::shapes::ShapeId;

/// Tracks which shape particles are heading for and how far the current
/// morph has progressed.
///
/// A selection made while a morph is still running is dropped rather than
/// queued, so rapid toggling cannot make the target thrash.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionController {
    active_shape: ShapeId,
    in_transition: bool,
    progress: f32,
}

impl TransitionController {
    /// Settled on `shape` with no morph pending.
    pub fn new(shape: ShapeId) -> Self {
        Self {
            active_shape: shape,
            in_transition: false,
            progress: 1.0,
        }
    }

    /// Already morphing toward `shape` from the start.
    pub fn transitioning_to(shape: ShapeId) -> Self {
        Self {
            active_shape: shape,
            in_transition: true,
            progress: 0.0,
        }
    }

    pub fn active_shape(&self) -> ShapeId {
        self.active_shape
    }

    pub fn in_transition(&self) -> bool {
        self.in_transition
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Start a morph toward `target`. Returns false (and changes nothing) when
    /// a morph is already running.
    pub fn select_shape(&mut self, target: ShapeId) -> bool {
        if self.in_transition {
            return false;
        }
        self.active_shape = target;
        self.progress = 0.0;
        self.in_transition = true;
        true
    }

    /// Advance progress by `delta` seconds; settles once progress reaches 1.
    pub fn tick(&mut self, delta: f32) {
        let speed = if self.in_transition {
            TRANSITION_SPEED_ACTIVE
        } else {
            TRANSITION_SPEED_IDLE
        };
        self.progress += delta.max(0.0) * speed;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.in_transition = false;
        }
    }
}

/// Periodic shape alternation driven by frame elapsed time.
///
/// Replaces a wall-clock interval timer: the owner polls it once per frame
/// and receives `true` when a cycle is due.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoCycle {
    interval_sec: f64,
    next_due: Option<f64>,
}

impl AutoCycle {
    pub fn new(interval_sec: f64) -> Self {
        Self {
            interval_sec,
            next_due: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval_sec(&self) -> f64 {
        self.interval_sec
    }

    /// Arm the timer; the first cycle fires one interval after `now`.
    pub fn enable(&mut self, now: f64) {
        self.next_due = Some(now + self.interval_sec);
    }

    /// Cancel the pending cycle.
    pub fn disable(&mut self) {
        self.next_due = None;
    }

    /// Flip between enabled and disabled. Returns the new state.
    pub fn toggle(&mut self, now: f64) -> bool {
        if self.enabled() {
            self.disable();
        } else {
            self.enable(now);
        }
        self.enabled()
    }

    /// Returns true at most once per call when a cycle is due at `now`.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let mut next = due + self.interval_sec;
                if next <= now {
                    // Skip cycles missed while the page was hidden.
                    next = now + self.interval_sec;
                }
                self.next_due = Some(next);
                true
            }
            _ => false,
        }
    }
}
