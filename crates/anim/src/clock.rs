use std::time::Instant;

/// Source of elapsed seconds for the animation driver.
///
/// Implementations must be monotone and start at (or near) zero. Taking
/// `&mut self` lets deterministic clocks advance themselves per tick.
pub trait Clock {
    fn elapsed_secs(&mut self) -> f64;
}

/// Wall-clock time since construction. Created once at startup, never reset.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_secs(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Deterministic clock advancing by a fixed step per reading. Drives the
/// headless simulation and tests instead of real display timing.
#[derive(Debug)]
pub struct FixedStepClock {
    t: f64,
    step: f64,
}

impl FixedStepClock {
    pub fn new(step: f64) -> Self {
        Self { t: 0.0, step }
    }

    /// Current time without advancing.
    pub fn now(&self) -> f64 {
        self.t
    }
}

impl Clock for FixedStepClock {
    fn elapsed_secs(&mut self) -> f64 {
        self.t += self.step;
        self.t
    }
}
