//! Frame delta timer

use std::time::Instant;

/// Source of the current time in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Seconds since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[derive(Debug, Clone)]
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    previous: f64,
}

impl Timer<SystemClock> {
    pub fn new() -> Self {
        Timer::with_clock(SystemClock::default())
    }
}

impl Default for Timer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timer<C> {
    /// Starts timing from the clock's current time.
    pub fn with_clock(clock: C) -> Self {
        let previous = clock.now();
        Timer { clock, previous }
    }

    pub fn reset(&mut self) {
        self.previous = self.clock.now();
    }

    /// Seconds since the previous call (or the last reset)
    pub fn delta_time(&mut self) -> f32 {
        let now = self.clock.now();
        let delta = (now - self.previous) as f32;
        self.previous = now;
        delta
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
