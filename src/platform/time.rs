//! Time source and fixed-rate frame limiter

use std::time::{Duration, Instant};

/// Monotonic time plus blocking sleep
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `std::thread::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Clock that only moves when slept on. Records every sleep.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Instant,
    pub sleeps: Vec<Duration>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Instant::now(),
            sleeps: Vec::new(),
        }
    }
}

impl ManualClock {
    /// Move time forward without recording a sleep (simulates work)
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }

    pub fn total_slept(&self) -> Duration {
        self.sleeps.iter().sum()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.now += duration;
    }
}

/// Caps the loop at a fixed number of frames per second
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    last: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(rate: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / rate.max(1),
            last: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Sleep out the remainder of the current frame; returns the time
    /// elapsed since the previous call (sleep included).
    pub fn wait<C: Clock + ?Sized>(&mut self, clock: &mut C) -> Duration {
        let Some(last) = self.last else {
            self.last = Some(clock.now());
            return Duration::ZERO;
        };
        let busy = clock.now().saturating_duration_since(last);
        if busy < self.frame {
            clock.sleep(self.frame - busy);
        }
        let now = clock.now();
        self.last = Some(now);
        now.saturating_duration_since(last)
    }
}
