use std::time::Duration;

/// TickGate throttles generation advances to a fixed cadence,
/// independent of how often the loop polls.
/// Times are seconds from a monotonic clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickGate {
    start: f64,
    duration: f64,
}

impl TickGate {
    /// Start a gate at `now`
    pub const fn started(duration: f64, now: f64) -> Self {
        Self { start: now, duration }
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Seconds since the gate was (re)started
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.start
    }

    /// True once at least `duration` has passed
    pub fn is_done(&self, now: f64) -> bool {
        self.elapsed(now) >= self.duration
    }

    /// New start time, same duration
    pub fn restart(&mut self, now: f64) {
        self.start = now;
    }
}

/// FramePacer caps the loop at a poll rate. Frame length is measured
/// between consecutive `mark` calls, so time spent blocked in the
/// platform's frame swap counts towards the budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePacer {
    budget: f64,
    last: f64,
}

impl FramePacer {
    pub fn new(poll_rate_hz: f64, now: f64) -> Self {
        Self { budget: 1.0 / poll_rate_hz, last: now }
    }

    /// How long to sleep before the next frame, if the last one ran short
    pub fn wait_time(&self, now: f64) -> Option<Duration> {
        let remaining = self.budget - (now - self.last);
        (remaining > 0.0).then(|| Duration::from_secs_f64(remaining))
    }

    /// Record the start of a new frame
    pub fn mark(&mut self, now: f64) {
        self.last = now;
    }
}
