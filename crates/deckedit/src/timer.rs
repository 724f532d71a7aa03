use std::time::{Duration, Instant};

/// Interval between automatic slide advances.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(5);

/// Repeating deadline for automatic slide advance.
///
/// The timer is polled from the frame loop rather than running on its own
/// thread, so there is at most one pending deadline at any time. Arming an
/// armed timer and disarming a disarmed one are both no-ops.
#[derive(Debug)]
pub struct AutoAdvance {
    period: Duration,
    deadline: Option<Instant>,
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(AUTO_ADVANCE_PERIOD)
    }
}

impl AutoAdvance {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.period);
        }
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Returns true at most once per call when the deadline has passed, and
    /// schedules the next deadline one full period from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next advance, if armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
