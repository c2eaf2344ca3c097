//! One-shot reset timer with cancel-and-reschedule semantics.
//!
//! Each [`ResetTimer::arm`] supersedes the previous deadline and hands out a
//! new, strictly increasing [`TimerToken`]. A fire request carrying an older
//! token is ignored, so a scheduler that cannot cancel its sleeps can still
//! drive the timer safely.

use std::time::{Duration, Instant};

/// Identifies one arming of a [`ResetTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    token: TimerToken,
    deadline: Instant,
}

#[derive(Debug, Default, Clone)]
pub struct ResetTimer {
    last_token: u64,
    pending: Option<Pending>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a fire at `now + delay`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> TimerToken {
        self.last_token += 1;
        let token = TimerToken(self.last_token);
        self.pending = Some(Pending {
            token,
            deadline: now + delay,
        });
        tracing::debug!("Armed reset timer {:?} for {:?}", token, delay);
        token
    }

    /// Drop the pending fire, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Time left until the pending fire, zero if already due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fire if the deadline has passed. Returns true exactly once per arming.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                tracing::debug!("Reset timer {:?} fired", p.token);
                true
            }
            _ => false,
        }
    }

    /// Fire the arming identified by `token`, regardless of the clock.
    /// Stale tokens are ignored.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                true
            }
            _ => {
                tracing::trace!("Ignoring stale reset timer {:?}", token);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn test_poll_before_and_after_deadline() {
        let t0 = Instant::now();
        let mut timer = ResetTimer::new();
        timer.arm(t0, DELAY);

        assert!(!timer.poll(t0 + Duration::from_millis(1999)));
        assert!(timer.poll(t0 + DELAY));
        // Only once.
        assert!(!timer.poll(t0 + DELAY * 2));
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_rearm_supersedes() {
        let t0 = Instant::now();
        let mut timer = ResetTimer::new();
        let first = timer.arm(t0, DELAY);
        let second = timer.arm(t0 + Duration::from_millis(1500), DELAY);

        assert!(second > first);
        assert!(!timer.poll(t0 + Duration::from_millis(2500)));
        assert!(!timer.fire(first));
        assert!(timer.fire(second));
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timer = ResetTimer::new();
        let token = timer.arm(t0, DELAY);
        timer.cancel();
        assert!(!timer.poll(t0 + DELAY));
        assert!(!timer.fire(token));
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_remaining_saturates() {
        let t0 = Instant::now();
        let mut timer = ResetTimer::new();
        assert_eq!(timer.remaining(t0), None);
        timer.arm(t0, DELAY);
        assert_eq!(timer.remaining(t0), Some(DELAY));
        assert_eq!(timer.remaining(t0 + DELAY * 3), Some(Duration::ZERO));
    }
}
