//! A single scheduled callback slot.
//!
//! A game owns exactly one [`OneShotTimer`]. Scheduling replaces whatever was
//! pending and hands out a fresh [`TimerId`]; only the id of the currently
//! pending deadline can ever fire, so a callback delivered for a cancelled
//! or superseded deadline is a no-op.

use std::fmt;
use std::time::Duration;

/// Identifies one scheduled deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: TimerId,
    deadline: Duration,
}

/// Schedule-once-with-cancel primitive.
#[derive(Debug, Default)]
pub struct OneShotTimer {
    next_id: u64,
    pending: Option<Pending>,
}

impl OneShotTimer {
    /// Create a timer with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a deadline, replacing any pending one.
    pub fn schedule(&mut self, deadline: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending = Some(Pending { id, deadline });
        id
    }

    /// Cancel the pending deadline, if any. Returns its id.
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.pending.take().map(|p| p.id)
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The id of the pending deadline.
    pub fn current(&self) -> Option<TimerId> {
        self.pending.map(|p| p.id)
    }

    /// When the pending deadline is due.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.deadline)
    }

    /// Take the pending deadline if it is due at `now`.
    pub fn take_expired(&mut self, now: Duration) -> Option<(TimerId, Duration)> {
        match self.pending {
            Some(p) if p.deadline <= now => {
                self.pending = None;
                Some((p.id, p.deadline))
            }
            _ => None,
        }
    }

    /// Fire the pending deadline by id, as an external scheduler would.
    ///
    /// Returns the deadline if `id` is still current, `None` if stale.
    pub fn fire(&mut self, id: TimerId) -> Option<Duration> {
        match self.pending {
            Some(p) if p.id == id => {
                self.pending = None;
                Some(p.deadline)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn nothing_pending_initially() {
        let mut timer = OneShotTimer::new();
        assert!(!timer.is_pending());
        assert!(timer.take_expired(SEC * 100).is_none());
    }

    #[test]
    fn expires_only_when_due() {
        let mut timer = OneShotTimer::new();
        let id = timer.schedule(SEC * 2);
        assert!(timer.take_expired(SEC).is_none());
        assert_eq!(timer.take_expired(SEC * 2), Some((id, SEC * 2)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn reschedule_supersedes_previous() {
        let mut timer = OneShotTimer::new();
        let first = timer.schedule(SEC);
        let second = timer.schedule(SEC * 5);
        assert_ne!(first, second);
        assert_eq!(timer.fire(first), None);
        assert_eq!(timer.current(), Some(second));
    }

    #[test]
    fn cancelled_id_cannot_fire() {
        let mut timer = OneShotTimer::new();
        let id = timer.schedule(SEC);
        assert_eq!(timer.cancel(), Some(id));
        assert_eq!(timer.fire(id), None);
        assert!(timer.take_expired(SEC * 10).is_none());
    }

    #[test]
    fn fire_current_returns_deadline_once() {
        let mut timer = OneShotTimer::new();
        let id = timer.schedule(SEC * 3);
        assert_eq!(timer.fire(id), Some(SEC * 3));
        assert_eq!(timer.fire(id), None);
    }
}
