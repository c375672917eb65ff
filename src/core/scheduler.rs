//! Explicit schedulers for the host loop.
//!
//! The loop owns one `FrameScheduler` and one `SpawnTimer` and polls both
//! every iteration. Neither re-arms itself recursively: a frame is re-armed
//! by `poll`, the spawn timer only when the host calls `arm` again.

use std::time::{Duration, Instant};

/// Delivers at most one frame per interval, like a display refresh callback.
///
/// Missed frames are dropped rather than replayed, so a stalled host never
/// runs a burst of catch-up physics ticks.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    next_frame: Option<Instant>,
    frames_delivered: u64,
}

impl FrameScheduler {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            next_frame: None,
            frames_delivered: 0,
        }
    }

    /// Arm the next frame one interval after `now`. No-op if already armed.
    pub fn request(&mut self, now: Instant) {
        if self.next_frame.is_none() {
            self.next_frame = Some(now + self.interval);
        }
    }

    /// Release the pending frame request. Subsequent polls deliver nothing
    /// until `request` is called again.
    pub fn cancel(&mut self) {
        self.next_frame = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_frame.is_some()
    }

    /// Returns true if a frame is due at `now`, re-arming for the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_frame else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            // Fell behind by more than one frame; skip the missed ones.
            next = now + self.interval;
        }
        self.next_frame = Some(next);
        self.frames_delivered += 1;
        true
    }

    /// Time left until the next frame, if one is armed.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_frame
            .map(|due| due.saturating_duration_since(now))
    }

    pub fn frames_delivered(&self) -> u64 {
        self.frames_delivered
    }
}

/// One-shot interval timer for obstacle spawning.
///
/// `poll` fires once and disarms. Whether to re-arm is decided by the caller
/// at fire time, so a firing that lands after game over can simply be dropped.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl SpawnTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            deadline: None,
        }
    }

    /// Schedule the next firing one interval after `now`, replacing any
    /// pending one.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
