//! Millisecond timers for the cooperative event loop.
//!
//! Nothing here reads a real clock. Callers pass the current time in
//! milliseconds since startup, which lets tests drive every animation with
//! virtual time.

/// A single pending deadline. Scheduling replaces whatever was pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<u64>,
}

impl Timer {
    /// A timer with nothing scheduled.
    pub const fn idle() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay_ms` after `from_ms`.
    pub fn schedule(&mut self, from_ms: u64, delay_ms: u64) {
        self.deadline = Some(from_ms.saturating_add(delay_ms));
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Consume the deadline if it has passed and return it.
    ///
    /// The timer is idle afterwards. Re-arming from the returned deadline
    /// rather than from `now` keeps catch-up after a stall identical to
    /// running on time.
    pub fn fire(&mut self, now_ms: u64) -> Option<u64> {
        match self.deadline {
            Some(deadline) if deadline <= now_ms => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}

/// A repeating fixed-rate frame clock.
///
/// Stands in for the display refresh callback: the owner asks how many frames
/// are due and advances its animation that many times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    interval_ms: u64,
    next_frame: Option<u64>,
}

impl FrameClock {
    /// Upper bound on frames reported by a single [`FrameClock::due_frames`] call.
    pub const MAX_CATCH_UP: u32 = 4;

    /// Create a stopped clock ticking at `fps` frames per second.
    pub fn new(fps: u32) -> Self {
        let interval_ms = (1000 / u64::from(fps.max(1))).max(1);
        Self {
            interval_ms,
            next_frame: None,
        }
    }

    /// Start ticking. The first frame is due immediately.
    pub fn start(&mut self, now_ms: u64) {
        self.next_frame = Some(now_ms);
    }

    /// Stop ticking. No frames are due until the clock is started again.
    pub fn stop(&mut self) {
        self.next_frame = None;
    }

    /// Milliseconds until the next frame, zero if one is due.
    pub fn until_next(&self, now_ms: u64) -> Option<u64> {
        self.next_frame.map(|next| next.saturating_sub(now_ms))
    }

    /// Number of frames due at `now_ms`, capped at [`Self::MAX_CATCH_UP`].
    ///
    /// Frames skipped past the cap are dropped, not queued.
    pub fn due_frames(&mut self, now_ms: u64) -> u32 {
        let Some(next) = self.next_frame else {
            return 0;
        };
        if now_ms < next {
            return 0;
        }
        let behind = (now_ms - next) / self.interval_ms + 1;
        self.next_frame = Some(next + behind * self.interval_ms);
        behind.min(u64::from(Self::MAX_CATCH_UP)) as u32
    }
}
