//! Tick-driven timers.
//!
//! Nothing here owns a thread or a host timer handle: state is plain data polled with the
//! current time, so dropping the owner is all it takes to release a pending timer.

/// A single deadline that fires at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OneShot {
    deadline_ms: u64,
    fired: bool,
}

impl OneShot {
    pub fn new(now_ms: u64, delay_ms: u64) -> Self {
        Self {
            deadline_ms: now_ms.saturating_add(delay_ms),
            fired: false,
        }
    }

    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    pub fn is_pending(&self) -> bool {
        !self.fired
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.fired || now_ms < self.deadline_ms {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Fires once `delay_ms` have passed since the most recent trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    pending: Option<OneShot>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// (Re)arms the debounce; an earlier pending trigger is superseded.
    pub fn trigger(&mut self, now_ms: u64) {
        self.pending = Some(OneShot::new(now_ms, self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(timer) = self.pending.as_mut() else {
            return false;
        };
        if timer.poll(now_ms) {
            self.pending = None;
            return true;
        }
        false
    }
}

/// Lets at most one call through per `interval_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Returns `true` (and records `now_ms`) when a call may go through.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms.saturating_sub(last) < self.interval_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
