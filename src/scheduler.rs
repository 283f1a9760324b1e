// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - Tick Scheduler

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fixed simulation tick period.
pub const TICK_PERIOD_MS: u64 = 3_000;

// ---------------------------------------------------------------------------
// TickScheduler
// ---------------------------------------------------------------------------

/// Fixed-period tick gate driven by a host-supplied clock.
///
/// The scheduler holds a single deadline; `mount` arms it, `unmount`
/// disarms it, and `poll(now)` reports whether a tick is due. Re-mounting
/// replaces the previous deadline outright, so a stale anchor can never
/// leak across dashboard lifetimes. When the host clock jumps past
/// several periods (a backgrounded tab, a paused host), exactly one tick
/// fires and the deadline re-anchors to `now`: missed ticks are dropped,
/// never replayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickScheduler {
    period_ms: u64,
    /// Next deadline in host-clock milliseconds; `None` while unmounted.
    next_due: Option<u64>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD_MS)
    }

    pub fn with_period(period_ms: u64) -> Self {
        Self { period_ms, next_due: None }
    }

    /// Arm the scheduler: the first tick falls one full period after
    /// `now_ms`, matching interval-timer semantics.
    pub fn mount(&mut self, now_ms: u64) {
        self.next_due = Some(now_ms + self.period_ms);
    }

    /// Disarm. A disarmed scheduler never fires; already-scheduled toast
    /// deadlines are not owned here and are unaffected.
    pub fn unmount(&mut self) {
        self.next_due = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Returns `true` at most once per elapsed period. Firing re-anchors
    /// the deadline to `now_ms + period` (no catch-up).
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.next_due {
            Some(due) if now_ms >= due => {
                self.next_due = Some(now_ms + self.period_ms);
                true
            }
            _ => false,
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
