// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - Toast Notifications

use serde::{Deserialize, Serialize};

use crate::types::{Toast, ToastKind};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Every toast is removed this many milliseconds after enqueue,
/// regardless of user action.
pub const TOAST_TTL_MS: u64 = 5_000;

// ---------------------------------------------------------------------------
// ToastManager - exclusive owner of the active toast set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ToastEntry {
    toast: Toast,
    expires_at: u64,
}

/// Owns the active toast set and its expiry deadlines.
///
/// Toasts keep insertion order (oldest first). Deadlines are a sorted-by-
/// insertion list swept on every clock advance rather than independent
/// timers; the contract is only the 5-second upper bound and idempotent
/// dismissal, not the mechanism. No maximum queue length is enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToastManager {
    entries: Vec<ToastEntry>,
    last_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and schedule its removal at `now_ms + TOAST_TTL_MS`.
    ///
    /// The id is creation-time based; a monotonic guard keeps ids unique
    /// when several toasts are enqueued within the same millisecond.
    /// Returns the assigned id immediately.
    pub fn enqueue(&mut self, now_ms: u64, message: &str, kind: ToastKind) -> u64 {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.entries.push(ToastEntry {
            toast: Toast {
                id,
                message: message.to_string(),
                kind,
            },
            expires_at: now_ms + TOAST_TTL_MS,
        });
        id
    }

    /// Remove the toast with `id` if present. Unknown or already-removed
    /// ids are a no-op: a user may dismiss a toast that is about to
    /// auto-expire, and the race must not fault.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.toast.id != id);
    }

    /// Sweep deadlines: drop every toast whose expiry has been reached.
    /// Returns the number removed. Safe to call at any cadence, including
    /// after the hosting dashboard has been torn down.
    pub fn expire_due(&mut self, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| now_ms < e.expires_at);
        before - self.entries.len()
    }

    /// Active toasts, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.entries.iter().map(|e| e.toast.clone()).collect()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|e| e.toast.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
