// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - Activity Feed

use serde::{Deserialize, Serialize};

use crate::rng::UnitSource;
use crate::types::{ActivityCategory, ActivityItem};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Retained entries: the newest entry plus at most nine prior ones.
pub const FEED_CAPACITY: usize = 10;

/// A tick synthesizes an entry only when the gate draw exceeds this
/// threshold, i.e. with probability 0.3.
pub const GENERATION_GATE: f64 = 0.7;

/// Relative-time label for entries created this instant, distinct from
/// the aged labels carried by seed entries.
pub const FRESH_TIME_LABEL: &str = "Just now";

/// Telemetry-style phrase vocabulary, chosen uniformly.
pub const EVENT_PHRASES: [&str; 4] = [
    "Telemetry update received",
    "Route optimized",
    "Weather sync",
    "Position updated",
];

const CATEGORIES: [ActivityCategory; 3] = [
    ActivityCategory::Mission,
    ActivityCategory::Asset,
    ActivityCategory::System,
];

// ---------------------------------------------------------------------------
// ActivityFeed - bounded newest-first event log
// ---------------------------------------------------------------------------

/// Ordered activity log, newest first, truncated to [`FEED_CAPACITY`].
///
/// Entry ids are creation-time milliseconds; a monotonic guard keeps them
/// unique even if two entries are created within the same millisecond.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFeed {
    entries: Vec<ActivityItem>,
    last_id: u64,
}

impl ActivityFeed {
    /// Build from seed entries (already newest first). Seed ids count
    /// toward the uniqueness guard so generated ids never collide.
    pub fn new(seed_entries: Vec<ActivityItem>) -> Self {
        let last_id = seed_entries.iter().map(|e| e.id).max().unwrap_or(0);
        let mut entries = seed_entries;
        entries.truncate(FEED_CAPACITY);
        Self { entries, last_id }
    }

    pub fn entries(&self) -> &[ActivityItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One tick of the generator.
    ///
    /// Draw order: gate first; only when it exceeds [`GENERATION_GATE`]
    /// are the phrase and category draws consumed. Returns `true` when an
    /// entry was prepended. The feed is then truncated to the new entry
    /// plus the nine most recent prior entries.
    pub fn maybe_generate(&mut self, now_ms: u64, src: &mut dyn UnitSource) -> bool {
        if src.next_unit() <= GENERATION_GATE {
            return false;
        }

        let phrase = EVENT_PHRASES[src.next_index(EVENT_PHRASES.len())];
        let category = CATEGORIES[src.next_index(CATEGORIES.len())];
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;

        self.entries.insert(
            0,
            ActivityItem {
                id,
                event: phrase.to_string(),
                time: FRESH_TIME_LABEL.to_string(),
                category,
            },
        );
        self.entries.truncate(FEED_CAPACITY);
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
