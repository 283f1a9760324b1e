// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - Mission Filter

use crate::types::{Mission, MissionStatus};

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Status selection for the mission list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(MissionStatus),
}

impl StatusFilter {
    /// Parse the view layer's selector string ("all" or a status name).
    /// Unknown strings fall back to `All` rather than hiding everything.
    pub fn parse(s: &str) -> Self {
        match MissionStatus::parse(s) {
            Some(status) => Self::Only(status),
            None => Self::All,
        }
    }

    fn matches(&self, status: MissionStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(want) => *want == status,
        }
    }
}

// ---------------------------------------------------------------------------
// filter_missions - pure projection
// ---------------------------------------------------------------------------

/// Project the mission set by text query and status filter.
///
/// A mission passes when its name or id contains `query`
/// case-insensitively (an empty query matches everything) and its status
/// satisfies the filter. Relative order is preserved; nothing is mutated,
/// so the view layer can call this on every keystroke.
pub fn filter_missions<'a>(
    missions: &'a [Mission],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a Mission> {
    let needle = query.to_lowercase();
    missions
        .iter()
        .filter(|m| {
            let matches_query = needle.is_empty()
                || m.name.to_lowercase().contains(&needle)
                || m.id.to_lowercase().contains(&needle);
            matches_query && status.matches(m.status)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
