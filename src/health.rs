// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - System Health Drift

use crate::rng::UnitSource;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Hard lower clamp for the aggregate health metric.
pub const HEALTH_MIN: f64 = 95.0;

/// Hard upper clamp for the aggregate health metric.
pub const HEALTH_MAX: f64 = 99.0;

/// Width of the symmetric per-tick perturbation: W ~ uniform [-0.25, 0.25).
pub const HEALTH_STEP_SPAN: f64 = 0.5;

// ---------------------------------------------------------------------------
// Drift
// ---------------------------------------------------------------------------

/// One tick of the system-health random walk.
///
/// `health' = clamp(health + W, 95, 99)` with `W` uniform in
/// `[-0.25, 0.25)`. Applied every tick regardless of mission activity;
/// the walk has no mean reversion beyond the hard clamp, which is
/// intentional.
pub fn drift_health(health: f64, src: &mut dyn UnitSource) -> f64 {
    let w = (src.next_unit() - 0.5) * HEALTH_STEP_SPAN;
    (health + w).clamp(HEALTH_MIN, HEALTH_MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
