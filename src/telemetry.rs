// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - Mission Telemetry

use crate::rng::UnitSource;
use crate::types::{Mission, MissionStatus};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound of the per-tick progress increment (percentage points).
pub const PROGRESS_STEP_MAX: f64 = 2.0;

/// Upper bound of the per-tick battery drain (percentage points).
pub const BATTERY_DRAIN_MAX: f64 = 0.5;

/// Battery is never simulated below this floor (seed values may be lower).
pub const BATTERY_FLOOR: f64 = 20.0;

/// Progress value at which a mission is complete.
pub const PROGRESS_COMPLETE: f64 = 100.0;

// ---------------------------------------------------------------------------
// Per-tick mission advance
// ---------------------------------------------------------------------------

/// Advance one tick of mission telemetry.
///
/// Pure function of the previous mission set plus fresh draws; it holds no
/// memory of prior ticks. Only missions that are `Active` with progress
/// below 100 are touched:
///
/// ```text
/// progress' = min(100, progress + U),  U ~ uniform [0, 2)
/// battery'  = max(20, battery - V),    V ~ uniform [0, 0.5)
/// ```
///
/// Draw order is fixed: per qualifying mission in set order, progress
/// first, then battery. Scripted sources rely on this.
///
/// Completion is edge-triggered: a mission whose progress crosses from
/// below 100 to 100 in this call has its status set to `Completed` and its
/// id appended to the returned list, exactly once over its lifetime. A
/// mission already at 100 no longer matches the predicate and can never
/// re-report.
pub fn advance_missions(
    missions: &[Mission],
    src: &mut dyn UnitSource,
) -> (Vec<Mission>, Vec<String>) {
    let mut next = Vec::with_capacity(missions.len());
    let mut completed = Vec::new();

    for m in missions {
        if !m.status.is_simulated() || m.progress >= PROGRESS_COMPLETE {
            next.push(m.clone());
            continue;
        }

        let step = src.next_scaled(PROGRESS_STEP_MAX);
        let new_progress = (m.progress + step).min(PROGRESS_COMPLETE);
        let drain = src.next_scaled(BATTERY_DRAIN_MAX);
        let new_battery = (m.battery - drain).max(BATTERY_FLOOR);

        let crossed = new_progress >= PROGRESS_COMPLETE;
        if crossed {
            completed.push(m.id.clone());
        }

        let mut updated = m.clone();
        updated.progress = new_progress;
        updated.battery = new_battery;
        if crossed {
            updated.status = MissionStatus::Completed;
        }
        next.push(updated);
    }

    (next, completed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ChaChaUnit, ScriptedUnit};
    use crate::types::{GeoPoint, Priority};

    fn mission(id: &str, status: MissionStatus, progress: f64, battery: f64) -> Mission {
        Mission {
            id: id.to_string(),
            name: format!("{} name", id),
            status,
            progress,
            asset: "UAV-1".to_string(),
            priority: Priority::Medium,
            eta: "10m".to_string(),
            location: GeoPoint { lat: 6.5, lng: 3.4 },
            altitude: 100.0,
            speed: 40.0,
            battery,
        }
    }

    #[test]
    fn test_progress_bounds_per_tick() {
        let missions = vec![mission("M-001", MissionStatus::Active, 40.0, 80.0)];
        let mut src = ChaChaUnit::seed_from_u64(1);
        let mut current = missions;
        for _ in 0..200 {
            let before = current[0].clone();
            let (next, _) = advance_missions(&current, &mut src);
            let after = &next[0];
            if before.status == MissionStatus::Active {
                assert!(after.progress >= before.progress);
                assert!(after.progress < before.progress + PROGRESS_STEP_MAX);
                assert!(after.progress <= PROGRESS_COMPLETE);
            }
            current = next;
        }
    }

    #[test]
    fn test_battery_bounds_per_tick() {
        let mut current = vec![mission("M-001", MissionStatus::Active, 0.0, 90.0)];
        let mut src = ChaChaUnit::seed_from_u64(2);
        for _ in 0..200 {
            let before = current[0].battery;
            let active = current[0].status == MissionStatus::Active;
            let (next, _) = advance_missions(&current, &mut src);
            if active {
                assert!(next[0].battery <= before);
                assert!(next[0].battery >= (before - BATTERY_DRAIN_MAX).max(BATTERY_FLOOR));
                assert!(next[0].battery >= BATTERY_FLOOR);
            }
            current = next;
        }
    }

    #[test]
    fn test_non_active_missions_pass_through_unchanged() {
        for status in [
            MissionStatus::Completed,
            MissionStatus::Standby,
            MissionStatus::Charging,
            MissionStatus::Maintenance,
        ] {
            let before = vec![mission("M-009", status, 50.0, 60.0)];
            // Any draw would change an active mission; none may be consumed here.
            let mut src = ScriptedUnit::constant(0.999);
            let (next, completed) = advance_missions(&before, &mut src);
            assert!(completed.is_empty());
            assert_eq!(next[0].progress, 50.0);
            assert_eq!(next[0].battery, 60.0);
            assert_eq!(next[0].status, status);
        }
    }

    #[test]
    fn test_completion_edge_trigger_scenario() {
        // progress=99 active, scripted U draw of 0.75 -> step 1.5 -> 100.5
        // clamps to 100 and completes. Battery draw 0.5 -> drain 0.25.
        let before = vec![mission("M-001", MissionStatus::Active, 99.0, 50.0)];
        let mut src = ScriptedUnit::new(vec![0.75, 0.5]);
        let (next, completed) = advance_missions(&before, &mut src);

        assert_eq!(completed, vec!["M-001".to_string()]);
        assert_eq!(next[0].progress, PROGRESS_COMPLETE);
        assert_eq!(next[0].status, MissionStatus::Completed);
        assert!((next[0].battery - 49.75).abs() < 1e-9);

        // A second tick must not re-report: the mission is now Completed.
        let (after, completed_again) = advance_missions(&next, &mut src);
        assert!(completed_again.is_empty());
        assert_eq!(after[0].progress, PROGRESS_COMPLETE);
        assert_eq!(after[0].status, MissionStatus::Completed);
    }

    #[test]
    fn test_exact_landing_on_100_still_completes_once() {
        // step draw 0.5 * 2.0 = 1.0 exactly closes the 99 -> 100 gap.
        let before = vec![mission("M-002", MissionStatus::Active, 99.0, 70.0)];
        let mut src = ScriptedUnit::new(vec![0.5, 0.0]);
        let (next, completed) = advance_missions(&before, &mut src);
        assert_eq!(completed.len(), 1);
        assert_eq!(next[0].progress, PROGRESS_COMPLETE);
    }

    #[test]
    fn test_battery_floor_holds() {
        let before = vec![mission("M-003", MissionStatus::Active, 10.0, 20.1)];
        let mut src = ScriptedUnit::new(vec![0.0, 0.999]);
        let (next, _) = advance_missions(&before, &mut src);
        assert_eq!(next[0].battery, BATTERY_FLOOR);
    }

    #[test]
    fn test_empty_mission_set_is_noop() {
        let mut src = ScriptedUnit::constant(0.9);
        let (next, completed) = advance_missions(&[], &mut src);
        assert!(next.is_empty());
        assert!(completed.is_empty());
    }

    #[test]
    fn test_multiple_completions_in_one_tick_keep_set_order() {
        let before = vec![
            mission("M-001", MissionStatus::Active, 99.5, 50.0),
            mission("M-002", MissionStatus::Standby, 0.0, 100.0),
            mission("M-003", MissionStatus::Active, 99.0, 40.0),
        ];
        // M-001: U=0.9 -> +1.8, V=0.1; M-002 skipped; M-003: U=0.9 -> +1.8, V=0.1
        let mut src = ScriptedUnit::new(vec![0.9, 0.1]);
        let (_, completed) = advance_missions(&before, &mut src);
        assert_eq!(completed, vec!["M-001".to_string(), "M-003".to_string()]);
    }
}
