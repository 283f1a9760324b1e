// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - Fleet Seed Data

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::health::{HEALTH_MAX, HEALTH_MIN};
use crate::types::{
    ActivityCategory, ActivityItem, Alert, AlertKind, Asset, FleetStats, GeoPoint, Mission,
    MissionStatus, Priority,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Seed validation failures. Caught at construction so duplicate
/// identifiers can never become latent runtime bugs.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("duplicate mission id: {0}")]
    DuplicateMissionId(String),

    #[error("duplicate asset id: {0}")]
    DuplicateAssetId(String),

    #[error("mission {id}: progress {value} outside [0, 100]")]
    ProgressOutOfRange { id: String, value: f64 },

    #[error("mission {id}: battery {value} outside [0, 100]")]
    BatteryOutOfRange { id: String, value: f64 },

    #[error("system health {0} outside [95, 99]")]
    HealthOutOfRange(f64),
}

// ---------------------------------------------------------------------------
// FleetSeed
// ---------------------------------------------------------------------------

/// Initial dashboard state handed to the engine by the hosting view layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSeed {
    pub missions: Vec<Mission>,
    pub assets: Vec<Asset>,
    pub alerts: Vec<Alert>,
    pub feed: Vec<ActivityItem>,
    pub stats: FleetStats,
}

impl FleetSeed {
    /// Validate identifier uniqueness and value ranges.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut mission_ids = HashSet::new();
        for m in &self.missions {
            if !mission_ids.insert(m.id.as_str()) {
                return Err(SeedError::DuplicateMissionId(m.id.clone()));
            }
            if !(0.0..=100.0).contains(&m.progress) {
                return Err(SeedError::ProgressOutOfRange {
                    id: m.id.clone(),
                    value: m.progress,
                });
            }
            if !(0.0..=100.0).contains(&m.battery) {
                return Err(SeedError::BatteryOutOfRange {
                    id: m.id.clone(),
                    value: m.battery,
                });
            }
        }

        let mut asset_ids = HashSet::new();
        for a in &self.assets {
            if !asset_ids.insert(a.id.as_str()) {
                return Err(SeedError::DuplicateAssetId(a.id.clone()));
            }
        }

        if !(HEALTH_MIN..=HEALTH_MAX).contains(&self.stats.system_health) {
            return Err(SeedError::HealthOutOfRange(self.stats.system_health));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Default fleet
// ---------------------------------------------------------------------------

fn mission(
    id: &str,
    name: &str,
    status: MissionStatus,
    progress: f64,
    asset: &str,
    priority: Priority,
    eta: &str,
    lat: f64,
    lng: f64,
    altitude: f64,
    speed: f64,
    battery: f64,
) -> Mission {
    Mission {
        id: id.to_string(),
        name: name.to_string(),
        status,
        progress,
        asset: asset.to_string(),
        priority,
        eta: eta.to_string(),
        location: GeoPoint { lat, lng },
        altitude,
        speed,
        battery,
    }
}

fn asset(id: &str, kind: &str, status: MissionStatus, battery: f64, signal: f64, missions: u32) -> Asset {
    Asset {
        id: id.to_string(),
        kind: kind.to_string(),
        status,
        battery,
        signal,
        missions,
    }
}

/// The stock demo fleet: five missions over Lagos, six UAV assets, three
/// standing alerts and a primed activity feed.
pub fn default_fleet() -> FleetSeed {
    use MissionStatus::*;
    use Priority::*;

    FleetSeed {
        missions: vec![
            mission("M-001", "Phoenix Recon", Active, 67.0, "UAV-7", High, "12m",
                6.5244, 3.3792, 120.0, 45.0, 67.0),
            mission("M-002", "Atlas Survey", Active, 34.0, "UAV-3", Medium, "28m",
                6.4698, 3.5852, 95.0, 38.0, 82.0),
            mission("M-003", "Titan Delivery", Completed, 100.0, "UAV-12", Low, "0m",
                6.6018, 3.3515, 0.0, 0.0, 34.0),
            mission("M-004", "Orion Patrol", Standby, 0.0, "UAV-5", Medium, "45m",
                6.4333, 3.4167, 0.0, 0.0, 100.0),
            mission("M-005", "Hermes Express", Active, 89.0, "UAV-9", High, "6m",
                6.5355, 3.3087, 110.0, 52.0, 45.0),
        ],
        assets: vec![
            asset("UAV-7", "Reconnaissance", Active, 67.0, 95.0, 127),
            asset("UAV-3", "Survey", Active, 82.0, 88.0, 98),
            asset("UAV-12", "Delivery", Charging, 34.0, 100.0, 203),
            asset("UAV-5", "Patrol", Standby, 100.0, 100.0, 156),
            asset("UAV-9", "Express", Active, 45.0, 92.0, 87),
            asset("UAV-14", "Cargo", Maintenance, 0.0, 0.0, 234),
        ],
        alerts: vec![
            Alert {
                id: 1,
                kind: AlertKind::Warning,
                message: "Low battery detected on UAV-7".to_string(),
                time: "2m ago".to_string(),
                severity: Medium,
            },
            Alert {
                id: 2,
                kind: AlertKind::Critical,
                message: "Weather alert in Zone B".to_string(),
                time: "5m ago".to_string(),
                severity: High,
            },
            Alert {
                id: 3,
                kind: AlertKind::Info,
                message: "Mission M-003 completed successfully".to_string(),
                time: "8m ago".to_string(),
                severity: Low,
            },
        ],
        feed: vec![
            ActivityItem {
                id: 1,
                event: "Mission M-001 entered Zone A".to_string(),
                time: "1m ago".to_string(),
                category: ActivityCategory::Mission,
            },
            ActivityItem {
                id: 2,
                event: "UAV-7 battery at 70%".to_string(),
                time: "3m ago".to_string(),
                category: ActivityCategory::Asset,
            },
            ActivityItem {
                id: 3,
                event: "New mission M-005 initiated".to_string(),
                time: "7m ago".to_string(),
                category: ActivityCategory::Mission,
            },
            ActivityItem {
                id: 4,
                event: "System health check completed".to_string(),
                time: "10m ago".to_string(),
                category: ActivityCategory::System,
            },
        ],
        stats: FleetStats {
            active_missions: 3,
            total_assets: 24,
            system_health: 97.0,
            success_rate: 94.2,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fleet_validates() {
        default_fleet().validate().expect("stock seed must be valid");
    }

    #[test]
    fn test_default_fleet_shape() {
        let seed = default_fleet();
        assert_eq!(seed.missions.len(), 5);
        assert_eq!(seed.assets.len(), 6);
        assert_eq!(seed.alerts.len(), 3);
        assert_eq!(seed.feed.len(), 4);
        let active = seed
            .missions
            .iter()
            .filter(|m| m.status == MissionStatus::Active)
            .count();
        assert_eq!(active as u32, seed.stats.active_missions);
    }

    #[test]
    fn test_duplicate_mission_id_rejected() {
        let mut seed = default_fleet();
        seed.missions[1].id = "M-001".to_string();
        assert!(matches!(
            seed.validate(),
            Err(SeedError::DuplicateMissionId(id)) if id == "M-001"
        ));
    }

    #[test]
    fn test_duplicate_asset_id_rejected() {
        let mut seed = default_fleet();
        seed.assets[0].id = "UAV-14".to_string();
        assert!(matches!(seed.validate(), Err(SeedError::DuplicateAssetId(_))));
    }

    #[test]
    fn test_out_of_range_progress_rejected() {
        let mut seed = default_fleet();
        seed.missions[0].progress = 100.5;
        assert!(matches!(
            seed.validate(),
            Err(SeedError::ProgressOutOfRange { .. })
        ));
    }

    #[test]
    fn test_out_of_range_health_rejected() {
        let mut seed = default_fleet();
        seed.stats.system_health = 90.0;
        assert!(matches!(seed.validate(), Err(SeedError::HealthOutOfRange(_))));
    }

    #[test]
    fn test_seed_serde_roundtrip() {
        let seed = default_fleet();
        let json = serde_json::to_string(&seed).unwrap();
        let back: FleetSeed = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back.missions.len(), seed.missions.len());
        assert_eq!(back.stats.total_assets, seed.stats.total_assets);
    }
}
