// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - Type Definitions

use serde::{Deserialize, Serialize};

// ─── Mission Status ──────────────────────────────────────────────────────────

/// Operational status of a mission. Also used for asset availability
/// (assets never report `Completed`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Active,
    Completed,
    Standby,
    Charging,
    Maintenance,
}

impl MissionStatus {
    /// Simulation only touches missions that are active and incomplete.
    pub fn is_simulated(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Standby => "standby",
            Self::Charging => "charging",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "standby" => Some(Self::Standby),
            "charging" => Some(Self::Charging),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

// ─── Priority ────────────────────────────────────────────────────────────────

/// Shared three-level scale: mission priority and alert severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

// ─── Geographic position ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

// ─── Mission ─────────────────────────────────────────────────────────────────

/// One fleet mission. `progress` and `battery` are the only simulated
/// fields; everything else is display state owned by the seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub name: String,
    pub status: MissionStatus,
    /// Completion percentage, 0..=100. Non-decreasing while active.
    pub progress: f64,
    /// Identifier of the assigned asset (e.g. "UAV-7").
    pub asset: String,
    pub priority: Priority,
    /// Estimated time to arrival, display string only.
    pub eta: String,
    pub location: GeoPoint,
    pub altitude: f64,
    pub speed: f64,
    /// Charge percentage. Floored at 20.0 while simulated.
    pub battery: f64,
}

// ─── Asset ───────────────────────────────────────────────────────────────────

/// A fleet asset. Static in this core: read by the filter/view layer,
/// never mutated by the tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub kind: String,
    pub status: MissionStatus,
    pub battery: f64,
    pub signal: f64,
    /// Cumulative completed mission count.
    pub missions: u32,
}

// ─── Alert ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Critical,
    Info,
}

/// Static operator alert. Not generated by the tick loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub message: String,
    /// Relative timestamp label, e.g. "2m ago".
    pub time: String,
    pub severity: Priority,
}

// ─── Activity feed ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Mission,
    Asset,
    System,
}

/// One entry in the newest-first activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Creation-time id in milliseconds, unique across ticks.
    pub id: u64,
    pub event: String,
    /// Relative-time label; freshly generated entries carry "Just now".
    pub time: String,
    pub category: ActivityCategory,
}

// ─── Fleet stats ─────────────────────────────────────────────────────────────

/// Aggregate dashboard counters. Only `system_health` drifts per tick;
/// the rest are seed values held for the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetStats {
    pub active_missions: u32,
    pub total_assets: u32,
    /// Bounded random walk, clamped to [95, 99].
    pub system_health: f64,
    pub success_rate: f64,
}

// ─── Toast ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Warning,
    Info,
}

/// Transient notification. Expiry deadline is tracked by the manager,
/// not carried on the toast itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    /// Creation-time id in milliseconds, unique within the active set.
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

// ─── TickReport ──────────────────────────────────────────────────────────────

/// Snapshot handed to the host after each tick. Read-only projection;
/// the engine retains ownership of the live state.
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub missions: Vec<Mission>,
    pub stats: FleetStats,
    pub feed: Vec<ActivityItem>,
    pub toasts: Vec<Toast>,
    /// Missions whose progress crossed 100 during this tick, in mission
    /// set order. Each id appears here exactly once over the engine's
    /// lifetime.
    pub completed_mission_ids: Vec<String>,
}
