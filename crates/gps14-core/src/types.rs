//! Canonical records consumed by the rest of the application.
//!
//! These shapes never change when the server changes; new server quirks are
//! absorbed by the normalizer's alias lists instead.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Latest known position of a tracked vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLocation {
    pub imei: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// km/h, never negative
    pub speed: f64,
    /// Compass bearing in `[0, 360)`
    pub angle: f64,
    pub altitude: f64,
    pub dt_tracker: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt_server: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl VehicleLocation {
    pub fn is_moving(&self) -> bool {
        self.speed > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Synthesized, unique within one response batch
    pub id: String,
    pub imei: String,
    pub name: String,
    pub event_type: String,
    pub timestamp: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
    pub speed: f64,
    pub timestamp: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
}

/// Route points with aggregate statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub points: Vec<RoutePoint>,
    pub total_distance_km: f64,
    pub max_speed: f64,
    pub avg_speed: f64,
    pub duration_minutes: f64,
}

impl RouteSummary {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleStatus {
    Moving,
    Stopped,
    NoData,
}

impl VehicleStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleStatus::Moving => "Moving",
            VehicleStatus::Stopped => "Stopped",
            VehicleStatus::NoData => "No Data",
        }
    }
}

/// Tracked object joined with its latest location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub imei: String,
    pub name: String,
    pub status: VehicleStatus,
    pub location: Option<VehicleLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventCategory {
    Sos,
    Speed,
    Zone,
    Engine,
    Door,
    Battery,
    Info,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Sos => "sos",
            EventCategory::Speed => "speed",
            EventCategory::Zone => "zone",
            EventCategory::Engine => "engine",
            EventCategory::Door => "door",
            EventCategory::Battery => "battery",
            EventCategory::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventSeverity {
    Info,
    Warning,
    Critical,
}

impl EventSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSeverity::Info => "info",
            EventSeverity::Warning => "warning",
            EventSeverity::Critical => "critical",
        }
    }
}

/// Sizes of the account's auxiliary collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverview {
    pub zones: usize,
    pub markers: usize,
    pub routes: usize,
}
