//! JSON-formatted output for CLI.

use serde::Serialize;
use serde_json::{json, Value};

use gps14_core::normalize::classify_event;
use gps14_core::storage::{Preferences, Session};
use gps14_core::{AccountOverview, Event, RawResponse, RouteSummary, Vehicle, VehicleLocation};

use super::OutputFormatter;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_vehicles(&self, vehicles: &[Vehicle]) -> String {
        Self::to_json(&json!({
            "vehicles": vehicles,
            "count": vehicles.len()
        }))
    }

    fn format_locations(&self, locations: &[VehicleLocation]) -> String {
        Self::to_json(&json!({
            "locations": locations,
            "count": locations.len()
        }))
    }

    fn format_events(&self, events: &[Event]) -> String {
        let items: Vec<Value> = events
            .iter()
            .map(|event| {
                let (category, severity) = classify_event(&event.event_type);
                let mut value = serde_json::to_value(event).unwrap_or(json!({}));
                if let Value::Object(ref mut map) = value {
                    map.insert("category".to_string(), json!(category.as_str()));
                    map.insert("severity".to_string(), json!(severity.as_str()));
                }
                value
            })
            .collect();

        Self::to_json(&json!({
            "events": items,
            "count": events.len()
        }))
    }

    fn format_route(&self, imei: &str, route: &RouteSummary, with_points: bool) -> String {
        let mut output = json!({
            "imei": imei,
            "pointCount": route.points.len(),
            "totalDistanceKm": route.total_distance_km,
            "maxSpeed": route.max_speed,
            "avgSpeed": route.avg_speed,
            "durationMinutes": route.duration_minutes,
        });

        if with_points {
            if let Value::Object(ref mut map) = output {
                map.insert("points".to_string(), json!(route.points));
            }
        }

        Self::to_json(&output)
    }

    fn format_address(&self, lat: f64, lng: f64, address: Option<&str>) -> String {
        Self::to_json(&json!({
            "lat": lat,
            "lng": lng,
            "address": address
        }))
    }

    fn format_overview(&self, overview: &AccountOverview) -> String {
        Self::to_json(overview)
    }

    fn format_session(&self, session: Option<&Session>) -> String {
        Self::to_json(&json!({
            "loggedIn": session.is_some(),
            "username": session.and_then(|s| s.username.as_deref())
        }))
    }

    fn format_preferences(&self, prefs: &Preferences) -> String {
        Self::to_json(prefs)
    }

    fn format_command_result(&self, command: &str, result: &RawResponse) -> String {
        Self::to_json(&json!({
            "command": command,
            "result": result.clone().into_value()
        }))
    }

    fn format_message(&self, message: &str) -> String {
        Self::to_json(&json!({ "message": message }))
    }
}
