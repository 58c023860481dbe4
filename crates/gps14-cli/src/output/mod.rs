//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use gps14_core::storage::{Preferences, Session};
use gps14_core::{AccountOverview, Event, RawResponse, RouteSummary, Vehicle, VehicleLocation};

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the vehicle list
    fn format_vehicles(&self, vehicles: &[Vehicle]) -> String;

    /// Format latest locations
    fn format_locations(&self, locations: &[VehicleLocation]) -> String;

    /// Format events with their category and severity
    fn format_events(&self, events: &[Event]) -> String;

    /// Format a route summary, optionally with every point
    fn format_route(&self, imei: &str, route: &RouteSummary, with_points: bool) -> String;

    /// Format a reverse geocoding result
    fn format_address(&self, lat: f64, lng: f64, address: Option<&str>) -> String;

    /// Format account collection counts
    fn format_overview(&self, overview: &AccountOverview) -> String;

    /// Format the saved session without revealing the key
    fn format_session(&self, session: Option<&Session>) -> String;

    /// Format user preferences
    fn format_preferences(&self, prefs: &Preferences) -> String;

    /// Format a raw command result
    fn format_command_result(&self, command: &str, result: &RawResponse) -> String;

    /// Format a generic message
    fn format_message(&self, message: &str) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
