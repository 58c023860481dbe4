//! Table-formatted output for CLI.

use chrono::NaiveDateTime;
use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use gps14_core::normalize::classify_event;
use gps14_core::storage::{Preferences, Session};
use gps14_core::{
    AccountOverview, Event, EventSeverity, RawResponse, RouteSummary, Vehicle, VehicleLocation,
    VehicleStatus,
};

use super::OutputFormatter;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn status_cell(status: VehicleStatus) -> Cell {
        let cell = Cell::new(status.display_name());
        match status {
            VehicleStatus::Moving => cell.fg(Color::Green),
            VehicleStatus::Stopped => cell.fg(Color::Yellow),
            VehicleStatus::NoData => cell.fg(Color::DarkGrey),
        }
    }

    fn severity_cell(severity: EventSeverity) -> Cell {
        let cell = Cell::new(severity.as_str());
        match severity {
            EventSeverity::Critical => cell.fg(Color::Red),
            EventSeverity::Warning => cell.fg(Color::Yellow),
            EventSeverity::Info => cell,
        }
    }

    fn time(ts: Option<&NaiveDateTime>) -> String {
        ts.map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    fn position(lat: f64, lng: f64) -> String {
        format!("{:.5}, {:.5}", lat, lng)
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_vehicles(&self, vehicles: &[Vehicle]) -> String {
        if vehicles.is_empty() {
            return "No vehicles found.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Name", "IMEI", "Status", "Speed", "Position", "Last Update"]);

        for vehicle in vehicles {
            let loc = vehicle.location.as_ref();
            table.add_row(vec![
                Cell::new(&vehicle.name),
                Cell::new(&vehicle.imei),
                Self::status_cell(vehicle.status),
                Cell::new(
                    loc.map(|l| format!("{:.0} km/h", l.speed))
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::new(
                    loc.map(|l| Self::position(l.lat, l.lng))
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::new(Self::time(loc.and_then(|l| l.dt_tracker.as_ref()))),
            ]);
        }

        let moving = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Moving)
            .count();

        format!(
            "{}\n\n{} vehicle(s), {} moving",
            table,
            vehicles.len(),
            moving.to_string().green()
        )
    }

    fn format_locations(&self, locations: &[VehicleLocation]) -> String {
        if locations.is_empty() {
            return "No locations found.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "Name", "IMEI", "Position", "Speed", "Angle", "Altitude", "Tracker Time",
        ]);

        for loc in locations {
            table.add_row(vec![
                Cell::new(&loc.name),
                Cell::new(&loc.imei),
                Cell::new(Self::position(loc.lat, loc.lng)),
                Cell::new(format!("{:.0} km/h", loc.speed)),
                Cell::new(format!("{:.0}°", loc.angle)),
                Cell::new(format!("{:.0} m", loc.altitude)),
                Cell::new(Self::time(loc.dt_tracker.as_ref())),
            ]);
        }

        format!("{}\n\n{} location(s)", table, locations.len())
    }

    fn format_events(&self, events: &[Event]) -> String {
        if events.is_empty() {
            return "No events in this period.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Time", "Vehicle", "Event", "Category", "Severity", "Message"]);

        for event in events {
            let (category, severity) = classify_event(&event.event_type);
            table.add_row(vec![
                Cell::new(Self::time(Some(&event.timestamp))),
                Cell::new(&event.name),
                Cell::new(&event.event_type),
                Cell::new(category.as_str()),
                Self::severity_cell(severity),
                Cell::new(event.message.as_deref().unwrap_or("")),
            ]);
        }

        format!("{}\n\n{} event(s)", table, events.len())
    }

    fn format_route(&self, imei: &str, route: &RouteSummary, with_points: bool) -> String {
        if route.is_empty() {
            return format!("No route data for {}.", imei);
        }

        let mut lines = vec![
            format!("Route: {}", imei.bold()),
            format!("  Points:    {}", route.points.len()),
            format!("  Distance:  {:.2} km", route.total_distance_km),
            format!("  Max speed: {:.0} km/h", route.max_speed),
            format!("  Avg speed: {:.1} km/h", route.avg_speed),
            format!("  Duration:  {:.0} min", route.duration_minutes),
        ];

        if with_points {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Time", "Position", "Speed"]);

            for point in &route.points {
                table.add_row(vec![
                    Cell::new(Self::time(point.timestamp.as_ref())),
                    Cell::new(Self::position(point.lat, point.lng)),
                    Cell::new(format!("{:.0} km/h", point.speed)),
                ]);
            }

            lines.push(String::new());
            lines.push(table.to_string());
        }

        lines.join("\n")
    }

    fn format_address(&self, lat: f64, lng: f64, address: Option<&str>) -> String {
        match address {
            Some(address) => address.to_string(),
            None => format!("No address found for {}", Self::position(lat, lng)).dimmed().to_string(),
        }
    }

    fn format_overview(&self, overview: &AccountOverview) -> String {
        let mut table = Table::new();
        table.set_header(vec!["Zones", "Markers", "Routes"]);
        table.add_row(vec![
            Cell::new(overview.zones),
            Cell::new(overview.markers),
            Cell::new(overview.routes),
        ]);
        table.to_string()
    }

    fn format_session(&self, session: Option<&Session>) -> String {
        match session {
            Some(Session {
                username: Some(username),
                ..
            }) => format!("Logged in as {}", username.bold()),
            Some(_) => "Logged in".to_string(),
            None => "Not logged in".yellow().to_string(),
        }
    }

    fn format_preferences(&self, prefs: &Preferences) -> String {
        let state = if prefs.notifications_enabled {
            "on".green()
        } else {
            "off".red()
        };
        format!("Notifications: {}", state)
    }

    fn format_command_result(&self, _command: &str, result: &RawResponse) -> String {
        match result.as_str() {
            Some(text) => text.to_string(),
            None => result.to_pretty_string(),
        }
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}
