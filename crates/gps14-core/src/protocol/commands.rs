//! Command string builders for the GPS-14 tracking protocol.
//!
//! Every operation goes through the same endpoint and is selected by the
//! `cmd` query parameter: a name followed by positional, comma-separated
//! arguments (`OBJECT_GET_ROUTE,<imei>,<from>,<to>,<sampling>`).

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Separator between the command name and its arguments.
pub const ARG_SEPARATOR: char = ',';

/// Date format expected by every date argument.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wildcard selecting all objects of the account.
pub const ALL_OBJECTS: &str = "*";

/// Default route sampling passed to `OBJECT_GET_ROUTE`.
pub const DEFAULT_ROUTE_SAMPLING: u32 = 1;

/// Format a date-time as a command argument.
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Name part of a command (everything before the first argument).
pub fn command_name(cmd: &str) -> &str {
    cmd.split(ARG_SEPARATOR).next().unwrap_or(cmd)
}

/// Check whether any argument would be split by the protocol.
///
/// The protocol has no escaping, so a comma inside an argument silently
/// shifts every following argument.
pub fn has_unsafe_argument(args: &[&str]) -> bool {
    args.iter().any(|a| a.contains(ARG_SEPARATOR))
}

/// Longest history window the front end asks for, in days.
pub const MAX_ROUTE_DAYS: u32 = 3650;

/// Closed date interval used by history commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl DateRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self { from, to }
    }

    /// From the start of `today - days` to the last second of `today`.
    pub fn last_days(days: u32, today: NaiveDate) -> Self {
        let start_day = today
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        let from = start_day.and_hms_opt(0, 0, 0).unwrap_or_default();
        let to = today.and_hms_opt(23, 59, 59).unwrap_or_default();
        Self { from, to }
    }

    /// Formatted `(from, to)` arguments.
    pub fn args(&self) -> (String, String) {
        (format_datetime(&self.from), format_datetime(&self.to))
    }
}

/// Time window for `OBJECT_GET_LAST_EVENTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventWindow {
    ThirtyMinutes,
    #[default]
    TwelveHours,
    SevenDays,
}

impl EventWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventWindow::ThirtyMinutes => "30m",
            EventWindow::TwelveHours => "12h",
            EventWindow::SevenDays => "7d",
        }
    }
}

/// Command builders for the tracking protocol
pub struct Commands;

impl Commands {
    // ==================== Objects ====================

    /// List the objects (vehicles) of the account
    pub fn user_get_objects() -> &'static str {
        "USER_GET_OBJECTS"
    }

    /// Latest location of one IMEI, or all with `*`
    pub fn object_get_locations(imeis: &str) -> String {
        format!("OBJECT_GET_LOCATIONS,{}", imeis)
    }

    /// Route history of one object
    pub fn object_get_route(imei: &str, range: &DateRange, sampling: u32) -> String {
        let (from, to) = range.args();
        format!("OBJECT_GET_ROUTE,{},{},{},{}", imei, from, to, sampling)
    }

    /// Raw messages of one object
    pub fn object_get_messages(imei: &str, range: &DateRange) -> String {
        let (from, to) = range.args();
        format!("OBJECT_GET_MESSAGES,{},{},{}", imei, from, to)
    }

    /// Events of one object
    pub fn object_get_events(imei: &str, range: &DateRange) -> String {
        let (from, to) = range.args();
        format!("OBJECT_GET_EVENTS,{},{},{}", imei, from, to)
    }

    /// Latest events across all objects
    pub fn object_get_last_events(window: EventWindow) -> &'static str {
        match window {
            EventWindow::ThirtyMinutes => "OBJECT_GET_LAST_EVENTS_30M",
            EventWindow::TwelveHours => "OBJECT_GET_LAST_EVENTS",
            EventWindow::SevenDays => "OBJECT_GET_LAST_EVENTS_7D",
        }
    }

    // ==================== Account ====================

    pub fn user_get_markers() -> &'static str {
        "USER_GET_MARKERS"
    }

    pub fn user_get_routes() -> &'static str {
        "USER_GET_ROUTES"
    }

    /// Geofencing zones
    pub fn user_get_zones() -> &'static str {
        "USER_GET_ZONES"
    }

    pub fn user_get_maintenance(imeis: &str) -> String {
        format!("USER_GET_MAINTENANCE,{}", imeis)
    }

    pub fn user_get_expenses(imeis: &str, range: &DateRange) -> String {
        let (from, to) = range.args();
        format!("USER_GET_EXPENSES,{},{},{}", imeis, from, to)
    }

    pub fn user_get_tasks(imeis: &str, range: &DateRange) -> String {
        let (from, to) = range.args();
        format!("USER_GET_TASKS,{},{},{}", imeis, from, to)
    }

    // ==================== Geocoding ====================

    /// Reverse geocode a coordinate
    pub fn get_address(lat: f64, lng: f64) -> String {
        format!("GET_ADDRESS,{},{}", lat, lng)
    }
}
