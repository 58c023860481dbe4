//! Event normalization and classification.

use chrono::{NaiveDateTime, Utc};

use super::fields::{
    flatten, optional_number, parse_timestamp, resolve_string, Element, LAT_ALIASES, LNG_ALIASES,
};
use super::locations::{display_name, IMEI_ALIASES, NAME_ALIASES};
use crate::protocol::commands::format_datetime;
use crate::protocol::RawResponse;
use crate::types::{Event, EventCategory, EventSeverity};

const EVENT_TYPE_ALIASES: &[&str] = &["event_name", "event", "type", "alert_type"];
const TIMESTAMP_ALIASES: &[&str] = &["dt_tracker", "dt_server", "date", "timestamp"];
const MESSAGE_ALIASES: &[&str] = &["message", "msg"];

pub const DEFAULT_EVENT_TYPE: &str = "System Event";

/// Normalize an events response, using the current time for events that
/// carry no timestamp.
pub fn normalize_events(raw: &RawResponse) -> Vec<Event> {
    normalize_events_at(raw, Utc::now().naive_utc())
}

/// Normalize an events response with an explicit fallback timestamp.
pub fn normalize_events_at(raw: &RawResponse, now: NaiveDateTime) -> Vec<Event> {
    flatten(raw)
        .iter()
        .enumerate()
        .map(|(index, element)| event_from(element, index, now))
        .collect()
}

fn event_from(element: &Element<'_>, index: usize, now: NaiveDateTime) -> Event {
    let object = element.object;
    let imei = resolve_string(object, &["imei"])
        .or_else(|| element.key.map(str::to_string))
        .unwrap_or_default();

    let raw_timestamp = resolve_string(object, TIMESTAMP_ALIASES);
    let timestamp = raw_timestamp
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(now);
    let id_timestamp = raw_timestamp.unwrap_or_else(|| format_datetime(&now));

    let id_source = if imei.is_empty() {
        resolve_string(object, IMEI_ALIASES).unwrap_or_else(|| "event".to_string())
    } else {
        imei.clone()
    };

    Event {
        id: format!("{}-{}-{}", id_source, id_timestamp, index),
        name: display_name(resolve_string(object, NAME_ALIASES), &imei),
        event_type: resolve_string(object, EVENT_TYPE_ALIASES)
            .unwrap_or_else(|| DEFAULT_EVENT_TYPE.to_string()),
        timestamp,
        message: resolve_string(object, MESSAGE_ALIASES),
        lat: optional_number(object, LAT_ALIASES),
        lng: optional_number(object, LNG_ALIASES),
        imei,
    }
}

/// Classify an event type by case-insensitive keyword.
pub fn classify_event(event_type: &str) -> (EventCategory, EventSeverity) {
    let t = event_type.to_lowercase();

    let category = if t.contains("sos") {
        EventCategory::Sos
    } else if t.contains("speed") {
        EventCategory::Speed
    } else if t.contains("zone") || t.contains("geofence") {
        EventCategory::Zone
    } else if t.contains("engine") {
        EventCategory::Engine
    } else if t.contains("door") {
        EventCategory::Door
    } else if t.contains("battery") {
        EventCategory::Battery
    } else {
        EventCategory::Info
    };

    let severity = if t.contains("sos") || t.contains("alert") {
        EventSeverity::Critical
    } else if t.contains("warning") {
        EventSeverity::Warning
    } else {
        EventSeverity::Info
    };

    (category, severity)
}
