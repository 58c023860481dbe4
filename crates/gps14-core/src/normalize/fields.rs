//! Field extraction helpers shared by the normalizers.
//!
//! Every canonical field is read through an ordered alias list: the first
//! alias carrying a usable value wins.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime};
use serde_json::{Map, Value};

use crate::protocol::RawResponse;

pub(crate) type Object = Map<String, Value>;

/// One element of a flattened response, with its map key when keyed.
pub(crate) struct Element<'a> {
    pub key: Option<&'a str>,
    pub object: &'a Object,
}

/// Flatten an array or keyed response into object elements.
///
/// Non-object elements stand in as empty objects so every element yields a
/// record with defaulted fields. Scalars yield nothing.
pub(crate) fn flatten(raw: &RawResponse) -> Vec<Element<'_>> {
    match raw {
        RawResponse::Array(items) => items
            .iter()
            .map(|item| Element {
                key: None,
                object: as_object(item),
            })
            .collect(),
        RawResponse::Keyed(map) => map
            .iter()
            .map(|(key, value)| Element {
                key: Some(key.as_str()),
                object: as_object(value),
            })
            .collect(),
        RawResponse::Scalar(_) => Vec::new(),
    }
}

fn as_object(value: &Value) -> &Object {
    static EMPTY: OnceLock<Object> = OnceLock::new();

    value.as_object().unwrap_or_else(|| {
        tracing::trace!("treating non-object element as empty");
        EMPTY.get_or_init(Object::new)
    })
}

/// Parsed state of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeric {
    Absent,
    Invalid,
    Value(f64),
}

fn numeric(value: &Value) -> Numeric {
    match value {
        Value::Null => Numeric::Absent,
        Value::Number(n) => match n.as_f64() {
            Some(v) if v.is_finite() => Numeric::Value(v),
            _ => Numeric::Invalid,
        },
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Numeric::Absent;
            }
            match s.parse::<f64>() {
                Ok(v) if v.is_finite() => Numeric::Value(v),
                _ => Numeric::Invalid,
            }
        }
        _ => Numeric::Invalid,
    }
}

/// First alias that is present, parsed.
pub(crate) fn resolve_numeric(object: &Object, aliases: &[&str]) -> Numeric {
    aliases
        .iter()
        .filter_map(|alias| object.get(*alias))
        .map(numeric)
        .find(|n| *n != Numeric::Absent)
        .unwrap_or(Numeric::Absent)
}

/// Numeric field defaulting to 0 when absent or unparsable.
pub(crate) fn number_or_zero(object: &Object, aliases: &[&str]) -> f64 {
    match resolve_numeric(object, aliases) {
        Numeric::Value(v) => v,
        Numeric::Absent | Numeric::Invalid => 0.0,
    }
}

/// Numeric field that is `None` when absent or unparsable.
pub(crate) fn optional_number(object: &Object, aliases: &[&str]) -> Option<f64> {
    match resolve_numeric(object, aliases) {
        Numeric::Value(v) => Some(v),
        Numeric::Absent | Numeric::Invalid => None,
    }
}

/// Coordinate pair. Absent coordinates default to 0; a present but
/// unparsable one rejects the whole element.
pub(crate) fn coordinates(object: &Object) -> Option<(f64, f64)> {
    let lat = resolve_numeric(object, LAT_ALIASES);
    let lng = resolve_numeric(object, LNG_ALIASES);
    match (lat, lng) {
        (Numeric::Invalid, _) | (_, Numeric::Invalid) => None,
        (lat, lng) => Some((value_or_zero(lat), value_or_zero(lng))),
    }
}

fn value_or_zero(n: Numeric) -> f64 {
    match n {
        Numeric::Value(v) => v,
        _ => 0.0,
    }
}

pub(crate) const LAT_ALIASES: &[&str] = &["lat", "latitude"];
pub(crate) const LNG_ALIASES: &[&str] = &["lng", "lon", "longitude"];

/// First alias holding a non-empty string (or a number, rendered).
pub(crate) fn resolve_string(object: &Object, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|alias| object.get(*alias))
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Parse a server timestamp.
///
/// Accepts the protocol's `yyyy-MM-dd HH:mm:ss`, its ISO `T` variant,
/// RFC 3339 (converted to UTC), and integer epoch seconds.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        let secs: i64 = raw.parse().ok()?;
        return DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc());
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.naive_utc())
}
