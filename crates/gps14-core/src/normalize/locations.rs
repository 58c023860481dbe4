//! Vehicle location normalization.

use super::fields::{
    coordinates, flatten, number_or_zero, parse_timestamp, resolve_string, Element,
};
use crate::protocol::RawResponse;
use crate::types::VehicleLocation;

pub(crate) const IMEI_ALIASES: &[&str] = &["imei", "id"];
pub(crate) const NAME_ALIASES: &[&str] = &["name", "object_name", "vehicle_name"];
const ANGLE_ALIASES: &[&str] = &["angle", "course", "heading"];
const ALTITUDE_ALIASES: &[&str] = &["altitude", "alt"];
const DT_TRACKER_ALIASES: &[&str] = &["dt_tracker", "dt_server", "timestamp"];

pub(crate) const UNKNOWN_VEHICLE: &str = "Unknown Vehicle";

/// Normalize a locations response.
///
/// Arrays map element by element. Keyed objects are flattened and the key
/// becomes the IMEI unless the value names one itself.
pub fn normalize_locations(raw: &RawResponse) -> Vec<VehicleLocation> {
    flatten(raw).iter().filter_map(location_from).collect()
}

pub(crate) fn element_imei(element: &Element<'_>) -> String {
    resolve_string(element.object, IMEI_ALIASES)
        .or_else(|| element.key.map(str::to_string))
        .unwrap_or_default()
}

pub(crate) fn display_name(name: Option<String>, imei: &str) -> String {
    name.unwrap_or_else(|| {
        if imei.is_empty() {
            UNKNOWN_VEHICLE.to_string()
        } else {
            imei.to_string()
        }
    })
}

fn location_from(element: &Element<'_>) -> Option<VehicleLocation> {
    let object = element.object;
    let imei = element_imei(element);

    let Some((lat, lng)) = coordinates(object) else {
        tracing::trace!(imei = %imei, "dropping location with unparsable coordinates");
        return None;
    };

    let name = display_name(resolve_string(object, NAME_ALIASES), &imei);

    Some(VehicleLocation {
        name,
        lat,
        lng,
        speed: number_or_zero(object, &["speed"]).max(0.0),
        angle: number_or_zero(object, ANGLE_ALIASES).rem_euclid(360.0),
        altitude: number_or_zero(object, ALTITUDE_ALIASES),
        dt_tracker: resolve_string(object, DT_TRACKER_ALIASES)
            .as_deref()
            .and_then(parse_timestamp),
        dt_server: resolve_string(object, &["dt_server"])
            .as_deref()
            .and_then(parse_timestamp),
        engine_status: resolve_string(object, &["engine_status"]),
        address: resolve_string(object, &["address"]),
        imei,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_example() {
        let raw = RawResponse::from(json!([
            {"imei": "123", "lat": "35.1", "lng": "1.2", "speed": "10"}
        ]));
        let locations = normalize_locations(&raw);

        assert_eq!(locations.len(), 1);
        let loc = &locations[0];
        assert_eq!(loc.imei, "123");
        assert_eq!(loc.name, "123");
        assert_eq!(loc.lat, 35.1);
        assert_eq!(loc.lng, 1.2);
        assert_eq!(loc.speed, 10.0);
        assert_eq!(loc.angle, 0.0);
        assert!(loc.dt_tracker.is_none());
    }

    #[test]
    fn test_keyed_object_uses_keys_as_imei() {
        let raw = RawResponse::from(json!({
            "111": {"lat": 1.0, "lng": 2.0},
            "222": {"imei": "999", "lat": 3.0, "lng": 4.0},
        }));
        let locations = normalize_locations(&raw);

        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].imei, "111");
        assert_eq!(locations[1].imei, "999");
    }

    #[test]
    fn test_name_alias_order() {
        let raw = RawResponse::from(json!([
            {"imei": "1", "object_name": "Van", "vehicle_name": "Other"},
            {"imei": "2", "vehicle_name": "Truck"},
            {"lat": 0, "lng": 0},
        ]));
        let names: Vec<_> = normalize_locations(&raw)
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Van", "Truck", UNKNOWN_VEHICLE]);
    }

    #[test]
    fn test_numeric_defaults_and_ranges() {
        let raw = RawResponse::from(json!([
            {"imei": "1", "lat": 1, "lng": 1, "speed": "-4", "angle": "-90"},
            {"imei": "2", "lat": 1, "lng": 1, "speed": "fast", "angle": 725},
        ]));
        let locations = normalize_locations(&raw);

        assert_eq!(locations[0].speed, 0.0);
        assert_eq!(locations[0].angle, 270.0);
        assert_eq!(locations[1].speed, 0.0);
        assert_eq!(locations[1].angle, 5.0);
    }

    #[test]
    fn test_missing_coordinates_default_to_zero() {
        let raw = RawResponse::from(json!([{"imei": "1", "speed": 5}]));
        let locations = normalize_locations(&raw);
        assert_eq!(locations.len(), 1);
        assert_eq!((locations[0].lat, locations[0].lng), (0.0, 0.0));
    }

    #[test]
    fn test_unparsable_coordinates_drop_element() {
        let raw = RawResponse::from(json!([
            {"imei": "1", "lat": "n/a", "lng": "1"},
            {"imei": "2", "lat": "1", "lng": "1"},
        ]));
        let locations = normalize_locations(&raw);
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].imei, "2");
    }

    #[test]
    fn test_optional_fields() {
        let raw = RawResponse::from(json!([{
            "imei": "1",
            "lat": "1",
            "lng": "2",
            "dt_tracker": "2024-03-01 10:15:00",
            "dt_server": "2024-03-01 10:15:03",
            "engine_status": "on",
            "address": "Main St"
        }]));
        let loc = &normalize_locations(&raw)[0];
        assert!(loc.dt_tracker.is_some());
        assert!(loc.dt_server.is_some());
        assert_eq!(loc.engine_status.as_deref(), Some("on"));
        assert_eq!(loc.address.as_deref(), Some("Main St"));
    }

    #[test]
    fn test_scalars_yield_empty() {
        for v in [json!(null), json!(42), json!("error"), json!(true)] {
            assert!(normalize_locations(&RawResponse::from(v)).is_empty());
        }
    }
}
