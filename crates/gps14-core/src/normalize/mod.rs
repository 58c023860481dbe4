//! Response normalization.
//!
//! Converts raw server payloads into canonical records. The server has
//! returned the same data in different shapes and under different field
//! names over time, so every function here is total: bad input degrades to
//! empty lists or zero aggregates, never to an error.
//!
//! Alias resolution order per canonical field:
//!
//! | Record   | Field        | Aliases (first usable wins)                                   |
//! |----------|--------------|---------------------------------------------------------------|
//! | Location | `imei`       | `imei`, `id`, map key                                         |
//! | Location | `name`       | `name`, `object_name`, `vehicle_name`, imei, "Unknown Vehicle"|
//! | Location | `lat`/`lng`  | `lat`, `latitude` / `lng`, `lon`, `longitude`                 |
//! | Location | `angle`      | `angle`, `course`, `heading`                                  |
//! | Location | `dt_tracker` | `dt_tracker`, `dt_server`, `timestamp`                        |
//! | Event    | `event_type` | `event_name`, `event`, `type`, `alert_type`, "System Event"   |
//! | Event    | `timestamp`  | `dt_tracker`, `dt_server`, `date`, `timestamp`, now           |
//! | Event    | `message`    | `message`, `msg`                                              |
//! | Route    | `distance`   | `distance`, `distance_meters`                                 |

mod fields;

pub mod events;
pub mod locations;
pub mod route;
pub mod vehicles;

pub use events::{classify_event, normalize_events, normalize_events_at};
pub use fields::parse_timestamp;
pub use locations::normalize_locations;
pub use route::{normalize_route, summarize};
pub use vehicles::{merge_vehicles, normalize_address};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::RawResponse;
    use serde_json::json;

    #[test]
    fn test_array_length_preserved() {
        let raw = RawResponse::from(json!([
            {"imei": "1", "lat": "1", "lng": "1"},
            {"imei": "2", "lat": 2, "lng": 2},
            {"imei": "3"},
        ]));
        assert_eq!(normalize_locations(&raw).len(), 3);
    }

    #[test]
    fn test_keyed_length_equals_key_count() {
        let raw = RawResponse::from(json!({
            "a": {"lat": 1, "lng": 1},
            "b": {"lat": 1, "lng": 1},
            "c": {"imei": "zzz", "lat": 1, "lng": 1},
        }));
        let locations = normalize_locations(&raw);
        assert_eq!(locations.len(), 3);
        let imeis: Vec<_> = locations.iter().map(|l| l.imei.as_str()).collect();
        assert_eq!(imeis, vec!["a", "b", "zzz"]);
    }

    #[test]
    fn test_non_object_array_elements_keep_length() {
        let raw = RawResponse::from(json!([{"imei": "1", "lat": 1, "lng": 1}, null, "x"]));

        let locations = normalize_locations(&raw);
        assert_eq!(locations.len(), 3);
        assert_eq!(locations[1].imei, "");
        assert_eq!(locations[1].name, "Unknown Vehicle");
        assert_eq!((locations[2].lat, locations[2].lng), (0.0, 0.0));

        assert_eq!(normalize_events(&raw).len(), 3);
    }

    #[test]
    fn test_keyed_null_values_keep_key_as_imei() {
        let raw = RawResponse::from(json!({"111": null, "222": {"lat": 1, "lng": 1}}));

        let locations = normalize_locations(&raw);
        let imeis: Vec<_> = locations.iter().map(|l| l.imei.as_str()).collect();
        assert_eq!(imeis, vec!["111", "222"]);
        assert_eq!(locations[0].name, "111");
        assert_eq!(locations[0].speed, 0.0);

        let events = normalize_events(&raw);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].imei, "111");
    }

    #[test]
    fn test_normalizers_are_idempotent() {
        let raw = RawResponse::from(json!([
            {"imei": "1", "lat": "1", "lng": "1", "speed": "3",
             "dt_tracker": "2024-03-01 10:00:00", "event": "x", "distance": 10}
        ]));
        assert_eq!(normalize_locations(&raw), normalize_locations(&raw));
        assert_eq!(normalize_events(&raw), normalize_events(&raw));
        assert_eq!(normalize_route(&raw), normalize_route(&raw));
    }

    #[test]
    fn test_scalars_never_fail() {
        for v in [json!(null), json!(42), json!("bare"), json!(false)] {
            let raw = RawResponse::from(v);
            assert!(normalize_locations(&raw).is_empty());
            assert!(normalize_events(&raw).is_empty());
            assert!(normalize_route(&raw).is_empty());
        }
    }
}
