//! Vehicle list assembly and reverse-geocoding results.

use std::collections::HashMap;

use serde_json::Value;

use super::fields::{flatten, resolve_string};
use super::locations::{display_name, element_imei, NAME_ALIASES};
use crate::protocol::RawResponse;
use crate::types::{Vehicle, VehicleLocation, VehicleStatus};

/// Join the account's objects with their latest locations by IMEI.
///
/// One vehicle per object; objects without a location get `NoData`.
pub fn merge_vehicles(objects: &RawResponse, locations: &[VehicleLocation]) -> Vec<Vehicle> {
    let by_imei: HashMap<&str, &VehicleLocation> = locations
        .iter()
        .map(|loc| (loc.imei.as_str(), loc))
        .collect();

    flatten(objects)
        .iter()
        .map(|element| {
            let imei = element_imei(element);
            let location = by_imei.get(imei.as_str()).map(|loc| (*loc).clone());

            let status = match &location {
                Some(loc) if loc.is_moving() => VehicleStatus::Moving,
                Some(_) => VehicleStatus::Stopped,
                None => VehicleStatus::NoData,
            };

            Vehicle {
                name: display_name(resolve_string(element.object, NAME_ALIASES), &imei),
                imei,
                status,
                location,
            }
        })
        .collect()
}

/// Extract an address from a `GET_ADDRESS` response.
pub fn normalize_address(raw: &RawResponse) -> Option<String> {
    match raw {
        RawResponse::Scalar(Value::String(s)) => non_empty(s),
        RawResponse::Keyed(map) => map.get("address").and_then(Value::as_str).and_then(non_empty),
        RawResponse::Array(items) => items
            .first()
            .cloned()
            .map(RawResponse::from)
            .and_then(|first| normalize_address(&first)),
        RawResponse::Scalar(_) => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_locations;
    use serde_json::json;

    #[test]
    fn test_merge_vehicles_joins_by_imei() {
        let objects = RawResponse::from(json!([
            {"imei": "1", "name": "Van"},
            {"imei": "2", "name": "Truck"},
            {"imei": "3"},
        ]));
        let locations = normalize_locations(&RawResponse::from(json!({
            "1": {"lat": 1, "lng": 1, "speed": 50},
            "2": {"lat": 2, "lng": 2, "speed": 0},
        })));

        let vehicles = merge_vehicles(&objects, &locations);

        assert_eq!(vehicles.len(), 3);
        assert_eq!(vehicles[0].name, "Van");
        assert_eq!(vehicles[0].status, VehicleStatus::Moving);
        assert_eq!(vehicles[1].status, VehicleStatus::Stopped);
        assert_eq!(vehicles[2].name, "3");
        assert_eq!(vehicles[2].status, VehicleStatus::NoData);
        assert!(vehicles[2].location.is_none());
    }

    #[test]
    fn test_merge_vehicles_non_collection_objects() {
        let vehicles = merge_vehicles(&RawResponse::from(json!(null)), &[]);
        assert!(vehicles.is_empty());
    }

    #[test]
    fn test_normalize_address_shapes() {
        assert_eq!(
            normalize_address(&RawResponse::from(json!(" Main St 5 "))),
            Some("Main St 5".to_string())
        );
        assert_eq!(
            normalize_address(&RawResponse::from(json!({"address": "Harbour Rd"}))),
            Some("Harbour Rd".to_string())
        );
        assert_eq!(
            normalize_address(&RawResponse::from(json!(["Station Sq"]))),
            Some("Station Sq".to_string())
        );
        assert_eq!(normalize_address(&RawResponse::from(json!(""))), None);
        assert_eq!(normalize_address(&RawResponse::from(json!(7))), None);
    }
}
