//! Route history normalization and aggregates.

use super::fields::{coordinates, number_or_zero, optional_number, parse_timestamp, resolve_string};
use crate::protocol::RawResponse;
use crate::types::{RoutePoint, RouteSummary};

const TIMESTAMP_ALIASES: &[&str] = &["dt_tracker", "dt_server", "date", "timestamp"];
const DISTANCE_ALIASES: &[&str] = &["distance", "distance_meters"];

/// Normalize a route response into points and aggregate statistics.
///
/// Only arrays are accepted; any other shape yields the zero summary.
pub fn normalize_route(raw: &RawResponse) -> RouteSummary {
    let RawResponse::Array(items) = raw else {
        return RouteSummary::default();
    };

    let points: Vec<RoutePoint> = items
        .iter()
        .filter_map(|item| item.as_object())
        .filter_map(|object| {
            let (lat, lng) = coordinates(object)?;
            Some(RoutePoint {
                lat,
                lng,
                speed: number_or_zero(object, &["speed"]).max(0.0),
                timestamp: resolve_string(object, TIMESTAMP_ALIASES)
                    .as_deref()
                    .and_then(parse_timestamp),
                distance_meters: optional_number(object, DISTANCE_ALIASES),
            })
        })
        .collect();

    summarize(points)
}

/// Compute aggregates over already-normalized points.
pub fn summarize(points: Vec<RoutePoint>) -> RouteSummary {
    if points.is_empty() {
        return RouteSummary::default();
    }

    let total_meters: f64 = points.iter().map(|p| p.distance_meters.unwrap_or(0.0)).sum();
    let max_speed = points.iter().map(|p| p.speed).fold(0.0, f64::max);
    let avg_speed = points.iter().map(|p| p.speed).sum::<f64>() / points.len() as f64;

    RouteSummary {
        total_distance_km: total_meters / 1000.0,
        max_speed,
        avg_speed,
        duration_minutes: duration_minutes(&points),
        points,
    }
}

fn duration_minutes(points: &[RoutePoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    match (
        points.first().and_then(|p| p.timestamp),
        points.last().and_then(|p| p.timestamp),
    ) {
        (Some(start), Some(end)) => (end - start).num_seconds() as f64 / 60.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_array_is_zero_summary() {
        let summary = normalize_route(&RawResponse::from(json!([])));
        assert_eq!(summary, RouteSummary::default());
        assert!(summary.points.is_empty());
        assert_eq!(summary.total_distance_km, 0.0);
        assert_eq!(summary.max_speed, 0.0);
        assert_eq!(summary.avg_speed, 0.0);
        assert_eq!(summary.duration_minutes, 0.0);
    }

    #[test]
    fn test_three_points_five_minutes_apart() {
        let raw = RawResponse::from(json!([
            {"lat": "1", "lng": "1", "speed": "10", "dt_tracker": "2024-03-01 10:00:00"},
            {"lat": "1", "lng": "1", "speed": "20", "dt_tracker": "2024-03-01 10:05:00"},
            {"lat": "1", "lng": "1", "speed": "30", "dt_tracker": "2024-03-01 10:10:00"},
        ]));
        let summary = normalize_route(&raw);

        assert_eq!(summary.points.len(), 3);
        assert_eq!(summary.max_speed, 30.0);
        assert_eq!(summary.avg_speed, 20.0);
        assert_eq!(summary.duration_minutes, 10.0);
    }

    #[test]
    fn test_distance_sums_to_kilometres() {
        let raw = RawResponse::from(json!([
            {"lat": 1, "lng": 1, "distance": "1500"},
            {"lat": 1, "lng": 1},
            {"lat": 1, "lng": 1, "distance_meters": 500},
        ]));
        let summary = normalize_route(&raw);

        assert_eq!(summary.total_distance_km, 2.0);
        assert_eq!(summary.points[1].distance_meters, None);
    }

    #[test]
    fn test_unparsable_timestamp_gives_zero_duration() {
        let raw = RawResponse::from(json!([
            {"lat": 1, "lng": 1, "dt_tracker": "2024-03-01 10:00:00"},
            {"lat": 1, "lng": 1, "dt_tracker": "soon"},
        ]));
        assert_eq!(normalize_route(&raw).duration_minutes, 0.0);
    }

    #[test]
    fn test_single_point_has_no_duration() {
        let raw = RawResponse::from(json!([
            {"lat": 1, "lng": 1, "speed": 42, "dt_tracker": "2024-03-01 10:00:00"}
        ]));
        let summary = normalize_route(&raw);
        assert_eq!(summary.duration_minutes, 0.0);
        assert_eq!(summary.max_speed, 42.0);
    }

    #[test]
    fn test_non_array_shapes_yield_zero_summary() {
        for v in [json!(null), json!(42), json!("x"), json!({"a": {"lat": 1, "lng": 1}})] {
            assert_eq!(normalize_route(&RawResponse::from(v)), RouteSummary::default());
        }
    }
}
