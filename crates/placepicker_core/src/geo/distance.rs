//! Haversine distance and stable distance ordering.
//!
//! # Invariants
//! - `sort_by_distance` never mutates its input.
//! - Places at equal distance keep their catalog order.

use crate::geo::Coordinate;
use crate::model::place::Place;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = ((d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Pairs each place with its distance from `(lat, lon)`, in input order.
pub fn distances_from(places: &[Place], lat: f64, lon: f64) -> Vec<(Place, f64)> {
    let origin = Coordinate::new(lat, lon);
    places
        .iter()
        .map(|place| (place.clone(), haversine_km(origin, place.coordinate())))
        .collect()
}

/// Returns a copy of `places` ordered by ascending distance from `(lat, lon)`.
///
/// The sort is stable, so ties keep input order. Non-finite distances sort last.
pub fn sort_by_distance(places: &[Place], lat: f64, lon: f64) -> Vec<Place> {
    let mut ranked = distances_from(places, lat, lon);
    ranked.sort_by(|(_, left), (_, right)| distance_key(*left).total_cmp(&distance_key(*right)));
    ranked.into_iter().map(|(place, _)| place).collect()
}

fn distance_key(distance: f64) -> f64 {
    if distance.is_nan() {
        f64::INFINITY
    } else {
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::{haversine_km, sort_by_distance};
    use crate::geo::Coordinate;
    use crate::model::place::{Place, PlaceImage};

    fn place(id: &str, lat: f64, lon: f64) -> Place {
        Place::new(
            id,
            id,
            PlaceImage {
                src: format!("{id}.jpg"),
                alt: id.to_string(),
            },
            lat,
            lon,
        )
    }

    #[test]
    fn zero_distance_for_same_point() {
        let here = Coordinate::new(48.8566, 2.3522);
        assert_eq!(haversine_km(here, here), 0.0);
    }

    #[test]
    fn paris_to_london_is_about_344_km() {
        let paris = Coordinate::new(48.8566, 2.3522);
        let london = Coordinate::new(51.5074, -0.1278);
        let km = haversine_km(paris, london);
        assert!((km - 343.5).abs() < 2.0, "got {km}");
    }

    #[test]
    fn nan_distances_sort_last() {
        let places = vec![place("bad", f64::NAN, 0.0), place("near", 0.0, 0.0)];
        let ids: Vec<_> = sort_by_distance(&places, 0.0, 0.0)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["near", "bad"]);
    }
}
