/// Mean Earth radius in meters.
///
/// Spherical approximation, adequate for proximity checks rather than
/// geodetic-grade results.
pub const MEAN_EARTH_RADIUS: f64 = 6_371e3;

/// Calculate the great-circle distance between two coordinates in meters.
///
/// Coordinates are `(latitude, longitude)` pairs in decimal degrees. Uses
/// the haversine formula on a spherical Earth model. The result is
/// non-negative and symmetric in its arguments.
pub fn great_circle_distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let phi1 = from.0.to_radians();
    let phi2 = to.0.to_radians();
    let delta_phi = (to.0 - from.0).to_radians();
    let delta_lambda = (to.1 - from.1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    MEAN_EARTH_RADIUS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_along_equator() {
        let distance = great_circle_distance((0.0, 0.0), (0.0, 1.0));

        // One degree of longitude at the equator.
        assert!((distance - 111_195.0).abs() < 556.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let shanghai = (31.23, 121.47);
        let utrecht = (52.09, 5.10);

        let there = great_circle_distance(shanghai, utrecht);
        let back = great_circle_distance(utrecht, shanghai);

        assert!((there - back).abs() < 1e-6);
        assert!(there > 0.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(great_circle_distance((48.8566, 2.3522), (48.8566, 2.3522)), 0.0);
        assert_eq!(great_circle_distance((-90.0, 0.0), (-90.0, 0.0)), 0.0);
    }
}
