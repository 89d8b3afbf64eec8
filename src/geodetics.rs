//! Distance and azimuth between two points on the WGS84 ellipsoid.
//!
//! Uses Vincenty's inverse formula, falling back to a spherical solution
//! for the nearly antipodal pairs where the iteration does not converge.

use crate::{Result, SacError};

/// WGS84 equatorial radius in meters.
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// Mean Earth radius in kilometers, used for km to degree conversion.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const MAX_ITERATIONS: usize = 200;
const TOLERANCE: f64 = 1e-12;

/// Great-circle distance and azimuths from point 1 to point 2.
///
/// Returns `(meters, azimuth, back_azimuth)` with azimuths in degrees
/// clockwise from north in `[0, 360)`. The azimuth is measured at point 1
/// towards point 2, the back azimuth at point 2 towards point 1.
pub fn distance_azimuth(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<(f64, f64, f64)> {
    for lat in [lat1, lat2] {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(SacError::InvalidCoordinate(lat));
        }
    }
    if lat1 == lat2 && lon1 == lon2 {
        return Ok((0.0, 0.0, 0.0));
    }

    match vincenty_inverse(lat1, lon1, lat2, lon2) {
        Some(result) => Ok(result),
        None => {
            log::warn!(
                "Vincenty inverse did not converge for ({lat1}, {lon1}) -> ({lat2}, {lon2}); \
                 using a spherical approximation"
            );
            Ok(spherical_inverse(lat1, lon1, lat2, lon2))
        }
    }
}

/// Convert a surface distance in kilometers to degrees of arc.
pub fn km_to_degrees(km: f64) -> f64 {
    km / (2.0 * std::f64::consts::PI * EARTH_RADIUS_KM / 360.0)
}

fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

fn vincenty_inverse(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Option<(f64, f64, f64)> {
    let a = WGS84_A;
    let f = WGS84_F;
    let b = a * (1.0 - f);

    let l = (lon2 - lon1).to_radians();
    let u1 = ((1.0 - f) * lat1.to_radians().tan()).atan();
    let u2 = ((1.0 - f) * lat2.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;
    let (mut sin_sigma, mut cos_sigma, mut sigma) = (0.0, 0.0, 0.0);
    let (mut cos_sq_alpha, mut cos_2sigma_m) = (0.0, 0.0);
    let (mut sin_lambda, mut cos_lambda) = (0.0, 0.0);

    for _ in 0..MAX_ITERATIONS {
        (sin_lambda, cos_lambda) = lambda.sin_cos();
        sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            return Some((0.0, 0.0, 0.0));
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line
        cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));
        if (lambda - previous).abs() < TOLERANCE {
            converged = true;
            break;
        }
    }
    if !converged {
        return None;
    }

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma.powi(2))
                        * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));
    let meters = b * big_a * (sigma - delta_sigma);

    let alpha12 = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
    let alpha21 = (cos_u1 * sin_lambda).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

    Some((
        meters,
        normalize_degrees(alpha12.to_degrees()),
        normalize_degrees(alpha21.to_degrees() + 180.0),
    ))
}

fn spherical_inverse(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64, f64) {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dlon = (lon2 - lon1).to_radians();
    let hav = ((phi2 - phi1) / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (dlon / 2.0).sin().powi(2);
    let arc = 2.0 * hav.sqrt().min(1.0).asin();
    let az = (dlon.sin() * phi2.cos())
        .atan2(phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos());
    let baz = ((-dlon).sin() * phi1.cos())
        .atan2(phi2.cos() * phi1.sin() - phi2.sin() * phi1.cos() * dlon.cos());
    (
        arc * EARTH_RADIUS_KM * 1000.0,
        normalize_degrees(az.to_degrees()),
        normalize_degrees(baz.to_degrees()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point() {
        assert_eq!(distance_azimuth(10.0, 20.0, 10.0, 20.0).unwrap(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_one_degree_of_meridian() {
        // one degree of latitude at the equator on WGS84
        let (m, az, baz) = distance_azimuth(0.0, 0.0, 1.0, 0.0).unwrap();
        assert!((m - 110_574.389).abs() < 0.01, "{m}");
        assert!(az.abs() < 1e-9);
        assert!((baz - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_along_equator() {
        let (m, az, baz) = distance_azimuth(0.0, 0.0, 0.0, 1.0).unwrap();
        assert!((m - 111_319.491).abs() < 0.01, "{m}");
        assert!((az - 90.0).abs() < 1e-9);
        assert!((baz - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let (m1, az1, baz1) = distance_azimuth(42.5, -37.5, -35.0, 100.0).unwrap();
        let (m2, az2, baz2) = distance_azimuth(-35.0, 100.0, 42.5, -37.5).unwrap();
        assert!((m1 - m2).abs() < 1e-3);
        assert!((az1 - baz2).abs() < 1e-6);
        assert!((baz1 - az2).abs() < 1e-6);
        assert!((0.0..360.0).contains(&az1));
    }

    #[test]
    fn test_nearly_antipodal() {
        let (m, _, _) = distance_azimuth(0.0, 0.0, 0.5, 179.7).unwrap();
        assert!(m > 19_900_000.0 && m < 20_100_000.0, "{m}");
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(matches!(
            distance_azimuth(91.0, 0.0, 0.0, 0.0),
            Err(SacError::InvalidCoordinate(v)) if v == 91.0
        ));
    }

    #[test]
    fn test_km_to_degrees() {
        assert!((km_to_degrees(111.19492664455873) - 1.0).abs() < 1e-12);
        assert_eq!(km_to_degrees(0.0), 0.0);
    }
}
