// crates/citydb-core/src/geo.rs

//! Great-circle geometry on a spherical Earth.

use crate::error::{CityDbError, Result};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used for all distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Equatorial circumference used for percentage display.
pub const EARTH_CIRCUMFERENCE_KM: f64 = 40075.0;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Validates latitude in [-90, 90] and longitude in [-180, 180].
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(CityDbError::InvalidCoordinates { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    #[inline]
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        great_circle_km(*self, *other)
    }
}

/// Great-circle distance in kilometres (spherical law of cosines).
///
/// The `acos` argument is clamped into `[-1, 1]`; rounding can push it
/// slightly past 1 for (nearly) identical points, which would otherwise yield
/// `NaN`. Identical points are exactly `0.0`.
///
/// ```rust
/// use citydb_core::geo::{great_circle_km, Coordinates};
///
/// let london = Coordinates { lat: 51.5074, lon: -0.1278 };
/// let paris = Coordinates { lat: 48.8566, lon: 2.3522 };
/// let d = great_circle_km(london, paris);
/// assert!((d - 343.0).abs() < 5.0);
/// ```
pub fn great_circle_km(a: Coordinates, b: Coordinates) -> f64 {
    if a == b {
        return 0.0;
    }
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

/// Share of the longest possible great-circle route (half the circumference)
/// covered by `km`. `1.0` means antipodal.
#[inline]
pub fn half_circumference_fraction(km: f64) -> f64 {
    km / (EARTH_CIRCUMFERENCE_KM / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: Coordinates = Coordinates { lat: 51.5074, lon: -0.1278 };
    const PARIS: Coordinates = Coordinates { lat: 48.8566, lon: 2.3522 };

    #[test]
    fn london_paris() {
        let d = great_circle_km(LONDON, PARIS);
        assert!((d - 343.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(great_circle_km(LONDON, LONDON), 0.0);
        let odd = Coordinates { lat: 35.6895, lon: 139.69171 };
        assert_eq!(great_circle_km(odd, odd), 0.0);
    }

    #[test]
    fn symmetric() {
        let nyc = Coordinates { lat: 40.7128, lon: -74.0060 };
        assert_eq!(great_circle_km(nyc, PARIS), great_circle_km(PARIS, nyc));
    }

    #[test]
    fn antipodes_cover_half_the_circumference() {
        let a = Coordinates { lat: 0.0, lon: 0.0 };
        let b = Coordinates { lat: 0.0, lon: 180.0 };
        let frac = half_circumference_fraction(great_circle_km(a, b));
        // 6371 km radius vs 40075 km equatorial circumference differ slightly.
        assert!((frac - 1.0).abs() < 0.002, "got {frac}");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, -180.5).is_err());
        assert!(Coordinates::new(-90.0, 180.0).is_ok());
    }
}
