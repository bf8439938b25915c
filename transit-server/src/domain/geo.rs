//! Geographic coordinates.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface in degrees.
///
/// Latitude is within `[-90, 90]` and longitude within `[-180, 180]`;
/// [`Coordinates::new`] enforces both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create validated coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinates("latitude out of range"));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinates("longitude out of range"));
        }
        Ok(Self { lat, lng })
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_server::domain::Coordinates;
    ///
    /// let a = Coordinates::new(55.611087, 37.20829).unwrap();
    /// assert_eq!(a.distance_to(&a), 0.0);
    /// ```
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlng = (self.lng - other.lng).abs().to_radians();
        // Rounding can push the cosine just past 1.0 for very close points
        let cos_angle = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlng.cos())
            .clamp(-1.0, 1.0);
        cos_angle.acos() * EARTH_RADIUS_M
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinates() -> impl Strategy<Value = Coordinates> {
        (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lng)| Coordinates { lat, lng })
    }

    proptest! {
        #[test]
        fn distance_is_symmetric_and_bounded(a in coordinates(), b in coordinates()) {
            let ab = a.distance_to(&b);
            let ba = b.distance_to(&a);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-6);
            // Half the circumference
            prop_assert!(ab <= EARTH_RADIUS_M * std::f64::consts::PI + 1e-6);
        }

        #[test]
        fn new_accepts_valid_range(lat in -90.0..=90.0f64, lng in -180.0..=180.0f64) {
            prop_assert!(Coordinates::new(lat, lng).is_ok());
        }
    }
}
