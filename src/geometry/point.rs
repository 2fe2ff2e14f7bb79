//! Observation points in geocentric spherical coordinates

use crate::errors::{invalid_arg, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Point where a field is evaluated
///
/// Longitude and latitude are in degrees; the radius uses the same unit as
/// the tesseroid radii.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObservationPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
}

impl ObservationPoint {
    pub fn new(longitude: f64, latitude: f64, radius: f64) -> Self {
        ObservationPoint {
            longitude,
            latitude,
            radius,
        }
    }

    /// Rejects non-finite coordinates and negative radii
    pub fn validate(&self) -> Result<()> {
        if !(self.longitude.is_finite() && self.latitude.is_finite() && self.radius.is_finite()) {
            return Err(invalid_arg(format!(
                "observation point coordinates must be finite: {:?}",
                self
            )));
        }
        if self.radius < 0.0 {
            return Err(invalid_arg(format!(
                "observation point radius must not be negative, got {}",
                self.radius
            )));
        }
        Ok(())
    }

    /// Geocentric Cartesian position
    ///
    /// - `x = r * cos(lat) * cos(lon)`
    /// - `y = r * cos(lat) * sin(lon)`
    /// - `z = r * sin(lat)`
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let lon = self.longitude.to_radians();
        let lat = self.latitude.to_radians();
        let cos_lat = lat.cos();
        Vector3::new(
            self.radius * cos_lat * lon.cos(),
            self.radius * cos_lat * lon.sin(),
            self.radius * lat.sin(),
        )
    }
}

impl From<[f64; 3]> for ObservationPoint {
    fn from(coordinates: [f64; 3]) -> Self {
        ObservationPoint::new(coordinates[0], coordinates[1], coordinates[2])
    }
}

impl From<(f64, f64, f64)> for ObservationPoint {
    fn from((longitude, latitude, radius): (f64, f64, f64)) -> Self {
        ObservationPoint::new(longitude, latitude, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_cartesian_axes() {
        let p = ObservationPoint::new(0.0, 0.0, 2.0).to_cartesian();
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);

        let p = ObservationPoint::new(90.0, 0.0, 1.0).to_cartesian();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);

        let p = ObservationPoint::new(123.0, 90.0, 3.0).to_cartesian();
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.norm(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(ObservationPoint::new(0.0, 0.0, 1.0).validate().is_ok());
        let nan = ObservationPoint::new(f64::NAN, 0.0, 1.0);
        assert!(nan.validate().is_err());
        let infinite = ObservationPoint::new(0.0, 0.0, f64::INFINITY);
        assert!(infinite.validate().is_err());
    }

    #[rstest]
    #[case(-5.0, false)]
    #[case(-1e-9, false)]
    #[case(0.0, true)]
    #[case(6.371e6, true)]
    fn test_validate_radius_sign(#[case] radius: f64, #[case] valid: bool) {
        let point = ObservationPoint::new(10.0, -20.0, radius);
        assert_eq!(point.validate().is_ok(), valid);
    }
}
