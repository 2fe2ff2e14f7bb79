//! Distance and size metrics driving the splitting criterion
//!
//! Both metrics are evaluated against the tesseroid as a whole: distances are
//! measured to its geometric center and sizes are arc lengths on its outer
//! sphere, so the size of a tesseroid is never underestimated.

use super::{ObservationPoint, Tesseroid};

/// Linear dimensions of a tesseroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Arc length along longitude, measured on the top sphere
    pub lon: f64,
    /// Arc length along latitude, measured on the top sphere
    pub lat: f64,
    /// Radial thickness
    pub radial: f64,
}

impl From<Dimensions> for (f64, f64, f64) {
    fn from(dimensions: Dimensions) -> Self {
        (dimensions.lon, dimensions.lat, dimensions.radial)
    }
}

/// Straight-line distance between a point and the center of a tesseroid
///
/// Law of cosines on the two geocentric radii,
/// `d² = r1² + r2² - 2·r1·r2·cos ψ`, rewritten with the haversine of the
/// angular separation `ψ` as `d² = (r1 - r2)² + 4·r1·r2·hav ψ`. Both terms are
/// non-negative and vanish exactly when the point sits on the tesseroid
/// center, so the result is exactly `0.0` there. The radicand is still
/// clamped at zero.
pub fn distance_tesseroid_point(point: &ObservationPoint, tesseroid: &Tesseroid) -> f64 {
    let (center_lon, center_lat, center_radius) = tesseroid.center();

    let lat_p = point.latitude.to_radians();
    let lat_c = center_lat.to_radians();
    let half_delta_lat = 0.5 * (point.latitude - center_lat).to_radians();
    let half_delta_lon = 0.5 * (point.longitude - center_lon).to_radians();

    // hav ψ = (1 - cos ψ) / 2
    let haversine =
        half_delta_lat.sin().powi(2) + lat_p.cos() * lat_c.cos() * half_delta_lon.sin().powi(2);

    let r1 = point.radius;
    let r2 = center_radius;
    let radicand = (r1 - r2).powi(2) + 4.0 * r1 * r2 * haversine.clamp(0.0, 1.0);
    radicand.max(0.0).sqrt()
}

/// Dimensions of a tesseroid evaluated at its top radius
pub fn tesseroid_dimensions(tesseroid: &Tesseroid) -> Dimensions {
    Dimensions {
        lon: tesseroid.top * (tesseroid.east - tesseroid.west).to_radians(),
        lat: tesseroid.top * (tesseroid.north - tesseroid.south).to_radians(),
        radial: tesseroid.top - tesseroid.bottom,
    }
}
