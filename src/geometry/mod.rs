//! Geometry of tesseroids and observation points
//!
//! - `tesseroid`: the [`Tesseroid`] value type and its invariants
//! - `point`: [`ObservationPoint`] in geocentric spherical coordinates
//! - `metrics`: distance and size metrics used by the splitting criterion

pub mod metrics;
pub mod point;
pub mod tesseroid;

pub use self::metrics::{distance_tesseroid_point, tesseroid_dimensions, Dimensions};
pub use self::point::ObservationPoint;
pub use self::tesseroid::Tesseroid;
