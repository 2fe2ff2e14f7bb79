//! Tesseroids: adaptive discretization for spherical forward modelling
//!
//! This crate splits tesseroids (spherical prisms bounded by meridians,
//! parallels and concentric spheres) into pieces small enough relative to
//! their distance from an observation point, so that their gravitational or
//! magnetic field can be approximated with a point-mass or quadrature rule.
//!
//! The discretization runs on caller-owned, fixed-capacity buffers. It never
//! allocates per call and reports capacity exhaustion as an error instead of
//! growing without bound.
//!
//! ```rust
//! use tesseroids::{DiscretizationScratch, Mode, ObservationPoint, Tesseroid};
//!
//! let mut scratch = DiscretizationScratch::new(Mode::TwoDimensional);
//! let tesseroid = Tesseroid::try_new(-10.0, 10.0, -10.0, 10.0, 1.0, 10.0).unwrap();
//!
//! for radius in [11.0, 15.0, 30.0] {
//!     let point = ObservationPoint::new(0.0, 0.0, radius);
//!     let pieces = scratch.discretize(&point, &tesseroid, 2.5).unwrap();
//!     assert!(!pieces.is_empty());
//! }
//! ```

pub mod config;
pub mod constants;
pub mod discretization;
pub mod errors;
pub mod geometry;
pub mod isostasy;

// Re-export commonly used types
pub use config::DiscretizationConfig;
pub use discretization::{
    adaptive_discretization, discretization_status, split_tesseroid, DiscretizationScratch, Mode,
    SmallTesseroids, Split, TesseroidStack,
};
pub use errors::{DiscretizationError, Result};
pub use geometry::{
    distance_tesseroid_point, tesseroid_dimensions, Dimensions, ObservationPoint, Tesseroid,
};
