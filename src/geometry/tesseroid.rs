//! # Tesseroid Module
//!
//! A tesseroid is a spherical prism bounded by two meridians, two parallels
//! and two concentric spheres. It is the elementary mass element of
//! spherical forward modelling.
//!
//! ## Bounds Convention
//!
//! Bounds are stored in the order `(west, east, south, north, bottom, top)`:
//! - `west`, `east`: longitudes in degrees
//! - `south`, `north`: latitudes in degrees
//! - `bottom`, `top`: radii, in whatever unit the observation points use
//!
//! ## Examples
//!
//! ```rust
//! use tesseroids::geometry::Tesseroid;
//!
//! let tess = Tesseroid::try_new(-10.0, 10.0, -10.0, 10.0, 1.0, 10.0).unwrap();
//! assert_eq!(tess.center(), (0.0, 0.0, 5.5));
//! assert_eq!(tess.to_array(), [-10.0, 10.0, -10.0, 10.0, 1.0, 10.0]);
//! ```

use crate::errors::{invalid_arg, Result};
use serde::{Deserialize, Serialize};

/// Spherical prism bounded by longitude, latitude and radius intervals
///
/// Tesseroids are plain `Copy` values. The discretization engine creates
/// and drops thousands of them per call, so [`Tesseroid::new`] performs no
/// checks; use [`Tesseroid::try_new`] or [`Tesseroid::validate`] on
/// caller-supplied bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tesseroid {
    /// Western longitude boundary in degrees
    pub west: f64,
    /// Eastern longitude boundary in degrees
    pub east: f64,
    /// Southern latitude boundary in degrees
    pub south: f64,
    /// Northern latitude boundary in degrees
    pub north: f64,
    /// Inner radius
    pub bottom: f64,
    /// Outer radius
    pub top: f64,
}

impl Tesseroid {
    /// Creates a tesseroid without checking its bounds
    pub fn new(west: f64, east: f64, south: f64, north: f64, bottom: f64, top: f64) -> Self {
        Tesseroid {
            west,
            east,
            south,
            north,
            bottom,
            top,
        }
    }

    /// Creates a tesseroid, rejecting malformed bounds
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if any bound is not finite, if an
    /// interval is empty or reversed, or if the bottom radius is not positive.
    pub fn try_new(
        west: f64,
        east: f64,
        south: f64,
        north: f64,
        bottom: f64,
        top: f64,
    ) -> Result<Self> {
        let tesseroid = Self::new(west, east, south, north, bottom, top);
        tesseroid.validate()?;
        Ok(tesseroid)
    }

    /// Checks the tesseroid invariants
    pub fn validate(&self) -> Result<()> {
        if !self.to_array().iter().all(|bound| bound.is_finite()) {
            return Err(invalid_arg(format!(
                "tesseroid bounds must be finite: {:?}",
                self.to_array()
            )));
        }
        if self.west >= self.east {
            return Err(invalid_arg(format!(
                "west boundary ({}) must be lower than east boundary ({})",
                self.west, self.east
            )));
        }
        if self.south >= self.north {
            return Err(invalid_arg(format!(
                "south boundary ({}) must be lower than north boundary ({})",
                self.south, self.north
            )));
        }
        if self.bottom >= self.top {
            return Err(invalid_arg(format!(
                "bottom radius ({}) must be lower than top radius ({})",
                self.bottom, self.top
            )));
        }
        if self.bottom <= 0.0 {
            return Err(invalid_arg(format!("bottom radius ({}) must be positive", self.bottom)));
        }
        Ok(())
    }

    /// Geometric center as `(longitude, latitude, radius)`
    pub fn center(&self) -> (f64, f64, f64) {
        (
            0.5 * (self.west + self.east),
            0.5 * (self.south + self.north),
            0.5 * (self.bottom + self.top),
        )
    }

    /// Bounds as `[west, east, south, north, bottom, top]`
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.west,
            self.east,
            self.south,
            self.north,
            self.bottom,
            self.top,
        ]
    }
}

impl From<[f64; 6]> for Tesseroid {
    fn from(bounds: [f64; 6]) -> Self {
        let [west, east, south, north, bottom, top] = bounds;
        Tesseroid::new(west, east, south, north, bottom, top)
    }
}

impl From<Tesseroid> for [f64; 6] {
    fn from(tesseroid: Tesseroid) -> Self {
        tesseroid.to_array()
    }
}
