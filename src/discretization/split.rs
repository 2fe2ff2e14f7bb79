//! Bisection of tesseroids along any combination of axes

use crate::discretization::stack::TesseroidStack;
use crate::errors::{invalid_arg, Result};
use crate::geometry::Tesseroid;

/// Whether to subdivide a tesseroid along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Split {
    /// Keep the axis whole (split factor 1)
    #[default]
    NoSplit,
    /// Cut the axis at its midpoint (split factor 2)
    Bisect,
}

impl Split {
    /// Builds a split from its numeric factor, which must be 1 or 2
    pub fn from_factor(factor: u8) -> Result<Self> {
        match factor {
            1 => Ok(Split::NoSplit),
            2 => Ok(Split::Bisect),
            _ => Err(invalid_arg(format!("split factor must be 1 or 2, got {}", factor))),
        }
    }

    /// Number of pieces this split produces along its axis
    pub fn factor(self) -> usize {
        match self {
            Split::NoSplit => 1,
            Split::Bisect => 2,
        }
    }

    /// `Bisect` when `condition` holds
    pub fn when(condition: bool) -> Self {
        if condition {
            Split::Bisect
        } else {
            Split::NoSplit
        }
    }

    /// Sub-intervals of `[lower, upper]`, padded with unused slots
    fn intervals(self, lower: f64, upper: f64) -> [(f64, f64); 2] {
        match self {
            Split::NoSplit => [(lower, upper); 2],
            Split::Bisect => {
                let middle = 0.5 * (lower + upper);
                [(lower, middle), (middle, upper)]
            }
        }
    }
}

/// Pushes the sub-tesseroids of `tesseroid` onto `stack`
///
/// Every axis marked [`Split::Bisect`] is cut at its midpoint and the
/// Cartesian product of the resulting intervals is pushed, so between one
/// and eight children end up on the stack. The children tile the parent
/// exactly.
///
/// Returns the index of the new top of the stack.
///
/// # Errors
///
/// Returns [`DiscretizationError::StackOverflow`](crate::DiscretizationError::StackOverflow)
/// if the children do not all fit. The check happens before anything is
/// written, so the stack is unchanged on error.
pub fn split_tesseroid(
    tesseroid: &Tesseroid,
    n_lon: Split,
    n_lat: Split,
    n_rad: Split,
    stack: &mut TesseroidStack,
) -> Result<usize> {
    let n_children = n_lon.factor() * n_lat.factor() * n_rad.factor();
    stack.ensure_room(n_children)?;

    let lon_intervals = n_lon.intervals(tesseroid.west, tesseroid.east);
    let lat_intervals = n_lat.intervals(tesseroid.south, tesseroid.north);
    let rad_intervals = n_rad.intervals(tesseroid.bottom, tesseroid.top);

    for &(west, east) in &lon_intervals[..n_lon.factor()] {
        for &(south, north) in &lat_intervals[..n_lat.factor()] {
            for &(bottom, top) in &rad_intervals[..n_rad.factor()] {
                stack.push(Tesseroid::new(west, east, south, north, bottom, top))?;
            }
        }
    }

    // At least one child was pushed
    Ok(stack.len() - 1)
}
