//! Adaptive discretization of a tesseroid around an observation point
//!
//! A tesseroid is split until every piece is small compared to its distance
//! to the observation point. For each axis the piece is bisected while
//!
//! ```text
//! distance / size < distance_size_ratio
//! ```
//!
//! The subdivision is driven by an explicit LIFO work-list of fixed capacity
//! instead of recursion. Worst-case memory is therefore known up front, and
//! pathological inputs (an observation point on or inside the tesseroid)
//! surface as a [`DiscretizationError::StackOverflow`] rather than running
//! without bound.

use log::{debug, warn};

use crate::discretization::split::{split_tesseroid, Split};
use crate::discretization::stack::{SmallTesseroids, TesseroidStack};
use crate::errors::{invalid_arg, DiscretizationError, Result};
use crate::geometry::{distance_tesseroid_point, tesseroid_dimensions, ObservationPoint, Tesseroid};

/// Axes on which the splitting criterion is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Longitude and latitude only; the radial extent is never split.
    ///
    /// Only accurate when the observation point lies outside the radial
    /// span of the tesseroid (typically above its top surface).
    #[default]
    TwoDimensional,
    /// Longitude, latitude and radius
    ThreeDimensional,
}

impl Mode {
    /// Mode matching the `radial_discretization` flag
    pub fn from_radial_discretization(radial_discretization: bool) -> Self {
        if radial_discretization {
            Mode::ThreeDimensional
        } else {
            Mode::TwoDimensional
        }
    }

    pub fn splits_radius(self) -> bool {
        self == Mode::ThreeDimensional
    }
}

/// Discretizes `tesseroid` into pieces small enough for `point`
///
/// The accepted pieces are written to `small_tesseroids`, whose previous
/// contents are discarded, and their number is returned. Both buffers are
/// reset on entry and never reallocated.
///
/// # Arguments
///
/// * `point` - Observation point
/// * `tesseroid` - Source tesseroid
/// * `distance_size_ratio` - Minimum distance to size ratio of an accepted
///   piece; larger values produce finer discretizations
/// * `stack` - Work-list scratch buffer
/// * `small_tesseroids` - Output buffer
/// * `mode` - Whether the radial axis may be split
///
/// # Errors
///
/// * [`DiscretizationError::InvalidArgument`] for malformed tesseroids,
///   non-finite points or a ratio that is not strictly positive. Nothing is
///   written to the buffers in this case.
/// * [`DiscretizationError::StackOverflow`] when the work-list would exceed
///   its capacity.
/// * [`DiscretizationError::OutputOverflow`] when more pieces are accepted
///   than `small_tesseroids` can hold.
///
/// On overflow the buffers hold a partial, unspecified result.
pub fn adaptive_discretization(
    point: &ObservationPoint,
    tesseroid: &Tesseroid,
    distance_size_ratio: f64,
    stack: &mut TesseroidStack,
    small_tesseroids: &mut SmallTesseroids,
    mode: Mode,
) -> Result<usize> {
    validate_arguments(point, tesseroid, distance_size_ratio)?;

    if mode == Mode::TwoDimensional && inside_radial_span(point, tesseroid) {
        warn!(
            "Observation point radius {} lies inside the radial span [{}, {}] of the tesseroid; \
             2D discretization will not split it radially",
            point.radius, tesseroid.bottom, tesseroid.top
        );
    }

    stack.clear();
    small_tesseroids.clear();
    stack.push(*tesseroid).map_err(report_overflow)?;

    let mut n_subdivisions = 0usize;
    let mut max_depth = stack.len();

    while let Some(current) = stack.pop() {
        let distance = distance_tesseroid_point(point, &current);
        let dimensions = tesseroid_dimensions(&current);

        let n_lon = Split::when(distance / dimensions.lon < distance_size_ratio);
        let n_lat = Split::when(distance / dimensions.lat < distance_size_ratio);
        let n_rad = Split::when(
            mode.splits_radius() && distance / dimensions.radial < distance_size_ratio,
        );

        if n_lon == Split::NoSplit && n_lat == Split::NoSplit && n_rad == Split::NoSplit {
            small_tesseroids.push(current).map_err(report_overflow)?;
        } else {
            split_tesseroid(&current, n_lon, n_lat, n_rad, stack).map_err(report_overflow)?;
            n_subdivisions += 1;
            max_depth = max_depth.max(stack.len());
        }
    }

    debug!(
        "Discretized tesseroid {:?} into {} pieces ({} subdivisions, max stack depth {}/{})",
        tesseroid.to_array(),
        small_tesseroids.len(),
        n_subdivisions,
        max_depth,
        stack.capacity()
    );

    Ok(small_tesseroids.len())
}

/// Runs [`adaptive_discretization`] and reports `(n_splits, error_code)`
///
/// The error code is `0` on success and the
/// [`error_code`](DiscretizationError::error_code) of the failure otherwise,
/// in which case `n_splits` is the number of pieces accepted before an
/// overflow and `0` for rejected arguments.
pub fn discretization_status(
    point: &ObservationPoint,
    tesseroid: &Tesseroid,
    distance_size_ratio: f64,
    stack: &mut TesseroidStack,
    small_tesseroids: &mut SmallTesseroids,
    mode: Mode,
) -> (usize, i32) {
    let result = adaptive_discretization(
        point,
        tesseroid,
        distance_size_ratio,
        stack,
        small_tesseroids,
        mode,
    );
    match result {
        Ok(n_splits) => (n_splits, 0),
        Err(err) if err.is_overflow() => (small_tesseroids.len(), err.error_code()),
        Err(err) => (0, err.error_code()),
    }
}

/// Whether the point radius lies strictly between the bottom and top radii
fn inside_radial_span(point: &ObservationPoint, tesseroid: &Tesseroid) -> bool {
    point.radius > tesseroid.bottom && point.radius < tesseroid.top
}

fn validate_arguments(
    point: &ObservationPoint,
    tesseroid: &Tesseroid,
    distance_size_ratio: f64,
) -> Result<()> {
    tesseroid.validate()?;
    point.validate()?;
    if !(distance_size_ratio.is_finite() && distance_size_ratio > 0.0) {
        return Err(invalid_arg(format!(
            "distance-size ratio must be positive and finite, got {}",
            distance_size_ratio
        )));
    }
    Ok(())
}

fn report_overflow(err: DiscretizationError) -> DiscretizationError {
    warn!("Adaptive discretization aborted: {}", err);
    err
}
