//! Adaptive discretization engine
//!
//! This module turns one source tesseroid and one observation point into a
//! bounded list of small tesseroids, each small enough relative to its
//! distance from the point to be integrated with a point-mass or quadrature
//! rule.
//!
//! # Main Components
//!
//! - `stack`: fixed-capacity work-list and output buffers
//! - `split`: bisection of a tesseroid along any combination of axes
//! - `adaptive`: the iterative split-or-accept loop, in 2D and 3D modes
//! - `scratch`: a reusable buffer pair for discretizing many pairs without
//!   allocating
//!
//! # Example
//!
//! ```rust
//! use tesseroids::discretization::{
//!     adaptive_discretization, Mode, SmallTesseroids, TesseroidStack,
//! };
//! use tesseroids::geometry::{ObservationPoint, Tesseroid};
//!
//! let tesseroid = Tesseroid::new(-10.0, 10.0, -10.0, 10.0, 1.0, 10.0);
//! let point = ObservationPoint::new(0.0, 0.0, 12.0);
//! let mode = Mode::TwoDimensional;
//!
//! let mut stack = TesseroidStack::default();
//! let mut small = SmallTesseroids::for_mode(mode);
//! let n = adaptive_discretization(&point, &tesseroid, 2.5, &mut stack, &mut small, mode)
//!     .unwrap();
//! assert_eq!(n, small.len());
//! assert!(n > 1);
//! ```

pub mod adaptive;
pub mod scratch;
pub mod split;
pub mod stack;

pub use self::adaptive::{adaptive_discretization, discretization_status, Mode};
pub use self::scratch::DiscretizationScratch;
pub use self::split::{split_tesseroid, Split};
pub use self::stack::{SmallTesseroids, TesseroidStack};
