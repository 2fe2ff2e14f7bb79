//! Reusable buffer pair for repeated discretizations
//!
//! Evaluating a field on many observation points against many source
//! tesseroids calls the discretizer once per pair. A `DiscretizationScratch`
//! owns both buffers so that those calls allocate nothing. Give each worker
//! its own scratch.

use crate::constants::STACK_SIZE;
use crate::discretization::adaptive::{adaptive_discretization, Mode};
use crate::discretization::stack::{SmallTesseroids, TesseroidStack};
use crate::errors::Result;
use crate::geometry::{ObservationPoint, Tesseroid};

/// Work-list and output buffers sized for one discretization mode
#[derive(Debug, Clone)]
pub struct DiscretizationScratch {
    stack: TesseroidStack,
    small_tesseroids: SmallTesseroids,
    mode: Mode,
}

impl DiscretizationScratch {
    /// Allocates buffers with the default capacities for `mode`
    pub fn new(mode: Mode) -> Self {
        DiscretizationScratch {
            stack: TesseroidStack::with_capacity(STACK_SIZE),
            small_tesseroids: SmallTesseroids::for_mode(mode),
            mode,
        }
    }

    /// Allocates buffers with explicit capacities
    pub fn with_capacities(mode: Mode, stack_size: usize, max_discretizations: usize) -> Self {
        DiscretizationScratch {
            stack: TesseroidStack::with_capacity(stack_size),
            small_tesseroids: SmallTesseroids::with_capacity(max_discretizations),
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }

    pub fn output_capacity(&self) -> usize {
        self.small_tesseroids.capacity()
    }

    /// Discretizes `tesseroid` for `point` and borrows the resulting pieces
    ///
    /// The returned slice is overwritten by the next call.
    pub fn discretize(
        &mut self,
        point: &ObservationPoint,
        tesseroid: &Tesseroid,
        distance_size_ratio: f64,
    ) -> Result<&[Tesseroid]> {
        adaptive_discretization(
            point,
            tesseroid,
            distance_size_ratio,
            &mut self.stack,
            &mut self.small_tesseroids,
            self.mode,
        )?;
        Ok(self.small_tesseroids.as_slice())
    }

    /// Pieces produced by the last successful call to [`discretize`](Self::discretize)
    pub fn small_tesseroids(&self) -> &[Tesseroid] {
        self.small_tesseroids.as_slice()
    }
}

impl Default for DiscretizationScratch {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
