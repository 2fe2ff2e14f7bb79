//! Constants module for tesseroid discretization

// Buffer capacities
/// Capacity of the split work-list (maximum number of pending tesseroids)
pub const STACK_SIZE: usize = 100;
/// Capacity of the small tesseroids buffer when only horizontal splits happen
pub const MAX_DISCRETIZATIONS: usize = 100_000;
/// Capacity of the small tesseroids buffer when radial splits are enabled
pub const MAX_DISCRETIZATIONS_3D: usize = 1_000_000;

const _: () = assert!(MAX_DISCRETIZATIONS_3D > MAX_DISCRETIZATIONS);
// Room for one full 3D split of the seed tesseroid
const _: () = assert!(STACK_SIZE >= 8);

// Distance-size ratios
/// Default distance-size ratio for the gravitational potential
pub const DEFAULT_DISTANCE_SIZE_RATIO_POTENTIAL: f64 = 1.0;
/// Default distance-size ratio for the radial gravitational acceleration
pub const DEFAULT_DISTANCE_SIZE_RATIO_G_Z: f64 = 2.5;

// Isostasy
/// Default crust density in kg/m³
pub const DENSITY_CRUST: f64 = 2.8e3;
/// Default mantle density in kg/m³
pub const DENSITY_MANTLE: f64 = 3.3e3;
/// Default sea water density in kg/m³
pub const DENSITY_WATER: f64 = 1e3;
/// Default reference Moho depth in meters
pub const REFERENCE_MOHO_DEPTH: f64 = 30e3;
/// Default Pratt compensation depth in meters
pub const PRATT_COMPENSATION_DEPTH: f64 = 100e3;

/// Field computed from the discretized tesseroids
///
/// Only used to pick a sensible default accuracy; the quadrature that
/// evaluates the field lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Gravitational potential
    Potential,
    /// Radial component of the gravitational acceleration
    GZ,
}

impl Field {
    /// Distance-size ratio recommended for this field
    pub fn default_distance_size_ratio(self) -> f64 {
        match self {
            Field::Potential => DEFAULT_DISTANCE_SIZE_RATIO_POTENTIAL,
            Field::GZ => DEFAULT_DISTANCE_SIZE_RATIO_G_Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ratios() {
        assert_eq!(Field::Potential.default_distance_size_ratio(), 1.0);
        assert_eq!(Field::GZ.default_distance_size_ratio(), 2.5);
    }
}
