//! Isostatic compensation of topography
//!
//! Builds the compensating masses that are usually modelled with tesseroids
//! under a topography grid.
//!
//! - **Airy**: topography is supported by a thickened crust (a root) on the
//!   continents and a thinned crust (an anti-root) under the oceans. The
//!   result is the Moho depth.
//! - **Pratt**: the crust has a uniform thickness down to a compensation
//!   depth and its density varies laterally. The result is the density of
//!   each crustal column.
//!
//! Heights are in meters (negative for bathymetry) and densities in kg/m³.

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::constants::{
    DENSITY_CRUST, DENSITY_MANTLE, DENSITY_WATER, PRATT_COMPENSATION_DEPTH, REFERENCE_MOHO_DEPTH,
};
use crate::errors::{invalid_arg, Result};

/// Densities and reference depth for Airy isostasy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiryParams {
    pub density_crust: f64,
    pub density_mantle: f64,
    pub density_water: f64,
    /// Moho depth under zero topography; use 0 to get root thicknesses
    pub reference_depth: f64,
}

impl Default for AiryParams {
    fn default() -> Self {
        AiryParams {
            density_crust: DENSITY_CRUST,
            density_mantle: DENSITY_MANTLE,
            density_water: DENSITY_WATER,
            reference_depth: REFERENCE_MOHO_DEPTH,
        }
    }
}

/// Compensation depth and densities for Pratt isostasy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrattParams {
    pub compensation_depth: f64,
    pub density_crust: f64,
    pub density_water: f64,
}

impl Default for PrattParams {
    fn default() -> Self {
        PrattParams {
            compensation_depth: PRATT_COMPENSATION_DEPTH,
            density_crust: DENSITY_CRUST,
            density_water: DENSITY_WATER,
        }
    }
}

/// Isostatic Moho depth under the Airy hypothesis
///
/// On the continents (`h >= 0`) the root thickness is
/// `r = ρc / (ρm - ρc) · h`; under the oceans (`h < 0`) it is
/// `r = (ρc - ρw) / (ρm - ρc) · h`. The Moho depth is `H + r`.
///
/// # Errors
///
/// Returns an invalid-argument error unless the mantle is denser than the
/// crust.
pub fn isostasy_airy<S, D>(
    topography: &ArrayBase<S, D>,
    params: &AiryParams,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let contrast = params.density_mantle - params.density_crust;
    if contrast.is_nan() || contrast <= 0.0 {
        return Err(invalid_arg(format!(
            "mantle density ({}) must be greater than crust density ({})",
            params.density_mantle, params.density_crust
        )));
    }

    let continent_scale = params.density_crust / contrast;
    let ocean_scale = (params.density_crust - params.density_water) / contrast;

    Ok(topography.mapv(|height| {
        let scale = if height < 0.0 {
            ocean_scale
        } else {
            continent_scale
        };
        height * scale + params.reference_depth
    }))
}

/// Crustal density under the Pratt hypothesis
///
/// On the continents (`h >= 0`) the density is `ρc · D / (h + D)`; under the
/// oceans (`h < 0`, depth `d = -h`) it is `(ρc · D - ρw · d) / (D - d)`, where
/// `D` is the compensation depth.
///
/// # Errors
///
/// Returns an invalid-argument error if the compensation depth is not
/// positive or if some bathymetry reaches it.
pub fn isostasy_pratt<S, D>(
    topography: &ArrayBase<S, D>,
    params: &PrattParams,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let depth = params.compensation_depth;
    if depth.is_nan() || depth <= 0.0 {
        return Err(invalid_arg(format!("compensation depth must be positive, got {}", depth)));
    }
    let deepest = topography.iter().copied().find(|&height| -height >= depth);
    if let Some(deepest) = deepest {
        return Err(invalid_arg(format!(
            "bathymetry of {} m reaches the compensation depth of {} m",
            deepest, depth
        )));
    }

    Ok(topography.mapv(|height| {
        if height < 0.0 {
            let water_depth = -height;
            let mass = params.density_crust * depth - params.density_water * water_depth;
            mass / (depth - water_depth)
        } else {
            params.density_crust * depth / (height + depth)
        }
    }))
}
