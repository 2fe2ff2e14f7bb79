//! Discretization settings loaded from JSON
//!
//! Every field is optional in the JSON document; missing fields take the
//! library defaults.
//!
//! ```json
//! {
//!   "distance_size_ratio": 2.5,
//!   "radial_discretization": true,
//!   "stack_size": 200
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    Field, DEFAULT_DISTANCE_SIZE_RATIO_POTENTIAL, MAX_DISCRETIZATIONS, MAX_DISCRETIZATIONS_3D,
    STACK_SIZE,
};
use crate::discretization::{DiscretizationScratch, Mode};
use crate::errors::{DiscretizationError, Result};

/// Accuracy and capacity settings for adaptive discretization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscretizationConfig {
    /// Minimum distance to size ratio of an accepted piece
    pub distance_size_ratio: f64,
    /// Split along the radial axis too
    pub radial_discretization: bool,
    /// Capacity of the split work-list
    pub stack_size: usize,
    /// Capacity of the output buffer; `None` picks the default for the mode
    pub max_discretizations: Option<usize>,
}

impl Default for DiscretizationConfig {
    fn default() -> Self {
        DiscretizationConfig {
            distance_size_ratio: DEFAULT_DISTANCE_SIZE_RATIO_POTENTIAL,
            radial_discretization: false,
            stack_size: STACK_SIZE,
            max_discretizations: None,
        }
    }
}

impl DiscretizationConfig {
    /// Default settings with the distance-size ratio recommended for `field`
    pub fn for_field(field: Field) -> Self {
        DiscretizationConfig {
            distance_size_ratio: field.default_distance_size_ratio(),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DiscretizationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading discretization config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.distance_size_ratio.is_finite() && self.distance_size_ratio > 0.0) {
            return Err(DiscretizationError::Config(format!(
                "distance_size_ratio must be positive and finite, got {}",
                self.distance_size_ratio
            )));
        }
        if self.stack_size == 0 {
            return Err(DiscretizationError::Config("stack_size must be at least 1".to_string()));
        }
        if self.max_discretizations == Some(0) {
            return Err(DiscretizationError::Config(
                "max_discretizations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        Mode::from_radial_discretization(self.radial_discretization)
    }

    /// Output capacity, falling back to the default for the mode
    pub fn output_capacity(&self) -> usize {
        self.max_discretizations.unwrap_or(match self.mode() {
            Mode::TwoDimensional => MAX_DISCRETIZATIONS,
            Mode::ThreeDimensional => MAX_DISCRETIZATIONS_3D,
        })
    }

    /// Allocates a scratch buffer pair matching this configuration
    pub fn scratch(&self) -> DiscretizationScratch {
        DiscretizationScratch::with_capacities(self.mode(), self.stack_size, self.output_capacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DiscretizationConfig::default();
        assert_eq!(config.distance_size_ratio, 1.0);
        assert_eq!(config.mode(), Mode::TwoDimensional);
        assert_eq!(config.output_capacity(), MAX_DISCRETIZATIONS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_field() {
        let gz = DiscretizationConfig::for_field(Field::GZ);
        assert_eq!(gz.distance_size_ratio, 2.5);
        assert_eq!(
            DiscretizationConfig::for_field(Field::Potential),
            DiscretizationConfig::default()
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"radial_discretization": true}"#;
        let config = DiscretizationConfig::from_json_str(json).unwrap();
        assert_eq!(config.mode(), Mode::ThreeDimensional);
        assert_eq!(config.stack_size, STACK_SIZE);
        assert_eq!(config.output_capacity(), MAX_DISCRETIZATIONS_3D);
    }

    #[test]
    fn test_json_round_trip() {
        let config = DiscretizationConfig {
            distance_size_ratio: 2.5,
            radial_discretization: true,
            stack_size: 64,
            max_discretizations: Some(1000),
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(DiscretizationConfig::from_json_str(&json).unwrap(), config);

        let scratch = config.scratch();
        assert_eq!(scratch.stack_capacity(), 64);
        assert_eq!(scratch.output_capacity(), 1000);
        assert_eq!(scratch.mode(), Mode::ThreeDimensional);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for json in [
            r#"{"distance_size_ratio": 0.0}"#,
            r#"{"distance_size_ratio": -2.0}"#,
            r#"{"stack_size": 0}"#,
            r#"{"max_discretizations": 0}"#,
        ] {
            let err = DiscretizationConfig::from_json_str(json).unwrap_err();
            assert!(matches!(err, DiscretizationError::Config(_)), "{}", json);
        }
        assert!(matches!(
            DiscretizationConfig::from_json_str("{not json").unwrap_err(),
            DiscretizationError::Json(_)
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"distance_size_ratio": 4.0, "stack_size": 32}}"#).unwrap();

        let config = DiscretizationConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.distance_size_ratio, 4.0);
        assert_eq!(config.stack_size, 32);

        let missing = DiscretizationConfig::from_json_file("/nonexistent/tesseroids.json");
        assert!(matches!(missing.unwrap_err(), DiscretizationError::Io(_)));
    }
}
