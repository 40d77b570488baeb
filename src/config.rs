//! Configuration management for the face orientation estimator

use crate::estimator::OrientationEstimator;
use crate::landmark::LandmarkIndices;
use crate::orientation::Calibration;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Forward-facing calibration configuration
    pub calibration: CalibrationConfig,

    /// Anatomical landmark index configuration
    pub indices: IndicesConfig,
}

/// Forward-facing calibration selection.
///
/// Two calibrations are in historical use: `wide` = (90°, 180°, 90°) ± 5°
/// and `narrow` = (90°, 175°, 90°) ± 3°. Which one is the intended
/// production setting is unresolved, so the preset is configuration, with
/// optional explicit overrides for experimentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Named preset: "wide" or "narrow"
    pub preset: String,

    /// Explicit target angles in degrees, overriding the preset's
    pub target: Option<[f64; 3]>,

    /// Explicit tolerance in degrees, overriding the preset's
    pub tolerance: Option<f64>,
}

/// Anatomical landmark indices into the upstream mesh.
///
/// Defaults match the MediaPipe Face Mesh numbering; override when the
/// upstream model changes its index layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicesConfig {
    /// Top of the forehead
    pub top: usize,

    /// Bottom of the chin
    pub bottom: usize,

    /// Left cheek
    pub left_cheek: usize,

    /// Right cheek
    pub right_cheek: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calibration: CalibrationConfig::default(),
            indices: IndicesConfig::default(),
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            preset: "wide".to_string(),
            target: None,
            tolerance: None,
        }
    }
}

impl Default for IndicesConfig {
    fn default() -> Self {
        let defaults = LandmarkIndices::default();
        Self {
            top: defaults.top,
            bottom: defaults.bottom,
            left_cheek: defaults.left_cheek,
            right_cheek: defaults.right_cheek,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Build an estimator from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn create_estimator(&self) -> Result<OrientationEstimator> {
        self.validate()?;
        Ok(OrientationEstimator::new(
            self.indices.resolve(),
            self.calibration.resolve()?,
        ))
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error for unknown presets or out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.calibration.resolve()?;

        if let Some(tolerance) = self.calibration.tolerance {
            if tolerance <= 0.0 {
                return Err(Error::ConfigError(
                    "Calibration tolerance must be greater than 0".to_string(),
                ));
            }
        }
        if let Some(target) = self.calibration.target {
            if target.iter().any(|t| !(0.0..=180.0).contains(t)) {
                return Err(Error::ConfigError(
                    "Calibration target angles must be between 0 and 180 degrees".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl CalibrationConfig {
    /// Resolve the preset and overrides into a [`Calibration`]
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown preset name.
    pub fn resolve(&self) -> Result<Calibration> {
        let mut calibration = match self.preset.as_str() {
            "wide" => Calibration::wide(),
            "narrow" => Calibration::narrow(),
            name => {
                return Err(Error::ConfigError(format!(
                    "Unknown calibration preset: {name}"
                )))
            }
        };
        if let Some(target) = self.target {
            calibration.target = target;
        }
        if let Some(tolerance) = self.tolerance {
            calibration.tolerance = tolerance;
        }
        Ok(calibration)
    }
}

impl IndicesConfig {
    /// Resolve into [`LandmarkIndices`]
    #[must_use]
    pub fn resolve(&self) -> LandmarkIndices {
        LandmarkIndices {
            top: self.top,
            bottom: self.bottom,
            left_cheek: self.left_cheek,
            right_cheek: self.right_cheek,
        }
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Orientation Estimator Configuration

# Forward-facing calibration
# preset: "wide"   = targets (90, 180, 90) degrees, tolerance 5
# preset: "narrow" = targets (90, 175, 90) degrees, tolerance 3
calibration:
  preset: "wide"
  # target: [90.0, 180.0, 90.0]
  # tolerance: 5.0

# Anatomical landmark indices (MediaPipe Face Mesh numbering)
indices:
  top: 10
  bottom: 152
  left_cheek: 425
  right_cheek: 205
"#;
