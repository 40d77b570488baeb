//! Landmark data model and the anatomical index schema.
//!
//! Landmarks follow the MediaPipe Face Mesh convention: x and y are
//! normalized to [0, 1] relative to image width and height, y grows
//! downward, and z is a relative depth sharing x's unit. The four
//! reference points used for pose derivation are addressed by fixed
//! anatomical indices into the 468-point mesh.

use crate::constants::{
    DEFAULT_BOTTOM_INDEX, DEFAULT_LEFT_CHEEK_INDEX, DEFAULT_RIGHT_CHEEK_INDEX, DEFAULT_TOP_INDEX,
};
use crate::{Error, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A single 3D facial landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, normalized to image width
    pub x: f64,
    /// Vertical position, normalized to image height (grows downward)
    pub y: f64,
    /// Relative depth, in the same unit as x
    pub z: f64,
}

impl Landmark {
    /// Create a new landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// View the landmark as a position vector
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Landmark> for Vector3<f64> {
    fn from(landmark: Landmark) -> Self {
        landmark.to_vector()
    }
}

/// Anatomical indices of the four reference landmarks.
///
/// The defaults match the MediaPipe Face Mesh numbering. "Left" and
/// "right" follow the mesh convention and are mirrored when the capture
/// pipeline flips the image horizontally; that is the producer's
/// convention, not something this crate controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkIndices {
    /// Top of the forehead
    pub top: usize,
    /// Bottom of the chin
    pub bottom: usize,
    /// Left cheek
    pub left_cheek: usize,
    /// Right cheek
    pub right_cheek: usize,
}

impl Default for LandmarkIndices {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP_INDEX,
            bottom: DEFAULT_BOTTOM_INDEX,
            left_cheek: DEFAULT_LEFT_CHEEK_INDEX,
            right_cheek: DEFAULT_RIGHT_CHEEK_INDEX,
        }
    }
}

impl LandmarkIndices {
    /// Minimum landmark count needed to address all four reference points
    #[must_use]
    pub fn min_count(&self) -> usize {
        self.top
            .max(self.bottom)
            .max(self.left_cheek)
            .max(self.right_cheek)
            + 1
    }

    /// Check that a landmark set is long enough to be indexed
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientLandmarks`] if the set is shorter than
    /// [`min_count`](Self::min_count). Indexing must fail fast rather than
    /// silently substitute a default point.
    pub fn check(&self, landmarks: &[Landmark]) -> Result<()> {
        let required = self.min_count();
        if landmarks.len() < required {
            return Err(Error::InsufficientLandmarks {
                required,
                actual: landmarks.len(),
            });
        }
        Ok(())
    }
}
