//! Pose basis derivation and forward-facing classification.
//!
//! Four reference landmarks give two spanning vectors across the face;
//! their cross product points out of the face. The angles between the
//! forward axis and the Cartesian unit axes are compared against a
//! calibrated target window to decide whether the head is facing the
//! camera head-on.

use crate::constants::{AXIS_SCALE, NARROW_TARGET, NARROW_TOLERANCE, WIDE_TARGET, WIDE_TOLERANCE};
use crate::landmark::{Landmark, LandmarkIndices};
use crate::Result;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// The three derived head-pose axes.
///
/// Each axis is rescaled to magnitude 100 rather than unit length, a
/// readability convention ("percent of unit vector") for the diagnostic
/// output. Angle computation divides by the norm, so classification is
/// independent of this scale. Degenerate landmark geometry produces NaN
/// components here; those flow through [`axis_angles`] and make
/// [`Calibration::is_forward`] return `false` under IEEE comparison
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseBasis {
    /// Right-cheek-to-left-cheek axis
    pub lateral: Vector3<f64>,
    /// Chin-to-forehead axis
    pub vertical: Vector3<f64>,
    /// Out-of-the-face axis, `lateral × vertical`
    pub forward: Vector3<f64>,
}

/// Per-axis angles in degrees between a vector and the Cartesian unit axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseAngles {
    /// Angle to the x axis
    pub x: f64,
    /// Angle to the y axis
    pub y: f64,
    /// Angle to the z axis
    pub z: f64,
}

impl PoseAngles {
    /// The angles as an `[x, y, z]` array
    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Derive the head-pose basis from a landmark set.
///
/// The operand order of the cross product is part of the contract: the
/// forward-facing calibrations are tuned against `lateral × vertical`,
/// which fixes which side of the face the forward axis leaves from.
///
/// # Errors
///
/// Returns [`Error::InsufficientLandmarks`](crate::Error::InsufficientLandmarks)
/// if the set cannot be indexed by `indices`. Coincident reference points
/// are not an error; they yield NaN axes that classify as not forward.
pub fn derive_basis(landmarks: &[Landmark], indices: &LandmarkIndices) -> Result<PoseBasis> {
    indices.check(landmarks)?;

    let top = landmarks[indices.top].to_vector();
    let bottom = landmarks[indices.bottom].to_vector();
    let left_cheek = landmarks[indices.left_cheek].to_vector();
    let right_cheek = landmarks[indices.right_cheek].to_vector();

    let lateral = left_cheek - right_cheek;
    let vertical = top - bottom;
    let forward = lateral.cross(&vertical);

    Ok(PoseBasis {
        lateral: rescale(&lateral),
        vertical: rescale(&vertical),
        forward: rescale(&forward),
    })
}

/// Rescale a vector to magnitude [`AXIS_SCALE`].
///
/// A zero vector divides by zero and yields NaN components, which is the
/// intended degenerate-geometry signal.
fn rescale(v: &Vector3<f64>) -> Vector3<f64> {
    v * (AXIS_SCALE / v.norm())
}

/// Compute the angle in degrees between `v` and each Cartesian unit axis.
///
/// Uses `acos(v[i] / ‖v‖)`, so the result is invariant under positive
/// scaling of `v`. NaN components propagate into the angles.
#[must_use]
pub fn axis_angles(v: &Vector3<f64>) -> PoseAngles {
    let norm = v.norm();
    PoseAngles {
        x: (v[0] / norm).acos().to_degrees(),
        y: (v[1] / norm).acos().to_degrees(),
        z: (v[2] / norm).acos().to_degrees(),
    }
}

/// Forward-facing calibration: target angles and a symmetric tolerance.
///
/// Two calibrations were used historically; which one is the intended
/// production setting is an open question, so both are exposed as named
/// presets and the choice is configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Target angles in degrees for the forward axis, per Cartesian axis
    pub target: [f64; 3],
    /// Symmetric tolerance window in degrees
    pub tolerance: f64,
}

impl Calibration {
    /// Wide calibration: (90°, 180°, 90°) ± 5°
    #[must_use]
    pub const fn wide() -> Self {
        Self {
            target: WIDE_TARGET,
            tolerance: WIDE_TOLERANCE,
        }
    }

    /// Narrow calibration: (90°, 175°, 90°) ± 3°
    #[must_use]
    pub const fn narrow() -> Self {
        Self {
            target: NARROW_TARGET,
            tolerance: NARROW_TOLERANCE,
        }
    }

    /// Classify a frame as forward-facing from its forward-axis angles.
    ///
    /// All three angles must fall inside `target ± tolerance`. NaN angles
    /// fail the comparison and classify as not forward; this never errors.
    #[must_use]
    pub fn is_forward(&self, angles: &PoseAngles) -> bool {
        let angles = angles.as_array();
        (0..3).all(|i| about_equal(angles[i], self.target[i], self.tolerance))
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::wide()
    }
}

/// True iff `approx - error <= number <= approx + error` (false for NaN)
fn about_equal(number: f64, approx: f64, error: f64) -> bool {
    approx - error <= number && number <= approx + error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_LANDMARKS;

    /// Build a landmark set where only the four reference points matter
    fn make_landmarks(
        top: Landmark,
        bottom: Landmark,
        left_cheek: Landmark,
        right_cheek: Landmark,
    ) -> Vec<Landmark> {
        let indices = LandmarkIndices::default();
        let mut landmarks = vec![Landmark::new(0.5, 0.5, 0.0); MIN_LANDMARKS];
        landmarks[indices.top] = top;
        landmarks[indices.bottom] = bottom;
        landmarks[indices.left_cheek] = left_cheek;
        landmarks[indices.right_cheek] = right_cheek;
        landmarks
    }

    #[test]
    fn test_basis_axes_and_cross_product_order() {
        // lateral = (1, 0, 0), vertical = (0, 1, 0) => forward = (0, 0, 1)
        let landmarks = make_landmarks(
            Landmark::new(0.5, 1.0, 0.0),
            Landmark::new(0.5, 0.0, 0.0),
            Landmark::new(1.0, 0.5, 0.0),
            Landmark::new(0.0, 0.5, 0.0),
        );
        let basis = derive_basis(&landmarks, &LandmarkIndices::default()).unwrap();

        assert!((basis.lateral - Vector3::new(100.0, 0.0, 0.0)).norm() < 1e-9);
        assert!((basis.vertical - Vector3::new(0.0, 100.0, 0.0)).norm() < 1e-9);
        assert!((basis.forward - Vector3::new(0.0, 0.0, 100.0)).norm() < 1e-9);
    }

    #[test]
    fn test_degenerate_landmarks_yield_nan_not_error() {
        let point = Landmark::new(0.5, 0.5, 0.0);
        let landmarks = make_landmarks(point, point, point, point);
        let basis = derive_basis(&landmarks, &LandmarkIndices::default()).unwrap();

        assert!(basis.lateral.iter().all(|c| c.is_nan()));
        assert!(basis.vertical.iter().all(|c| c.is_nan()));
        assert!(basis.forward.iter().all(|c| c.is_nan()));

        let angles = axis_angles(&basis.forward);
        assert!(!Calibration::wide().is_forward(&angles));
        assert!(!Calibration::narrow().is_forward(&angles));
    }

    #[test]
    fn test_axis_angles_cardinal_directions() {
        let angles = axis_angles(&Vector3::new(0.0, 0.0, 1.0));
        assert!((angles.x - 90.0).abs() < 1e-9);
        assert!((angles.y - 90.0).abs() < 1e-9);
        assert!(angles.z.abs() < 1e-9);

        let angles = axis_angles(&Vector3::new(0.0, -1.0, 0.0));
        assert!((angles.x - 90.0).abs() < 1e-9);
        assert!((angles.y - 180.0).abs() < 1e-9);
        assert!((angles.z - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_angles_scale_invariant() {
        let v = Vector3::new(3.0, -4.0, 12.0);
        let a = axis_angles(&v);
        let b = axis_angles(&(v * 250.0));
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
        assert!((a.z - b.z).abs() < 1e-9);
    }

    #[test]
    fn test_forward_classification_inside_and_outside_tolerance() {
        // (90, 180, 90): dead-on under the wide preset, outside the narrow one
        let head_on = axis_angles(&Vector3::new(0.0, -1.0, 0.0));
        assert!(Calibration::wide().is_forward(&head_on));
        assert!(!Calibration::narrow().is_forward(&head_on));

        // (90, 90, 0): fails both presets on the y axis
        let sideways = axis_angles(&Vector3::new(0.0, 0.0, 1.0));
        assert!(!Calibration::wide().is_forward(&sideways));
        assert!(!Calibration::narrow().is_forward(&sideways));
    }

    #[test]
    fn test_tolerance_window_is_inclusive() {
        let calibration = Calibration::wide();
        let at_edge = PoseAngles {
            x: 95.0,
            y: 175.0,
            z: 85.0,
        };
        assert!(calibration.is_forward(&at_edge));

        let past_edge = PoseAngles {
            x: 95.1,
            y: 175.0,
            z: 85.0,
        };
        assert!(!calibration.is_forward(&past_edge));
    }

    #[test]
    fn test_about_equal_nan_is_false() {
        assert!(!about_equal(f64::NAN, 90.0, 5.0));
        assert!(about_equal(90.0, 90.0, 0.0));
    }
}
