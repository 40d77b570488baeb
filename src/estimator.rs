//! Per-frame orientation estimation entry point.

use crate::crop::{compute_crop, FaceCrop};
use crate::landmark::{Landmark, LandmarkIndices};
use crate::orientation::{axis_angles, derive_basis, Calibration, PoseAngles, PoseBasis};
use crate::Result;

/// Stateless per-frame estimator combining basis derivation,
/// forward-facing classification, and crop computation.
///
/// Holds only configuration, never per-frame state: invocations are
/// deterministic, side-effect free, and safe to run concurrently for
/// independent frames.
#[derive(Debug, Clone, Default)]
pub struct OrientationEstimator {
    indices: LandmarkIndices,
    calibration: Calibration,
}

/// Result of estimating one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEstimate {
    /// Derived head-pose axes
    pub basis: PoseBasis,
    /// Angles between the forward axis and the Cartesian unit axes
    pub angles: PoseAngles,
    /// Whether the frame classified as forward-facing
    pub forward_facing: bool,
}

impl OrientationEstimator {
    /// Create an estimator with explicit indices and calibration
    #[must_use]
    pub fn new(indices: LandmarkIndices, calibration: Calibration) -> Self {
        Self {
            indices,
            calibration,
        }
    }

    /// The configured anatomical indices
    #[must_use]
    pub fn indices(&self) -> &LandmarkIndices {
        &self.indices
    }

    /// The configured forward-facing calibration
    #[must_use]
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Estimate pose basis, angles, and the forward-facing flag for one frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientLandmarks`](crate::Error::InsufficientLandmarks)
    /// if the landmark set is too short for the configured indices.
    pub fn compute(&self, landmarks: &[Landmark]) -> Result<FrameEstimate> {
        let basis = derive_basis(landmarks, &self.indices)?;
        let angles = axis_angles(&basis.forward);
        let forward_facing = self.calibration.is_forward(&angles);

        Ok(FrameEstimate {
            basis,
            angles,
            forward_facing,
        })
    }

    /// Estimate one frame and, when it classifies forward-facing, also
    /// compute the crop region and centroid against a reference image of
    /// `width` x `height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientLandmarks`](crate::Error::InsufficientLandmarks)
    /// for short landmark sets and
    /// [`Error::DegenerateCrop`](crate::Error::DegenerateCrop) when a
    /// forward-facing frame produces a non-positive crop rectangle.
    pub fn compute_with_crop(
        &self,
        landmarks: &[Landmark],
        width: u32,
        height: u32,
    ) -> Result<(FrameEstimate, Option<FaceCrop>)> {
        let estimate = self.compute(landmarks)?;
        let crop = if estimate.forward_facing {
            Some(compute_crop(landmarks, width, height)?)
        } else {
            None
        };
        Ok((estimate, crop))
    }
}

impl FrameEstimate {
    /// Multi-line diagnostic report: the three basis axes and the angle
    /// triple rounded to nearest integer, followed by a marker line when
    /// the frame classified forward-facing.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        format!(
            "x = ({:.0}, {:.0}, {:.0})\n\
             y = ({:.0}, {:.0}, {:.0})\n\
             z = ({:.0}, {:.0}, {:.0})\n\
             angle = ({:.0}, {:.0}, {:.0})\n\n{}",
            self.basis.forward[0],
            self.basis.forward[1],
            self.basis.forward[2],
            self.basis.lateral[0],
            self.basis.lateral[1],
            self.basis.lateral[2],
            self.basis.vertical[0],
            self.basis.vertical[1],
            self.basis.vertical[2],
            self.angles.x,
            self.angles.y,
            self.angles.z,
            if self.forward_facing { "FORWARD!!" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_LANDMARKS;

    fn forward_facing_landmarks() -> Vec<Landmark> {
        // lateral = (1, 0, 0), vertical = (0, 0, 1)
        // => forward = (0, -1, 0), angles (90, 180, 90)
        let indices = LandmarkIndices::default();
        let mut landmarks = vec![Landmark::new(0.5, 0.5, 0.0); MIN_LANDMARKS];
        landmarks[indices.top] = Landmark::new(0.5, 0.5, 1.0);
        landmarks[indices.bottom] = Landmark::new(0.5, 0.5, 0.0);
        landmarks[indices.left_cheek] = Landmark::new(1.0, 0.5, 0.0);
        landmarks[indices.right_cheek] = Landmark::new(0.0, 0.5, 0.0);
        // Spread a couple of filler points so the tight box has height
        landmarks[0] = Landmark::new(0.4, 0.3, 0.0);
        landmarks[1] = Landmark::new(0.6, 0.7, 0.0);
        landmarks
    }

    #[test]
    fn test_compute_forward_frame() {
        let estimator = OrientationEstimator::default();
        let estimate = estimator.compute(&forward_facing_landmarks()).unwrap();

        assert!(estimate.forward_facing);
        assert!((estimate.angles.x - 90.0).abs() < 1e-9);
        assert!((estimate.angles.y - 180.0).abs() < 1e-9);
        assert!((estimate.angles.z - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let estimator = OrientationEstimator::default();
        let landmarks = forward_facing_landmarks();
        let first = estimator.compute(&landmarks).unwrap();
        let second = estimator.compute(&landmarks).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_crop_only_when_forward() {
        let estimator = OrientationEstimator::default();

        let (estimate, crop) = estimator
            .compute_with_crop(&forward_facing_landmarks(), 640, 480)
            .unwrap();
        assert!(estimate.forward_facing);
        assert!(crop.is_some());

        // Same geometry under the narrow calibration is not forward
        let narrow = OrientationEstimator::new(LandmarkIndices::default(), Calibration::narrow());
        let (estimate, crop) = narrow
            .compute_with_crop(&forward_facing_landmarks(), 640, 480)
            .unwrap();
        assert!(!estimate.forward_facing);
        assert!(crop.is_none());
    }

    #[test]
    fn test_diagnostic_format() {
        let estimator = OrientationEstimator::default();
        let estimate = estimator.compute(&forward_facing_landmarks()).unwrap();
        let report = estimate.diagnostic();

        assert!(report.starts_with("x = (0, -100, 0)\n"));
        assert!(report.contains("y = (100, 0, 0)\n"));
        assert!(report.contains("z = (0, 0, 100)\n"));
        assert!(report.contains("angle = (90, 180, 90)\n"));
        assert!(report.ends_with("FORWARD!!"));
    }
}
