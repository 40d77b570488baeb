//! Crop region and centroid computation for forward-facing frames.
//!
//! A single pass over the landmark set yields the tight normalized
//! bounding box and the mean position. The box is converted to pixel
//! space of a caller-supplied reference image and expanded with fixed
//! margins so the crop includes hair and jaw context beyond the
//! landmark-tight extent.

use crate::constants::{
    CROP_HEIGHT_FACTOR, CROP_LEFT_MARGIN_RATIO, CROP_TOP_MARGIN_RATIO, CROP_WIDTH_FACTOR,
};
use crate::landmark::Landmark;
use crate::{Error, Result};

/// An axis-aligned crop rectangle in pixel space of the reference image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    /// Left edge in pixels
    pub x: f64,
    /// Top edge in pixels
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

/// Mean landmark position; x and y in pixels, z in relative depth units
/// scaled by the reference width (z shares x's unit upstream)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// Mean x in pixels
    pub x: f64,
    /// Mean y in pixels
    pub y: f64,
    /// Mean depth, scaled by the reference width
    pub z: f64,
}

/// Crop rectangle and centroid for one forward-facing frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCrop {
    /// Expanded crop rectangle
    pub region: CropRegion,
    /// Mean landmark position
    pub centroid: Centroid,
}

/// Compute the expanded crop region and centroid over a landmark set.
///
/// `width` and `height` are the pixel dimensions of the reference image
/// the crop will be applied to. The vertical origin is flipped
/// (`face_y = (1 - max_y) * height`): normalized y grows downward while
/// the bounding computation uses a top-left pixel origin.
///
/// # Errors
///
/// Returns [`Error::DegenerateCrop`] when the computed rectangle has
/// non-positive width or height, including the empty landmark set.
/// Downstream must not attempt to materialize such a region.
pub fn compute_crop(landmarks: &[Landmark], width: u32, height: u32) -> Result<FaceCrop> {
    // Accumulators start at the far edges of the normalized range so any
    // actual landmark, including one at exactly 0 or 1, updates them.
    let mut min_x = 1.0f64;
    let mut min_y = 1.0f64;
    let mut max_x = -1.0f64;
    let mut max_y = -1.0f64;
    let (mut sum_x, mut sum_y, mut sum_z) = (0.0f64, 0.0f64, 0.0f64);

    for landmark in landmarks {
        min_x = min_x.min(landmark.x);
        min_y = min_y.min(landmark.y);
        max_x = max_x.max(landmark.x);
        max_y = max_y.max(landmark.y);
        sum_x += landmark.x;
        sum_y += landmark.y;
        sum_z += landmark.z;
    }

    let count = landmarks.len() as f64;
    let (avg_x, avg_y, avg_z) = (sum_x / count, sum_y / count, sum_z / count);

    let width = f64::from(width);
    let height = f64::from(height);

    let face_x = min_x * width;
    let face_y = (1.0 - max_y) * height;
    let face_w = (max_x - min_x) * width;
    let face_h = (max_y - min_y) * height;

    let region = CropRegion {
        x: face_x - face_w * CROP_LEFT_MARGIN_RATIO,
        y: face_y - face_h * CROP_TOP_MARGIN_RATIO,
        width: face_w * CROP_WIDTH_FACTOR,
        height: face_h * CROP_HEIGHT_FACTOR,
    };

    if !(region.width > 0.0 && region.height > 0.0) {
        return Err(Error::DegenerateCrop {
            width: region.width,
            height: region.height,
        });
    }

    Ok(FaceCrop {
        region,
        centroid: Centroid {
            x: avg_x * width,
            y: avg_y * height,
            z: avg_z * width,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_region_fixture() {
        // x in [0.2, 0.6], y in [0.3, 0.7] on a 1000 x 2000 image
        let landmarks = vec![
            Landmark::new(0.2, 0.3, 0.0),
            Landmark::new(0.6, 0.7, 0.0),
            Landmark::new(0.4, 0.5, 0.0),
        ];
        let crop = compute_crop(&landmarks, 1000, 2000).unwrap();

        // Tight box: face_x = 200, face_y = (1 - 0.7) * 2000 = 600,
        // face_w = 400, face_h = 800. Expanded: origin (100, 500),
        // size (600, 1400).
        assert!((crop.region.x - 100.0).abs() < 1e-9);
        assert!((crop.region.y - 500.0).abs() < 1e-9);
        assert!((crop.region.width - 600.0).abs() < 1e-9);
        assert!((crop.region.height - 1400.0).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_scaling() {
        let landmarks = vec![
            Landmark::new(0.2, 0.4, -0.1),
            Landmark::new(0.6, 0.8, 0.3),
        ];
        let crop = compute_crop(&landmarks, 1000, 2000).unwrap();

        assert!((crop.centroid.x - 400.0).abs() < 1e-9);
        assert!((crop.centroid.y - 1200.0).abs() < 1e-9);
        // z is scaled by width, not height
        assert!((crop.centroid.z - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_landmark_at_normalized_edges_updates_bounds() {
        let landmarks = vec![
            Landmark::new(0.0, 0.0, 0.0),
            Landmark::new(1.0, 1.0, 0.0),
        ];
        let crop = compute_crop(&landmarks, 100, 100).unwrap();

        // Tight box covers the whole image: origin (0, 0), size (100, 100)
        assert!((crop.region.x - -25.0).abs() < 1e-9);
        assert!((crop.region.y - -12.5).abs() < 1e-9);
        assert!((crop.region.width - 150.0).abs() < 1e-9);
        assert!((crop.region.height - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_landmarks_are_degenerate() {
        let landmarks = vec![Landmark::new(0.5, 0.5, 0.0); 4];
        match compute_crop(&landmarks, 640, 480) {
            Err(Error::DegenerateCrop { width, height }) => {
                assert_eq!(width, 0.0);
                assert_eq!(height, 0.0);
            }
            other => panic!("expected DegenerateCrop, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_landmark_set_is_degenerate() {
        assert!(matches!(
            compute_crop(&[], 640, 480),
            Err(Error::DegenerateCrop { .. })
        ));
    }
}
