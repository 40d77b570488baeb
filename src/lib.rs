//! Head orientation and face crop estimation from 3D facial landmarks.
//!
//! This library takes the per-frame landmark output of an external face
//! mesh solution (MediaPipe Face Mesh numbering, normalized coordinates)
//! and computes:
//! 1. A pose basis: lateral, vertical, and forward axes derived from four
//!    anatomical reference points via a cross product
//! 2. A forward-facing classification comparing the forward axis angles
//!    against a calibrated target window
//! 3. For forward-facing frames, a margin-expanded crop rectangle and a
//!    landmark centroid in pixel space of a reference image
//!
//! Face detection, landmark inference, camera capture, and rendering are
//! external collaborators; the estimator is a pure, stateless transform
//! invoked once per frame.
//!
//! # Examples
//!
//! ## Per-frame classification
//!
//! ```
//! use face_orient::estimator::OrientationEstimator;
//! use face_orient::landmark::Landmark;
//!
//! # fn main() -> face_orient::Result<()> {
//! let estimator = OrientationEstimator::default();
//!
//! // Landmarks arrive from the external inference pipeline, one set per
//! // frame, 468 points in the face mesh numbering.
//! let landmarks = vec![Landmark::new(0.5, 0.5, 0.0); 468];
//!
//! let estimate = estimator.compute(&landmarks)?;
//! println!("{}", estimate.diagnostic());
//! # Ok(())
//! # }
//! ```
//!
//! ## Cropping forward-facing frames
//!
//! ```
//! use face_orient::estimator::OrientationEstimator;
//! use face_orient::landmark::Landmark;
//!
//! # fn main() -> face_orient::Result<()> {
//! let estimator = OrientationEstimator::default();
//! let landmarks = vec![Landmark::new(0.5, 0.5, 0.0); 468];
//!
//! // The reference size is the pixel dimensions of the full-resolution
//! // image snapshot the crop will be applied to.
//! let (estimate, crop) = estimator.compute_with_crop(&landmarks, 1280, 720)?;
//! if let Some(crop) = crop {
//!     println!(
//!         "crop at ({}, {}), size {} x {}",
//!         crop.region.x, crop.region.y, crop.region.width, crop.region.height
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Streaming through a channel
//!
//! ```
//! use face_orient::estimator::OrientationEstimator;
//! use face_orient::landmark::Landmark;
//! use face_orient::pipeline::{spawn_estimator, LandmarkFrame};
//! use std::sync::mpsc::channel;
//!
//! let (sender, frames) = channel();
//! let (events, handle) = spawn_estimator(OrientationEstimator::default(), None, frames);
//!
//! sender
//!     .send(LandmarkFrame {
//!         index: 0,
//!         landmarks: vec![Landmark::new(0.5, 0.5, 0.0); 468],
//!     })
//!     .unwrap();
//! drop(sender);
//!
//! for event in events {
//!     println!("frame {}: {}", event.frame_index, event.estimate.forward_facing);
//! }
//! handle.join().unwrap();
//! ```

/// Landmark data model and anatomical index schema
pub mod landmark;

/// Pose basis derivation and forward-facing classification
pub mod orientation;

/// Crop region and centroid computation
pub mod crop;

/// Per-frame estimation entry point
pub mod estimator;

/// Channel-based frame delivery pipeline
pub mod pipeline;

/// Error types and result handling
pub mod error;

/// Configuration management
pub mod config;

/// Constants used throughout the library
pub mod constants;

pub use error::{Error, Result};
