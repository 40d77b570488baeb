//! Channel-based frame delivery with the estimator as a transform stage.
//!
//! Capture and rendering stay external; this module wires them together
//! with `std::sync::mpsc` channels so the estimator runs as a stateless
//! stage on its own thread. Frames that fail estimation are logged and
//! skipped, and the stage shuts down when the input channel closes.

use crate::crop::FaceCrop;
use crate::estimator::{FrameEstimate, OrientationEstimator};
use crate::landmark::Landmark;
use log::{debug, warn};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// One frame's worth of landmarks, tagged with a monotonically
/// increasing index assigned by the producer
#[derive(Debug, Clone)]
pub struct LandmarkFrame {
    /// Frame sequence number
    pub index: u64,
    /// Landmarks delivered by the inference pipeline for this frame
    pub landmarks: Vec<Landmark>,
}

/// Estimation output for one successfully processed frame
#[derive(Debug, Clone)]
pub struct EstimateEvent {
    /// Sequence number of the source frame
    pub frame_index: u64,
    /// Pose basis, angles, and classification
    pub estimate: FrameEstimate,
    /// Crop geometry, present only for forward-facing frames when the
    /// stage was given a reference image size
    pub crop: Option<FaceCrop>,
}

/// Spawn the estimator stage on a worker thread.
///
/// Reads frames from `frames`, runs the estimator, and forwards an
/// [`EstimateEvent`] per processed frame. When `reference_size` is set,
/// forward-facing frames also carry crop geometry for an image of that
/// pixel size. Frames that fail (too few landmarks, degenerate crop) are
/// skipped with a warning so a bad detection never stalls the stream.
///
/// The returned receiver yields events until the producer drops its
/// sender; join the handle afterwards to release the thread.
#[must_use]
pub fn spawn_estimator(
    estimator: OrientationEstimator,
    reference_size: Option<(u32, u32)>,
    frames: Receiver<LandmarkFrame>,
) -> (Receiver<EstimateEvent>, JoinHandle<()>) {
    let (sender, events) = channel();
    let handle = thread::spawn(move || run_stage(&estimator, reference_size, &frames, &sender));
    (events, handle)
}

fn run_stage(
    estimator: &OrientationEstimator,
    reference_size: Option<(u32, u32)>,
    frames: &Receiver<LandmarkFrame>,
    events: &Sender<EstimateEvent>,
) {
    while let Ok(frame) = frames.recv() {
        let result = match reference_size {
            Some((width, height)) => estimator.compute_with_crop(&frame.landmarks, width, height),
            None => estimator.compute(&frame.landmarks).map(|e| (e, None)),
        };

        match result {
            Ok((estimate, crop)) => {
                debug!(
                    "frame {}: forward_facing={}",
                    frame.index, estimate.forward_facing
                );
                let event = EstimateEvent {
                    frame_index: frame.index,
                    estimate,
                    crop,
                };
                if events.send(event).is_err() {
                    // Consumer went away; nothing left to do.
                    break;
                }
            }
            Err(e) => warn!("skipping frame {}: {e}", frame.index),
        }
    }
}
