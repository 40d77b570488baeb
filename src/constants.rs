//! Constants used throughout the library

/// Number of landmarks produced by the MediaPipe Face Mesh model
pub const NUM_FACE_MESH_LANDMARKS: usize = 468;

/// Landmark index of the top of the forehead
pub const DEFAULT_TOP_INDEX: usize = 10;

/// Landmark index of the bottom of the chin
pub const DEFAULT_BOTTOM_INDEX: usize = 152;

/// Landmark index of the left cheek
pub const DEFAULT_LEFT_CHEEK_INDEX: usize = 425;

/// Landmark index of the right cheek
pub const DEFAULT_RIGHT_CHEEK_INDEX: usize = 205;

/// Minimum landmark count implied by the default indices (max index + 1)
pub const MIN_LANDMARKS: usize = 426;

/// Magnitude the basis axes are rescaled to ("percent of unit vector")
pub const AXIS_SCALE: f64 = 100.0;

/// Wide calibration: target angles in degrees for the forward axis
pub const WIDE_TARGET: [f64; 3] = [90.0, 180.0, 90.0];

/// Wide calibration: symmetric tolerance in degrees
pub const WIDE_TOLERANCE: f64 = 5.0;

/// Narrow calibration: target angles in degrees for the forward axis
pub const NARROW_TARGET: [f64; 3] = [90.0, 175.0, 90.0];

/// Narrow calibration: symmetric tolerance in degrees
pub const NARROW_TOLERANCE: f64 = 3.0;

/// Left margin added to the tight face box, as a fraction of its width
pub const CROP_LEFT_MARGIN_RATIO: f64 = 0.25;

/// Top margin added to the tight face box, as a fraction of its height
pub const CROP_TOP_MARGIN_RATIO: f64 = 0.125;

/// Width growth factor applied to the tight face box
pub const CROP_WIDTH_FACTOR: f64 = 1.5;

/// Height growth factor applied to the tight face box
pub const CROP_HEIGHT_FACTOR: f64 = 1.75;
