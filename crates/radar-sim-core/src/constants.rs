//! Simulation constants and tuning parameters.

// --- Radar ---

/// Default radar display range in meters (10 km).
pub const RADAR_RANGE_DEFAULT: f32 = 10_000.0;

/// Contacts beyond `range * BOUNDARY_FACTOR` on an axis get reflected.
pub const BOUNDARY_FACTOR: f32 = 1.2;

/// Damping applied to a reflected coordinate.
pub const BOUNDARY_DAMPING: f32 = 0.9;

// --- Motion ---

/// Meters per second in one knot.
pub const KNOTS_TO_MPS: f32 = 0.514_444;

/// Speed cap used for motion integration, in knots.
pub const MAX_SPEED_KNOTS: f32 = 10.0;

/// Speed cap used for motion integration (m/s). Stored speeds may exceed it.
pub const MAX_SPEED_MPS: f32 = MAX_SPEED_KNOTS * KNOTS_TO_MPS;

/// Fraction of a vessel's speed applied per tick (world time per tick).
pub const SPEED_SCALE: f32 = 0.2;

// --- Course corrections ---

/// Headings are perturbed on ticks that are a multiple of this interval.
pub const COURSE_CORRECTION_INTERVAL: u64 = 50;

/// Upper bound (exclusive) of the uniform draw behind a course change.
pub const COURSE_CHANGE_SPAN: u32 = 100;

/// Draw value that maps to no heading change.
pub const COURSE_CHANGE_OFFSET: i32 = 50;

/// Radians of heading change per unit of the centered draw.
pub const COURSE_CHANGE_STEP: f32 = 0.01;

// --- Fleet ---

/// Number of vessels in the built-in fleet table.
pub const DEFAULT_VESSEL_COUNT: usize = 8;

/// Largest vessel id. Ids are exported as `f32`, which represents every
/// integer up to 2^24 exactly.
pub const MAX_VESSEL_ID: u32 = 1 << 24;

/// Callsign storage in bytes, including the NUL terminator.
pub const CALLSIGN_CAPACITY: usize = 16;

/// Longest callsign that fits alongside its terminator.
pub const CALLSIGN_MAX_LEN: usize = CALLSIGN_CAPACITY - 1;

/// Returned for callsign lookups outside the active set.
pub const UNKNOWN_CALLSIGN: &str = "UNKNOWN";

// --- Export ---

/// Values written per vessel by the position export: x, y, speed, heading, id.
pub const EXPORT_STRIDE: usize = 5;
