//! Fundamental simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Accept a radar range only if it is finite and above zero.
///
/// The boundary limit is derived from it, so zero, negative or NaN ranges
/// would flip or never contain contacts.
pub fn validate_radar_range(meters: f32) -> Result<f32, ConfigError> {
    if meters.is_finite() && meters > 0.0 {
        Ok(meters)
    } else {
        Err(ConfigError::InvalidRadarRange(meters))
    }
}

/// Position and heading of the observing platform.
///
/// Recorded for the host and reported in snapshots. Contact motion does not
/// depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnShip {
    /// Meters east of the origin.
    pub x: f32,
    /// Meters north of the origin.
    pub y: f32,
    /// Radians.
    pub heading: f32,
}

impl OwnShip {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
