//! Radar snapshot: the complete visible state handed to a host each frame.

use serde::{Deserialize, Serialize};

use crate::types::OwnShip;

/// Everything a display needs after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarSnapshot {
    pub tick: u64,
    pub range_meters: f32,
    pub own_ship: OwnShipView,
    /// In contact index order.
    pub contacts: Vec<ContactView>,
}

/// One contact as the host sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactView {
    /// Zero-based position in the active set.
    pub index: usize,
    pub id: u32,
    pub callsign: String,
    /// Meters.
    pub x: f32,
    /// Meters.
    pub y: f32,
    /// Stored speed (m/s).
    pub speed: f32,
    /// Radians.
    pub heading: f32,
    /// Radians.
    pub course: f32,
}

/// Own ship as last reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnShipView {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

impl From<OwnShip> for OwnShipView {
    fn from(own: OwnShip) -> Self {
        Self {
            x: own.x,
            y: own.y,
            heading: own.heading,
        }
    }
}
