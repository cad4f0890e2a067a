//! Initial fleet tables.
//!
//! A fleet is the ordered list of vessel records the simulator loads on
//! initialize. Table order becomes contact index order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::callsign::Callsign;
use crate::constants::{DEFAULT_VESSEL_COUNT, MAX_VESSEL_ID};
use crate::error::FleetError;

/// Initial state of one vessel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselSpec {
    pub x: f32,
    pub y: f32,
    /// m/s
    pub speed: f32,
    /// Radians. Course starts equal to it.
    pub heading: f32,
    pub id: u32,
    pub callsign: Callsign,
}

impl VesselSpec {
    pub const fn new(x: f32, y: f32, speed: f32, heading: f32, id: u32, callsign: &'static str) -> Self {
        Self {
            x,
            y,
            speed,
            heading,
            id,
            callsign: Callsign::from_static(callsign),
        }
    }
}

/// Built-in contacts placed around own ship.
#[allow(clippy::approx_constant)]
pub const DEFAULT_FLEET: [VesselSpec; DEFAULT_VESSEL_COUNT] = [
    // Ahead
    VesselSpec::new(2000.0, 1500.0, 8.0, 0.78, 1, "SHIP-001"),
    // Port side
    VesselSpec::new(-1500.0, -800.0, 12.0, 3.14, 2, "SHIP-002"),
    // Starboard side
    VesselSpec::new(1800.0, -1200.0, 6.0, 2.35, 3, "SHIP-003"),
    // Astern
    VesselSpec::new(-2500.0, -1500.0, 10.0, -2.36, 4, "SHIP-004"),
    // Crossing
    VesselSpec::new(1200.0, 2000.0, 14.0, 1.57, 5, "SHIP-005"),
    // Port bow
    VesselSpec::new(-800.0, 2200.0, 9.0, 0.39, 6, "SHIP-006"),
    // Starboard quarter
    VesselSpec::new(3000.0, -2200.0, 7.0, -1.18, 7, "SHIP-007"),
    // Far port
    VesselSpec::new(-3500.0, 800.0, 11.0, 2.94, 8, "SHIP-008"),
];

/// A validated fleet table: non-empty, ids unique and in `1..=MAX_VESSEL_ID`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    specs: Vec<VesselSpec>,
}

impl Fleet {
    pub fn new(specs: Vec<VesselSpec>) -> Result<Self, FleetError> {
        if specs.is_empty() {
            return Err(FleetError::Empty);
        }

        let mut seen = HashSet::with_capacity(specs.len());
        for spec in &specs {
            if spec.id == 0 {
                return Err(FleetError::ZeroId);
            }
            if spec.id > MAX_VESSEL_ID {
                return Err(FleetError::id_out_of_range(spec.id));
            }
            if !seen.insert(spec.id) {
                return Err(FleetError::DuplicateId(spec.id));
            }
        }

        Ok(Self { specs })
    }

    /// Parse a JSON array of vessel records.
    pub fn from_json(json: &str) -> Result<Self, FleetError> {
        let specs: Vec<VesselSpec> = serde_json::from_str(json)?;
        Self::new(specs)
    }

    pub fn to_json(&self) -> Result<String, FleetError> {
        Ok(serde_json::to_string_pretty(&self.specs)?)
    }

    pub fn specs(&self) -> &[VesselSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self {
            specs: DEFAULT_FLEET.to_vec(),
        }
    }
}
