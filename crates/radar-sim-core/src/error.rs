//! Errors raised while building a simulator from a fleet table or config.
//!
//! The simulation itself never fails; only construction-time input does.

use thiserror::Error;

use crate::constants::{CALLSIGN_MAX_LEN, MAX_VESSEL_ID};

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("fleet table is empty")]
    Empty,

    #[error("vessel id 0 is reserved")]
    ZeroId,

    #[error("vessel id {0} appears more than once")]
    DuplicateId(u32),

    #[error("vessel id {id} exceeds the largest exportable id {max}")]
    IdOutOfRange { id: u32, max: u32 },

    #[error("callsign {callsign:?} is longer than {max} characters")]
    CallsignTooLong { callsign: String, max: usize },

    #[error("callsign {0:?} contains non-printable characters")]
    CallsignNotPrintable(String),

    #[error("invalid fleet JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl FleetError {
    pub(crate) fn too_long(callsign: &str) -> Self {
        Self::CallsignTooLong {
            callsign: callsign.to_string(),
            max: CALLSIGN_MAX_LEN,
        }
    }

    pub(crate) fn id_out_of_range(id: u32) -> Self {
        Self::IdOutOfRange {
            id,
            max: MAX_VESSEL_ID,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("radar range must be a finite number of meters above zero, got {0}")]
    InvalidRadarRange(f32),
}
