//! Core types and definitions for the radar contact simulator.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vessels, callsigns, the initial fleet table, snapshot views and
//! constants. It has no dependency on any host binding or runtime.

pub mod callsign;
pub mod constants;
pub mod error;
pub mod fleet;
pub mod state;
pub mod types;
pub mod vessel;

pub use callsign::Callsign;
pub use error::{ConfigError, FleetError};
pub use fleet::{Fleet, VesselSpec};
pub use types::{validate_radar_range, OwnShip};
pub use vessel::Vessel;

#[cfg(test)]
mod tests;
