//! Simulation engine for the radar contact simulator.
//!
//! Owns the vessel collection, advances it one tick at a time and exports
//! contact data in the flat layout hosts render from.

pub mod engine;
pub mod random;
pub mod systems;

pub use engine::{SimConfig, VesselSimulator};
pub use radar_sim_core as core;
pub use random::{CourseRandom, ScriptedRandom};
