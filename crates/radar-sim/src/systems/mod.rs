//! Per-tick systems that operate on the vessel collection.
//!
//! Systems are plain functions over a vessel slice. They do not own state;
//! everything they touch is passed in by the engine.

pub mod boundary;
pub mod course;
pub mod export;
pub mod movement;
pub mod setup;
pub mod snapshot;
