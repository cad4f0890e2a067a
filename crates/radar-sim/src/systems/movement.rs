//! Kinematic integration system.
//!
//! Moves each vessel along its heading: position += dir(heading) * v * scale,
//! where v is the stored speed capped at the motion limit.

use glam::Vec2;

use radar_sim_core::constants::{MAX_SPEED_MPS, SPEED_SCALE};
use radar_sim_core::Vessel;

/// Run kinematic integration for all vessels.
pub fn run(vessels: &mut [Vessel]) {
    for vessel in vessels.iter_mut() {
        let step = displacement(vessel);
        vessel.position += step;
    }
}

/// Speed actually used for motion (m/s).
pub fn effective_speed(vessel: &Vessel) -> f32 {
    vessel.speed.min(MAX_SPEED_MPS)
}

/// Distance covered by a vessel in one tick.
pub fn displacement(vessel: &Vessel) -> Vec2 {
    Vec2::from_angle(vessel.heading()) * (effective_speed(vessel) * SPEED_SCALE)
}
