//! Boundary containment system.
//!
//! A coordinate that strays past `range * BOUNDARY_FACTOR` is mirrored to the
//! other side and pulled in slightly, so contacts leave the display and come
//! back near the opposite edge. Axes are handled independently.

use tracing::debug;

use radar_sim_core::constants::{BOUNDARY_DAMPING, BOUNDARY_FACTOR};
use radar_sim_core::Vessel;

/// Reflect out-of-bounds coordinates for all vessels.
pub fn run(vessels: &mut [Vessel], radar_range: f32) {
    let limit = radar_range * BOUNDARY_FACTOR;

    for vessel in vessels.iter_mut() {
        if let Some(x) = reflect(vessel.position.x, limit) {
            debug!(id = vessel.id, from = vessel.position.x, to = x, "contact wrapped on x");
            vessel.position.x = x;
        }
        if let Some(y) = reflect(vessel.position.y, limit) {
            debug!(id = vessel.id, from = vessel.position.y, to = y, "contact wrapped on y");
            vessel.position.y = y;
        }
    }
}

/// The reflected coordinate, or `None` if `value` is within `limit`.
pub fn reflect(value: f32, limit: f32) -> Option<f32> {
    (value.abs() > limit).then(|| -value * BOUNDARY_DAMPING)
}
