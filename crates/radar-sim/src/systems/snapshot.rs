//! Snapshot system: builds a RadarSnapshot from the current vessel state.
//!
//! This system is read-only.

use radar_sim_core::state::{ContactView, RadarSnapshot};
use radar_sim_core::{OwnShip, Vessel};

/// Build a complete RadarSnapshot.
pub fn build_snapshot(
    vessels: &[Vessel],
    tick: u64,
    range_meters: f32,
    own_ship: OwnShip,
) -> RadarSnapshot {
    RadarSnapshot {
        tick,
        range_meters,
        own_ship: own_ship.into(),
        contacts: build_contacts(vessels),
    }
}

fn build_contacts(vessels: &[Vessel]) -> Vec<ContactView> {
    vessels
        .iter()
        .enumerate()
        .map(|(index, vessel)| ContactView {
            index,
            id: vessel.id,
            callsign: vessel.callsign.to_string(),
            x: vessel.position.x,
            y: vessel.position.y,
            speed: vessel.speed,
            heading: vessel.heading(),
            course: vessel.course(),
        })
        .collect()
}
