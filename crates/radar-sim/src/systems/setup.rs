//! Populates the vessel collection from a fleet table.

use radar_sim_core::{Fleet, Vessel};

/// Replace `vessels` with one vessel per fleet record, in table order.
pub fn populate(vessels: &mut Vec<Vessel>, fleet: &Fleet) {
    vessels.clear();
    vessels.extend(fleet.specs().iter().map(Vessel::from));
}
