//! Flat export of contact data for hosts.
//!
//! Layout per vessel, in index order: x, y, speed, heading, id.

use std::ffi::CStr;

use radar_sim_core::constants::{EXPORT_STRIDE, UNKNOWN_CALLSIGN};
use radar_sim_core::Vessel;

/// NUL-terminated form of [`UNKNOWN_CALLSIGN`].
pub const UNKNOWN_CALLSIGN_C: &CStr = c"UNKNOWN";

/// Write up to `max_count` vessels into `out`. Returns how many were written.
///
/// Never writes past `written * EXPORT_STRIDE`; a short buffer limits the
/// count instead of overflowing.
pub fn write_positions(vessels: &[Vessel], out: &mut [f32], max_count: usize) -> usize {
    let count = max_count
        .min(vessels.len())
        .min(out.len() / EXPORT_STRIDE);

    for (vessel, slot) in vessels
        .iter()
        .zip(out.chunks_exact_mut(EXPORT_STRIDE))
        .take(count)
    {
        slot.copy_from_slice(&[
            vessel.position.x,
            vessel.position.y,
            vessel.speed,
            vessel.heading(),
            vessel.id as f32,
        ]);
    }

    count
}

/// Callsign at `index`, or `"UNKNOWN"` outside the active set.
pub fn callsign_at(vessels: &[Vessel], index: usize) -> &str {
    vessels
        .get(index)
        .map_or(UNKNOWN_CALLSIGN, |vessel| vessel.callsign.as_str())
}

/// C string form of [`callsign_at`].
pub fn callsign_c_at(vessels: &[Vessel], index: usize) -> &CStr {
    vessels
        .get(index)
        .map_or(UNKNOWN_CALLSIGN_C, |vessel| vessel.callsign.as_c_str())
}
