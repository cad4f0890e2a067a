//! Course correction system.
//!
//! Every `COURSE_CORRECTION_INTERVAL` ticks each vessel turns by a random
//! amount in [-0.5, +0.5) radians. One draw per vessel, in index order.

use tracing::trace;

use radar_sim_core::constants::{
    COURSE_CHANGE_OFFSET, COURSE_CHANGE_SPAN, COURSE_CHANGE_STEP, COURSE_CORRECTION_INTERVAL,
};
use radar_sim_core::Vessel;

use crate::random::CourseRandom;

/// Whether vessels turn on this tick.
pub fn is_correction_tick(tick: u64) -> bool {
    tick % COURSE_CORRECTION_INTERVAL == 0
}

/// Heading change (radians) for one uniform draw in `0..COURSE_CHANGE_SPAN`.
pub fn heading_change(draw: u32) -> f32 {
    (draw as i32 - COURSE_CHANGE_OFFSET) as f32 * COURSE_CHANGE_STEP
}

/// Perturb headings if `tick` is a correction tick.
pub fn run<R: CourseRandom>(vessels: &mut [Vessel], rng: &mut R, tick: u64) {
    if !is_correction_tick(tick) {
        return;
    }

    for vessel in vessels.iter_mut() {
        let change = heading_change(rng.uniform_below(COURSE_CHANGE_SPAN));
        vessel.turn(change);
        trace!(tick, id = vessel.id, change, heading = vessel.heading(), "course correction");
    }
}
