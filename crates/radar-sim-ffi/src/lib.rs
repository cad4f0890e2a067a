//! C ABI for hosts that embed the simulator as a native or wasm module.
//!
//! The host sees one process-wide simulator. Every call takes the same
//! exclusive lock for its whole duration, so a tick is never observed half
//! applied. Exported symbol names match what existing radar front-ends
//! bind to (`initRadar`, `updateRadar`, ...).
//!
//! None of these functions fail. Bad indices yield `"UNKNOWN"`, exports are
//! clamped, and a lock poisoned by a panicking caller is recovered.

use std::cell::Cell;
use std::ffi::c_char;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use tracing::debug;

use radar_sim::core::constants::{CALLSIGN_CAPACITY, EXPORT_STRIDE};
use radar_sim::VesselSimulator;

static SIMULATOR: Lazy<Mutex<VesselSimulator>> = Lazy::new(|| Mutex::new(VesselSimulator::default()));

thread_local! {
    /// Per-thread copy of the last callsign handed to the host. Lives outside
    /// the simulator lock, so later calls from other threads cannot touch it.
    static CALLSIGN_OUT: Cell<[u8; CALLSIGN_CAPACITY]> = const { Cell::new([0; CALLSIGN_CAPACITY]) };
}

fn simulator() -> MutexGuard<'static, VesselSimulator> {
    SIMULATOR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reload the built-in fleet and reset the tick counter.
#[export_name = "initRadar"]
pub extern "C" fn init_radar() {
    simulator().initialize();
    debug!("radar initialized");
}

/// Advance every contact by one tick.
#[export_name = "updateRadar"]
pub extern "C" fn update_radar() {
    simulator().advance();
}

#[export_name = "getVesselCount"]
pub extern "C" fn get_vessel_count() -> i32 {
    i32::try_from(simulator().count()).unwrap_or(i32::MAX)
}

/// Write `x, y, speed, heading, id` for up to `max_count` contacts.
///
/// Writes `min(max_count, count) * 5` floats and nothing beyond. A null
/// `data` or a non-positive `max_count` writes nothing.
///
/// # Safety
///
/// `data` must be null or valid for writes of `max_count * 5` `f32`s.
#[export_name = "getVesselData"]
pub unsafe extern "C" fn get_vessel_data(data: *mut f32, max_count: i32) {
    let Ok(max_count) = usize::try_from(max_count) else {
        return;
    };
    if data.is_null() || max_count == 0 {
        return;
    }

    let sim = simulator();
    let count = max_count.min(sim.count());
    // SAFETY: the caller guarantees room for `max_count * 5` floats and
    // `count <= max_count`.
    let out = unsafe { std::slice::from_raw_parts_mut(data, count * EXPORT_STRIDE) };
    sim.export_positions(out, count);
}

/// NUL-terminated callsign of contact `index`, or `"UNKNOWN"`.
///
/// The callsign is copied into a buffer owned by the calling thread while
/// the lock is held. The pointer stays valid, and its contents unchanged,
/// until the next `getVesselCallsign` call on the same thread.
#[export_name = "getVesselCallsign"]
pub extern "C" fn get_vessel_callsign(index: i32) -> *const c_char {
    let mut bytes = [0u8; CALLSIGN_CAPACITY];
    {
        let sim = simulator();
        let callsign = match usize::try_from(index) {
            Ok(index) => sim.callsign_c_of(index),
            Err(_) => radar_sim::systems::export::UNKNOWN_CALLSIGN_C,
        };
        let text = callsign.to_bytes();
        let len = text.len().min(CALLSIGN_CAPACITY - 1);
        bytes[..len].copy_from_slice(&text[..len]);
    }

    CALLSIGN_OUT.with(|out| {
        out.set(bytes);
        out.as_ptr().cast::<c_char>().cast_const()
    })
}

/// Radar display range in meters.
#[export_name = "getRadarRange"]
pub extern "C" fn get_radar_range() -> f32 {
    simulator().range_meters()
}

/// Record own ship. Contact motion does not depend on it.
#[export_name = "setOwnShip"]
pub extern "C" fn set_own_ship(x: f32, y: f32, heading: f32) {
    simulator().set_own_ship(x, y, heading);
}

/// Run `f` against the shared simulator while holding its lock.
///
/// For Rust hosts linking the rlib that also want the richer API, such as
/// snapshots or own-ship readback.
pub fn with_simulator<T>(f: impl FnOnce(&mut VesselSimulator) -> T) -> T {
    f(&mut simulator())
}
