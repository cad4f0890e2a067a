//! Simulation engine: the vessel simulator hosts drive.
//!
//! `VesselSimulator` owns the vessel collection, the tick counter, own ship
//! and the randomness behind course corrections. It is a plain value: hosts
//! construct one, call `advance` once per simulation tick and poll the
//! export accessors once per frame. Nothing here touches a display or a
//! clock, so a seed and a tick count fully determine the contact picture.

use std::ffi::CStr;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use radar_sim_core::constants::RADAR_RANGE_DEFAULT;
use radar_sim_core::state::RadarSnapshot;
use radar_sim_core::{validate_radar_range, ConfigError, Fleet, OwnShip, Vessel};

use crate::random::CourseRandom;
use crate::systems;

/// Configuration for a new simulator.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Radar display range in meters. Fixed for the simulator's lifetime.
    pub radar_range: f32,
    /// Vessels loaded on every initialize.
    pub fleet: Fleet,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            radar_range: RADAR_RANGE_DEFAULT,
            fleet: Fleet::default(),
        }
    }
}

impl SimConfig {
    /// Reject settings the simulator cannot run with. The fleet is already
    /// validated by its own constructor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_radar_range(self.radar_range)?;
        Ok(())
    }
}

/// The simulator. Owns all contact state.
pub struct VesselSimulator<R = ChaCha8Rng> {
    vessels: Vec<Vessel>,
    fleet: Fleet,
    tick: u64,
    radar_range: f32,
    own_ship: OwnShip,
    rng: R,
}

impl VesselSimulator<ChaCha8Rng> {
    /// Create an initialized simulator whose course corrections come from a
    /// ChaCha stream seeded with `config.seed`.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_random(config, rng)
    }
}

impl Default for VesselSimulator<ChaCha8Rng> {
    fn default() -> Self {
        let config = SimConfig::default();
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::build(config, rng)
    }
}

impl<R: CourseRandom> VesselSimulator<R> {
    /// Create an initialized simulator drawing course corrections from `rng`.
    pub fn with_random(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: SimConfig, rng: R) -> Self {
        let mut sim = Self {
            vessels: Vec::with_capacity(config.fleet.len()),
            fleet: config.fleet,
            tick: 0,
            radar_range: config.radar_range,
            own_ship: OwnShip::default(),
            rng,
        };
        sim.initialize();
        sim
    }

    /// Reload every vessel from the fleet table and reset the tick counter.
    ///
    /// Own ship and radar range are kept.
    pub fn initialize(&mut self) {
        systems::setup::populate(&mut self.vessels, &self.fleet);
        self.tick = 0;
        debug!(vessels = self.vessels.len(), "simulator initialized");
    }

    /// Advance the simulation by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;

        // 1. Movement integration
        systems::movement::run(&mut self.vessels);
        // 2. Course corrections (only on correction ticks)
        systems::course::run(&mut self.vessels, &mut self.rng, self.tick);
        // 3. Boundary containment
        systems::boundary::run(&mut self.vessels, self.radar_range);
    }

    /// Number of active vessels.
    pub fn count(&self) -> usize {
        self.vessels.len()
    }

    /// Write `x, y, speed, heading, id` for up to `max_count` vessels into
    /// `out`, five values per vessel. Returns the number of vessels written.
    pub fn export_positions(&self, out: &mut [f32], max_count: usize) -> usize {
        systems::export::write_positions(&self.vessels, out, max_count)
    }

    /// Callsign of the contact at `index`, or `"UNKNOWN"`.
    pub fn callsign_of(&self, index: usize) -> &str {
        systems::export::callsign_at(&self.vessels, index)
    }

    /// NUL-terminated callsign of the contact at `index`, or `"UNKNOWN"`.
    pub fn callsign_c_of(&self, index: usize) -> &CStr {
        systems::export::callsign_c_at(&self.vessels, index)
    }

    pub fn range_meters(&self) -> f32 {
        self.radar_range
    }

    /// Record own ship. Contact motion does not read it.
    pub fn set_own_ship(&mut self, x: f32, y: f32, heading: f32) {
        self.own_ship = OwnShip::new(x, y, heading);
    }

    pub fn own_ship(&self) -> OwnShip {
        self.own_ship
    }

    /// Ticks since the last initialize.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Read-only view of the contacts in index order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Build a snapshot of the current state.
    pub fn snapshot(&self) -> RadarSnapshot {
        systems::snapshot::build_snapshot(&self.vessels, self.tick, self.radar_range, self.own_ship)
    }

    /// The randomness provider, e.g. to inspect a scripted source.
    pub fn random(&self) -> &R {
        &self.rng
    }
}
