//! Simulated contact state.

use glam::Vec2;

use crate::callsign::Callsign;
use crate::fleet::VesselSpec;

/// One simulated vessel.
///
/// `course` mirrors `heading`; the only way to turn a vessel is
/// [`Vessel::set_heading`], which updates both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vessel {
    /// Meters relative to the fixed origin.
    pub position: Vec2,
    /// Stored speed (m/s). Motion integration caps it.
    pub speed: f32,
    heading: f32,
    course: f32,
    /// Stable within the active set.
    pub id: u32,
    pub callsign: Callsign,
}

impl Vessel {
    pub fn new(position: Vec2, speed: f32, heading: f32, id: u32, callsign: Callsign) -> Self {
        Self {
            position,
            speed,
            heading,
            course: heading,
            id,
            callsign,
        }
    }

    /// Direction of travel (radians).
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Reported course (radians). Always equal to the heading.
    pub fn course(&self) -> f32 {
        self.course
    }

    pub fn set_heading(&mut self, heading: f32) {
        self.heading = heading;
        self.course = heading;
    }

    pub fn turn(&mut self, delta: f32) {
        self.set_heading(self.heading + delta);
    }
}

impl From<&VesselSpec> for Vessel {
    fn from(spec: &VesselSpec) -> Self {
        Self::new(
            Vec2::new(spec.x, spec.y),
            spec.speed,
            spec.heading,
            spec.id,
            spec.callsign,
        )
    }
}
