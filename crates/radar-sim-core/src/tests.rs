//! Tests for callsigns, fleet tables and snapshot types.

use glam::Vec2;

use crate::callsign::Callsign;
use crate::constants::*;
use crate::error::{ConfigError, FleetError};
use crate::fleet::{Fleet, VesselSpec, DEFAULT_FLEET};
use crate::state::{ContactView, OwnShipView, RadarSnapshot};
use crate::types::{validate_radar_range, OwnShip};
use crate::vessel::Vessel;

// ---- Callsign ----

#[test]
fn test_callsign_round_trips_text() {
    let callsign = Callsign::new("SHIP-001").unwrap();
    assert_eq!(callsign.as_str(), "SHIP-001");
    assert_eq!(callsign.len(), 8);
    assert_eq!(callsign.to_string(), "SHIP-001");
}

#[test]
fn test_callsign_is_nul_terminated() {
    let callsign = Callsign::new("HARBOR PILOT").unwrap();
    assert_eq!(callsign.as_c_str().to_bytes_with_nul(), b"HARBOR PILOT\0");
}

#[test]
fn test_callsign_max_length_accepted() {
    let name = "A".repeat(CALLSIGN_MAX_LEN);
    let callsign = Callsign::new(&name).unwrap();
    assert_eq!(callsign.as_str(), name);
    assert_eq!(callsign.as_c_str().to_bytes().len(), CALLSIGN_MAX_LEN);
}

#[test]
fn test_callsign_too_long_rejected() {
    let name = "A".repeat(CALLSIGN_CAPACITY);
    match Callsign::new(&name) {
        Err(FleetError::CallsignTooLong { max, .. }) => assert_eq!(max, CALLSIGN_MAX_LEN),
        other => panic!("expected CallsignTooLong, got {other:?}"),
    }
}

#[test]
fn test_callsign_non_printable_rejected() {
    assert!(matches!(
        Callsign::new("SHIP\n01"),
        Err(FleetError::CallsignNotPrintable(_))
    ));
    assert!(matches!(
        Callsign::new("SCHIFF-Ä"),
        Err(FleetError::CallsignNotPrintable(_))
    ));
}

#[test]
fn test_callsign_from_static_matches_new() {
    const PILOT: Callsign = Callsign::from_static("PILOT-7");
    assert_eq!(PILOT, Callsign::new("PILOT-7").unwrap());
}

#[test]
fn test_empty_callsign() {
    let callsign = Callsign::new("").unwrap();
    assert!(callsign.is_empty());
    assert_eq!(callsign.as_str(), "");
}

// ---- Vessel ----

#[test]
fn test_vessel_course_tracks_heading() {
    let mut vessel = Vessel::new(
        Vec2::ZERO,
        5.0,
        1.0,
        1,
        Callsign::from_static("SHIP-001"),
    );
    assert_eq!(vessel.course(), vessel.heading());

    vessel.turn(0.25);
    assert_eq!(vessel.heading(), 1.25);
    assert_eq!(vessel.course(), 1.25);

    vessel.set_heading(-2.0);
    assert_eq!(vessel.course(), -2.0);
}

#[test]
fn test_vessel_from_spec() {
    let vessel = Vessel::from(&DEFAULT_FLEET[3]);
    assert_eq!(vessel.position, Vec2::new(-2500.0, -1500.0));
    assert_eq!(vessel.speed, 10.0);
    assert_eq!(vessel.heading(), -2.36);
    assert_eq!(vessel.course(), -2.36);
    assert_eq!(vessel.id, 4);
    assert_eq!(vessel.callsign.as_str(), "SHIP-004");
}

// ---- Fleet ----

#[test]
fn test_default_fleet_has_eight_sequential_ids() {
    let fleet = Fleet::default();
    assert_eq!(fleet.len(), DEFAULT_VESSEL_COUNT);
    for (i, spec) in fleet.specs().iter().enumerate() {
        assert_eq!(spec.id, i as u32 + 1);
        assert_eq!(spec.callsign.as_str(), format!("SHIP-{:03}", i + 1));
    }
}

#[test]
fn test_default_fleet_passes_validation() {
    let fleet = Fleet::new(DEFAULT_FLEET.to_vec()).unwrap();
    assert_eq!(fleet, Fleet::default());
}

#[test]
fn test_empty_fleet_rejected() {
    assert!(matches!(Fleet::new(Vec::new()), Err(FleetError::Empty)));
}

#[test]
fn test_duplicate_id_rejected() {
    let specs = vec![
        VesselSpec::new(0.0, 0.0, 1.0, 0.0, 3, "A"),
        VesselSpec::new(10.0, 0.0, 1.0, 0.0, 3, "B"),
    ];
    assert!(matches!(Fleet::new(specs), Err(FleetError::DuplicateId(3))));
}

#[test]
fn test_zero_id_rejected() {
    let specs = vec![VesselSpec::new(0.0, 0.0, 1.0, 0.0, 0, "A")];
    assert!(matches!(Fleet::new(specs), Err(FleetError::ZeroId)));
}

#[test]
fn test_id_above_exportable_range_rejected() {
    let specs = vec![
        VesselSpec::new(0.0, 0.0, 1.0, 0.0, MAX_VESSEL_ID, "EDGE"),
        VesselSpec::new(0.0, 0.0, 1.0, 0.0, MAX_VESSEL_ID + 1, "OVER"),
    ];
    match Fleet::new(specs) {
        Err(FleetError::IdOutOfRange { id, max }) => {
            assert_eq!(id, MAX_VESSEL_ID + 1);
            assert_eq!(max, MAX_VESSEL_ID);
        }
        other => panic!("expected IdOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_largest_id_survives_f32_export() {
    let fleet = Fleet::new(vec![VesselSpec::new(0.0, 0.0, 1.0, 0.0, MAX_VESSEL_ID, "EDGE")]).unwrap();
    let id = fleet.specs()[0].id;
    assert_eq!(id as f32 as u32, id);
}

#[test]
fn test_fleet_json_rejects_large_id() {
    let json = r#"[{"x": 0.0, "y": 0.0, "speed": 1.0, "heading": 0.0, "id": 16777217, "callsign": "BIG"}]"#;
    assert!(matches!(
        Fleet::from_json(json),
        Err(FleetError::IdOutOfRange { id: 16_777_217, .. })
    ));
}

// ---- Radar range ----

#[test]
fn test_radar_range_accepts_positive_finite() {
    assert_eq!(validate_radar_range(RADAR_RANGE_DEFAULT), Ok(RADAR_RANGE_DEFAULT));
    assert_eq!(validate_radar_range(0.5), Ok(0.5));
}

#[test]
fn test_radar_range_rejects_unusable_values() {
    assert_eq!(validate_radar_range(0.0), Err(ConfigError::InvalidRadarRange(0.0)));
    assert_eq!(validate_radar_range(-1.0), Err(ConfigError::InvalidRadarRange(-1.0)));
    assert!(validate_radar_range(f32::NAN).is_err());
    assert!(validate_radar_range(f32::INFINITY).is_err());
}

#[test]
fn test_fleet_from_json() {
    let json = r#"[
        {"x": 100.0, "y": -50.0, "speed": 3.5, "heading": 0.5, "id": 11, "callsign": "TUG-11"},
        {"x": -20.0, "y": 75.0, "speed": 12.0, "heading": 2.0, "id": 12, "callsign": "FERRY"}
    ]"#;
    let fleet = Fleet::from_json(json).unwrap();
    assert_eq!(fleet.len(), 2);
    assert_eq!(fleet.specs()[0].callsign.as_str(), "TUG-11");
    assert_eq!(fleet.specs()[1].id, 12);
    assert_eq!(fleet.specs()[1].speed, 12.0);
}

#[test]
fn test_fleet_json_rejects_long_callsign() {
    let json = r#"[{"x": 0.0, "y": 0.0, "speed": 1.0, "heading": 0.0, "id": 1,
                    "callsign": "THIS-NAME-IS-TOO-LONG"}]"#;
    let err = Fleet::from_json(json).unwrap_err();
    assert!(matches!(err, FleetError::Json(_)));
    assert!(err.to_string().contains("longer than 15"));
}

#[test]
fn test_fleet_json_rejects_malformed() {
    assert!(matches!(
        Fleet::from_json("{not json"),
        Err(FleetError::Json(_))
    ));
}

#[test]
fn test_fleet_json_round_trip_preserves_table() {
    let fleet = Fleet::default();
    let json = fleet.to_json().unwrap();
    assert_eq!(Fleet::from_json(&json).unwrap(), fleet);
}

// ---- Snapshot ----

#[test]
fn test_own_ship_view_from_own_ship() {
    let view = OwnShipView::from(OwnShip::new(12.0, -4.0, 1.5));
    assert_eq!(view.x, 12.0);
    assert_eq!(view.y, -4.0);
    assert_eq!(view.heading, 1.5);
}

#[test]
fn test_snapshot_serializes_contacts_in_order() {
    let snapshot = RadarSnapshot {
        tick: 7,
        range_meters: RADAR_RANGE_DEFAULT,
        own_ship: OwnShipView::default(),
        contacts: vec![
            ContactView {
                index: 0,
                id: 1,
                callsign: "SHIP-001".into(),
                x: 1.0,
                y: 2.0,
                speed: 3.0,
                heading: 0.5,
                course: 0.5,
            },
            ContactView {
                index: 1,
                id: 2,
                callsign: "SHIP-002".into(),
                x: -1.0,
                y: -2.0,
                speed: 4.0,
                heading: 1.5,
                course: 1.5,
            },
        ],
    };

    let json = serde_json::to_string(&snapshot).unwrap();
    let first = json.find("SHIP-001").unwrap();
    let second = json.find("SHIP-002").unwrap();
    assert!(first < second);

    let back: RadarSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_max_speed_constant() {
    assert!((MAX_SPEED_MPS - 5.14444).abs() < 1e-5);
}
