//! Tests for roster persistence — the JSON store must round-trip checkup
//! moments losslessly, and stored slots must stay removable even after
//! their moment has passed.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use wardbook_core::{run_schedule_at, Intent, Name, Patient, PatientRoster, ScheduleRequest};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn now() -> NaiveDateTime {
    date(2025, 6, 1).and_time(time(8, 0))
}

fn roster_with_checkup() -> PatientRoster {
    let mut roster = PatientRoster::new();
    let mut alice = Patient::new(Name::new("Alice Pauline").unwrap());
    alice.assign_nurse("Nurse Joy");
    roster.push(alice);

    let req = ScheduleRequest {
        intent: Intent::Create,
        patient_index: 0,
        date: date(2025, 12, 24),
        time: time(10, 0),
    };
    run_schedule_at(&req, &mut roster, now()).unwrap();
    roster
}

#[test]
fn roster_round_trips_through_json() {
    let roster = roster_with_checkup();

    let json = serde_json::to_string_pretty(&roster).unwrap();
    let restored: PatientRoster = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, roster);

    let checkups = restored.get(0).unwrap().checkups();
    assert_eq!(checkups.len(), 1);
    let stored = checkups.iter().next().unwrap();
    assert_eq!(stored.moment(), date(2025, 12, 24).and_time(time(10, 0)));
    assert_eq!(stored.to_string(), "24/12/2025 10:00");
}

#[test]
fn restored_checkup_is_removable_after_its_moment_passed() {
    let roster = roster_with_checkup();
    let json = serde_json::to_string(&roster).unwrap();
    let mut restored: PatientRoster = serde_json::from_str(&json).unwrap();

    // Years later, the slot is long past; removal must still succeed.
    let later = date(2030, 1, 1).and_time(time(12, 0));
    let remove = ScheduleRequest {
        intent: Intent::Remove,
        patient_index: 0,
        date: date(2025, 12, 24),
        time: time(10, 0),
    };

    run_schedule_at(&remove, &mut restored, later).unwrap();
    assert!(restored.get(0).unwrap().checkups().is_empty());
}

#[test]
fn intent_is_not_persisted() {
    // A created checkup serializes to just its moment; nothing in the JSON
    // records why it was constructed.
    let roster = roster_with_checkup();
    let json = serde_json::to_string(&roster).unwrap();

    assert!(!json.to_lowercase().contains("intent"));
    assert!(!json.to_lowercase().contains("create"));
    assert!(json.contains("2025-12-24T10:00:00"));
}
