//! # wardbook-core
//!
//! Scheduling of fixed-duration checkups between patients and the nurses
//! responsible for them. Every checkup is validated at construction
//! (business hours, no past bookings, quarter-hour grid) and kept in a
//! per-patient set keyed purely on date-time, so double-booking a slot is
//! detected as a clash rather than silently collapsed.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use wardbook_core::{run_schedule, Intent, Name, Patient, PatientRoster, ScheduleRequest};
//!
//! let mut roster = PatientRoster::new();
//! let mut patient = Patient::new(Name::new("Alice Pauline").unwrap());
//! patient.assign_nurse("Nurse Joy");
//! roster.push(patient);
//!
//! let request = ScheduleRequest {
//!     intent: Intent::Create,
//!     patient_index: 0,
//!     date: NaiveDate::from_ymd_opt(2099, 12, 24).unwrap(),
//!     time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
//! };
//! let message = run_schedule(&request, &mut roster).unwrap();
//! assert!(message.contains("24/12/2099"));
//! ```
//!
//! ## Modules
//!
//! - [`checkup`] — the validated checkup value type and request intent
//! - [`patient`] — patient records and contact field validation
//! - [`roster`] — the displayed patient list, addressed by position
//! - [`schedule`] — the scheduling operation (create/remove with clash detection)
//! - [`error`] — error types

pub mod checkup;
pub mod error;
pub mod patient;
pub mod roster;
pub mod schedule;

pub use checkup::{Checkup, Intent};
pub use error::ScheduleError;
pub use patient::{Email, Name, Patient};
pub use roster::PatientRoster;
pub use schedule::{run_schedule, run_schedule_at, ScheduleRequest, MISSING_NURSE_WARNING};
