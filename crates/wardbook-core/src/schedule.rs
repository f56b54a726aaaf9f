//! The scheduling operation — resolve a patient, validate the candidate
//! checkup, and mutate that patient's checkup set with clash detection.
//!
//! Failure order: patient resolution, then checkup construction (errors
//! propagate verbatim), then set membership. On any failure the set is left
//! untouched; on success exactly one slot is added or removed.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::checkup::{Checkup, Intent};
use crate::error::{Result, ScheduleError};
use crate::roster::PatientRoster;

/// Appended (after a newline) to a create outcome when the patient has no
/// assigned nurse. Advisory only.
pub const MISSING_NURSE_WARNING: &str = "Note: this patient has no assigned nurse.";

/// A single scheduling request. Transient: lives only for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub intent: Intent,
    /// Zero-based position in the currently displayed roster.
    pub patient_index: usize,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Run a scheduling request against the roster, validating the candidate
/// checkup against the local wall clock.
///
/// On success returns a human-readable outcome naming the patient and the
/// formatted slot; create outcomes for patients without an assigned nurse
/// carry [`MISSING_NURSE_WARNING`] on a second line.
///
/// # Errors
/// - `InvalidPatientIndex` if the position does not resolve in the roster.
/// - Any [`Checkup::new`] validation error, unwrapped.
/// - `SlotClash` on a create request for an occupied slot; the error carries
///   the stored slot's formatted date-time.
/// - `SlotNotFound` on a remove request for an empty slot.
pub fn run_schedule(request: &ScheduleRequest, roster: &mut PatientRoster) -> Result<String> {
    run_schedule_at(request, roster, Local::now().naive_local())
}

/// Run a scheduling request with an explicit `now` for the past check.
///
/// Identical to [`run_schedule`] otherwise.
pub fn run_schedule_at(
    request: &ScheduleRequest,
    roster: &mut PatientRoster,
    now: NaiveDateTime,
) -> Result<String> {
    let roster_len = roster.len();
    let patient = roster
        .get_mut(request.patient_index)
        .ok_or(ScheduleError::InvalidPatientIndex {
            index: request.patient_index,
            roster_len,
        })?;

    let candidate = Checkup::new_at(request.date, request.time, request.intent, now)?;

    match request.intent {
        Intent::Create => {
            // The clash message echoes the slot already on record, not the
            // candidate. They compare equal but the stored one is reported.
            if let Some(existing) = patient.checkups().get(&candidate) {
                return Err(ScheduleError::SlotClash {
                    existing: existing.to_string(),
                });
            }

            let mut message = format!(
                "Scheduled checkup for {} on {} at {}",
                patient.name(),
                candidate.date().format("%d/%m/%Y"),
                candidate.time().format("%H:%M"),
            );
            if !patient.has_nurse() {
                message.push('\n');
                message.push_str(MISSING_NURSE_WARNING);
            }
            patient.checkups_mut().insert(candidate);
            Ok(message)
        }
        Intent::Remove => {
            if !patient.checkups_mut().remove(&candidate) {
                return Err(ScheduleError::SlotNotFound);
            }
            Ok(format!(
                "Removed checkup for {} on {} at {}",
                patient.name(),
                candidate.date().format("%d/%m/%Y"),
                candidate.time().format("%H:%M"),
            ))
        }
    }
}
