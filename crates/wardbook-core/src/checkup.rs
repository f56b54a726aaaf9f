//! The checkup value type — one scheduled moment plus the request intent.
//!
//! All temporal validation happens at construction: a `Checkup` that exists
//! is a valid one. Equality and hashing consider only the moment, never the
//! intent, so a patient's checkup set is a set of time slots.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// Why a checkup value is being constructed.
///
/// Removal requests skip the creation-only checks (past moment, quarter-hour
/// grid) so that a slot which has drifted into the past, or was stored off
/// the grid, always stays removable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Create,
    Remove,
}

/// A scheduled checkup at minute precision.
#[derive(Debug, Clone)]
pub struct Checkup {
    moment: NaiveDateTime,
    intent: Intent,
}

/// Business hours window, inclusive at both ends.
fn business_hours() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(9, 0, 0).expect("valid opening time"),
        NaiveTime::from_hms_opt(17, 0, 0).expect("valid closing time"),
    )
}

impl Checkup {
    /// Construct a checkup, validating against the local wall clock.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. the time of day must lie within 09:00–17:00 (both intents);
    /// 2. `Create` only: the moment must not be strictly in the past;
    /// 3. `Create` only: the minute must be 00, 15, 30, or 45.
    ///
    /// # Errors
    /// Returns `ScheduleError::OutsideBusinessHours`, `PastDateTime`, or
    /// `OffGridMinutes` accordingly.
    pub fn new(date: NaiveDate, time: NaiveTime, intent: Intent) -> Result<Self> {
        Self::new_at(date, time, intent, Local::now().naive_local())
    }

    /// Construct a checkup, running the past check against an explicit `now`
    /// instead of the local wall clock.
    ///
    /// Identical to [`Checkup::new`] otherwise.
    pub fn new_at(
        date: NaiveDate,
        time: NaiveTime,
        intent: Intent,
        now: NaiveDateTime,
    ) -> Result<Self> {
        let (open, close) = business_hours();
        if time < open || time > close {
            return Err(ScheduleError::OutsideBusinessHours);
        }

        let moment = date.and_time(time);
        if intent == Intent::Create {
            if moment < now {
                return Err(ScheduleError::PastDateTime);
            }
            if time.minute() % 15 != 0 {
                return Err(ScheduleError::OffGridMinutes);
            }
        }

        Ok(Checkup { moment, intent })
    }

    /// The full date-time of the checkup.
    pub fn moment(&self) -> NaiveDateTime {
        self.moment
    }

    /// The calendar date component.
    pub fn date(&self) -> NaiveDate {
        self.moment.date()
    }

    /// The time-of-day component.
    pub fn time(&self) -> NaiveTime {
        self.moment.time()
    }

    /// The intent this value was constructed with. Transient request state;
    /// never part of equality and never persisted.
    pub fn intent(&self) -> Intent {
        self.intent
    }
}

impl fmt::Display for Checkup {
    /// Zero-padded `DD/MM/YYYY HH:mm`, 24-hour clock.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moment.format("%d/%m/%Y %H:%M"))
    }
}

// Equality and hashing are keyed on the moment alone. Two checkups at the
// same slot collide in a set regardless of why they were constructed.
impl PartialEq for Checkup {
    fn eq(&self, other: &Self) -> bool {
        self.moment == other.moment
    }
}

impl Eq for Checkup {}

impl Hash for Checkup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.moment.hash(state);
    }
}

impl Serialize for Checkup {
    /// Only the moment is persisted; intent is per-request state.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.moment.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Checkup {
    /// Stored checkups are never re-validated. They come back with `Remove`
    /// intent: a slot that has since passed, or sits off the quarter-hour
    /// grid, must still be removable.
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let moment = NaiveDateTime::deserialize(deserializer)?;
        Ok(Checkup {
            moment,
            intent: Intent::Remove,
        })
    }
}
