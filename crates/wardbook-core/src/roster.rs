//! The currently displayed patient list, addressed by zero-based position.

use serde::{Deserialize, Serialize};

use crate::patient::Patient;

/// The filtered/displayed patient list a scheduling request addresses.
///
/// Patient records are owned here; the scheduling operation borrows exactly
/// one of them mutably for the duration of a single request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientRoster {
    patients: Vec<Patient>,
}

impl PatientRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Append a patient to the end of the displayed list.
    pub fn push(&mut self, patient: Patient) {
        self.patients.push(patient);
    }

    pub fn get(&self, index: usize) -> Option<&Patient> {
        self.patients.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Patient> {
        self.patients.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }
}
