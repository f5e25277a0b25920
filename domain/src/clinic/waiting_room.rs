//! FIFO queue of patients

use crate::clinic::patient::Patient;
use std::collections::VecDeque;

/// Ordered buffer of patients awaiting treatment
///
/// Patients leave in exactly the order they were admitted. There is no
/// capacity bound and no priority.
#[derive(Debug, Clone, Default)]
pub struct WaitingRoom {
    queue: VecDeque<Patient>,
}

impl WaitingRoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a patient at the back
    pub fn admit(&mut self, patient: impl Into<Patient>) {
        self.queue.push_back(patient.into());
    }

    /// Dequeue the patient that has waited longest
    pub fn next_patient(&mut self) -> Option<Patient> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Iterator for WaitingRoom {
    type Item = Patient;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_patient()
    }
}

impl<P: Into<Patient>> FromIterator<P> for WaitingRoom {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().map(Into::into).collect(),
        }
    }
}
