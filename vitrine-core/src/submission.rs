//! Single-flight guard around the simulated contact submission
use crate::validation::{ContactMessage, FieldValues, ValidationError, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A submission is already in flight; the trigger is discarded.
    Dropped,
    /// Input failed validation; the guard stays idle.
    Rejected(ValidationError),
    /// The guard is now in flight and a completion must be scheduled.
    Started(ContactMessage),
}

/// At most one submission runs at a time. Triggers that arrive while one is
/// running are dropped, not queued.
#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    state: SubmissionState,
    min_message_len: usize,
}

impl SubmissionGuard {
    #[must_use]
    pub const fn new(min_message_len: usize) -> Self {
        Self {
            state: SubmissionState::Idle,
            min_message_len,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self.state, SubmissionState::InFlight)
    }

    pub fn submit(&mut self, values: &FieldValues) -> SubmitDecision {
        if self.is_in_flight() {
            return SubmitDecision::Dropped;
        }
        match validate(values, self.min_message_len) {
            Ok(contact) => {
                self.state = SubmissionState::InFlight;
                SubmitDecision::Started(contact)
            }
            Err(err) => SubmitDecision::Rejected(err),
        }
    }

    /// Finish the running submission. Returns false when nothing was in flight.
    pub fn complete(&mut self) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FieldValues {
        FieldValues::new("Ana", "ana@example.com", "Hello there, this works")
    }

    #[test]
    fn second_trigger_in_flight_is_dropped() {
        let mut guard = SubmissionGuard::new(10);
        assert!(matches!(guard.submit(&valid()), SubmitDecision::Started(_)));
        assert_eq!(guard.submit(&valid()), SubmitDecision::Dropped);

        assert!(guard.complete());
        assert!(!guard.complete());
        assert_eq!(guard.state(), SubmissionState::Idle);
    }

    #[test]
    fn rejected_input_stays_idle() {
        let mut guard = SubmissionGuard::new(10);
        let decision = guard.submit(&FieldValues::new(" ", "ana@example.com", "Hello there"));
        assert_eq!(decision, SubmitDecision::Rejected(ValidationError::EmptyName));
        assert!(!guard.is_in_flight());
    }

    #[test]
    fn dropped_trigger_skips_validation() {
        let mut guard = SubmissionGuard::new(10);
        guard.submit(&valid());
        assert_eq!(guard.submit(&FieldValues::default()), SubmitDecision::Dropped);
    }

    #[test]
    fn guard_accepts_again_after_completion() {
        let mut guard = SubmissionGuard::new(10);
        guard.submit(&valid());
        guard.complete();
        assert!(matches!(guard.submit(&valid()), SubmitDecision::Started(_)));
    }
}
