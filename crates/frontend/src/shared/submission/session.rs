use super::step::FieldError;

/// Where a form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing running, no attempt made yet
    #[default]
    Idle,
    /// Pipeline steps are executing
    Validating,
    /// The last attempt stopped at a failing step; errors are on screen
    Failed,
    /// Guard is set and the real submission has been dispatched
    Submitting,
    /// The server accepted an in-page submission
    Submitted,
}

impl Phase {
    /// Submit control is disabled and the loader shown
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Validating | Phase::Submitting)
    }

    /// No further attempt can start from this phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Submitting | Phase::Submitted)
    }
}

/// Transient state of one form attempt. Field values are deliberately not
/// stored here; steps read them from the page.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub phase: Phase,
    /// Set exactly once, right before the real submission is dispatched
    pub submit_guard: bool,
    pub pending_errors: Vec<FieldError>,
    /// Message the server sent along with an accepted in-page submission
    pub notice: Option<String>,
}

impl FormSession {
    /// Keep the first message per field, drop the rest
    pub fn set_errors(&mut self, errors: Vec<FieldError>) {
        let mut unique: Vec<FieldError> = Vec::with_capacity(errors.len());
        for error in errors {
            if !unique.iter().any(|e| e.field == error.field) {
                unique.push(error);
            }
        }
        self.pending_errors = unique;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_errors_keeps_one_per_field() {
        let mut session = FormSession::default();
        session.set_errors(vec![
            FieldError::new("zip", "first"),
            FieldError::new("city", "City is required."),
            FieldError::new("zip", "second"),
        ]);
        assert_eq!(
            session.pending_errors,
            vec![
                FieldError::new("zip", "first"),
                FieldError::new("city", "City is required."),
            ]
        );
    }

    #[test]
    fn test_phase_flags() {
        assert!(Phase::Validating.is_busy());
        assert!(Phase::Submitting.is_busy());
        assert!(!Phase::Failed.is_busy());
        assert!(!Phase::Submitted.is_busy());
        assert!(Phase::Submitted.is_terminal());
        assert!(!Phase::Idle.is_terminal());
    }
}
