/// Lifecycle of a form submission.
///
/// `Submitting` is entered at most once per form instance. There is no
/// transition back to `Editing`; after a failure the form stays locked and
/// the surrounding view decides what the user sees next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether a new submission may start
    pub fn can_submit(self) -> bool {
        self == SubmissionState::Editing
    }

    /// Whether the form inputs should be locked
    pub fn locks_input(self) -> bool {
        self != SubmissionState::Editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_editing_allows_submission() {
        assert!(SubmissionState::Editing.can_submit());
        assert!(!SubmissionState::Submitting.can_submit());
        assert!(!SubmissionState::Succeeded.can_submit());
        assert!(!SubmissionState::Failed.can_submit());
    }

    #[test]
    fn test_inputs_lock_once_submission_starts() {
        assert!(!SubmissionState::Editing.locks_input());
        assert!(SubmissionState::Submitting.locks_input());
        assert!(SubmissionState::Failed.locks_input());
    }
}
