/// How a single confirmation attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The backend answered with a 2xx status.
    Confirmed,
    /// Non-2xx status or transport error.
    Failed,
    /// No token in the route, so no request was made.
    MissingToken,
}

/// Lifecycle of the confirmation page.
///
/// `Idle -> Confirming -> Done` on success, `Confirming -> Idle` otherwise so
/// the user can click again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    Idle,
    Confirming,
    Done,
}

impl ConfirmState {
    /// Move to `Confirming`. Returns `false` (and leaves the state alone) if a
    /// request is already in flight or the account is already confirmed.
    pub fn begin(&mut self) -> bool {
        match self {
            ConfirmState::Idle => {
                *self = ConfirmState::Confirming;
                true
            }
            ConfirmState::Confirming | ConfirmState::Done => false,
        }
    }

    pub fn finish(&mut self, outcome: ConfirmOutcome) {
        *self = match outcome {
            ConfirmOutcome::Confirmed => ConfirmState::Done,
            ConfirmOutcome::Failed | ConfirmOutcome::MissingToken => ConfirmState::Idle,
        };
    }

    /// Whether the confirm button should be disabled.
    pub fn is_busy(&self) -> bool {
        !matches!(self, ConfirmState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_while_in_flight() {
        let mut state = ConfirmState::default();
        assert!(state.begin());
        assert_eq!(state, ConfirmState::Confirming);
        assert!(!state.begin());
        assert!(state.is_busy());
    }

    #[test]
    fn failure_returns_to_idle() {
        let mut state = ConfirmState::default();
        state.begin();
        state.finish(ConfirmOutcome::Failed);
        assert_eq!(state, ConfirmState::Idle);
        assert!(state.begin(), "user may retry after a failure");

        state.finish(ConfirmOutcome::MissingToken);
        assert_eq!(state, ConfirmState::Idle);
    }

    #[test]
    fn success_is_terminal() {
        let mut state = ConfirmState::default();
        state.begin();
        state.finish(ConfirmOutcome::Confirmed);
        assert_eq!(state, ConfirmState::Done);
        assert!(!state.begin());
        assert!(state.is_busy());
    }
}
