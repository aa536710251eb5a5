use crate::controls::Action;
use crate::session::SessionState;

/// A session action was requested that the current state does not allow.
///
/// These are contract violations by the caller. The session is left untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot {action:?} while {state:?}")]
    InvalidTransition { action: Action, state: SessionState },
    #[error("lap limit of {max} reached")]
    LapLimitReached { max: usize },
}

impl TransitionError {
    pub(crate) fn invalid(action: Action, state: SessionState) -> Self {
        TransitionError::InvalidTransition { action, state }
    }
}
