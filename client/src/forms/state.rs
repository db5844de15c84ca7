//! Explicit form-state machine.
//!
//! Every form controller owns one `FormState` and moves it only through
//! [`FormState::apply`]. Illegal transitions leave the state unchanged, so
//! a second submit while one is in flight is structurally a no-op.

use tracing::debug;
use validator::ValidationErrors;

/// Why a submission ended in `Failed`
#[derive(Debug, Clone)]
pub enum FailureReason {
    /// Field-scoped schema violations; recoverable by editing the form
    Validation(ValidationErrors),
    /// The mutation itself failed; transient, surfaced as a notification
    Remote(String),
}

/// Lifecycle of one form
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

/// Events that move a form between states
#[derive(Debug)]
pub enum FormEvent {
    Submit,
    ValidationPassed,
    ValidationFailed(ValidationErrors),
    MutationSucceeded,
    MutationFailed(String),
    Reset,
}

impl FormState {
    pub fn new() -> Self {
        FormState::Idle
    }

    /// Whether a submit control should be interactive
    pub fn can_submit(&self) -> bool {
        !matches!(self, FormState::Validating | FormState::Submitting)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, FormState::Succeeded)
    }

    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            FormState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Apply an event; illegal transitions are ignored
    pub fn apply(&mut self, event: FormEvent) {
        let next = match (&*self, event) {
            (FormState::Idle | FormState::Succeeded | FormState::Failed(_), FormEvent::Submit) => {
                FormState::Validating
            }
            (FormState::Validating, FormEvent::ValidationPassed) => FormState::Submitting,
            (FormState::Validating, FormEvent::ValidationFailed(errors)) => {
                FormState::Failed(FailureReason::Validation(errors))
            }
            (FormState::Submitting, FormEvent::MutationSucceeded) => FormState::Succeeded,
            (FormState::Submitting, FormEvent::MutationFailed(message)) => {
                FormState::Failed(FailureReason::Remote(message))
            }
            (_, FormEvent::Reset) => FormState::Idle,
            (current, event) => {
                debug!(state = ?current, event = ?event, "ignoring illegal form transition");
                return;
            }
        };
        *self = next;
    }
}
