//! Contact form submission state.
//!
//! One submission may be in flight at a time; the disabled submit
//! control is the only double-submission guard, mirrored here by
//! `begin` refusing while `Sending`. Exactly one result message exists
//! per submission — the renderer removes any prior message before
//! inserting the new one.

use folio_protocol::MessageKind;
use serde::Serialize;

pub const SUCCESS_TEXT: &str = "Thank you! Your message has been sent.";
pub const ERROR_TEXT: &str = "Oops! Something went wrong. Please try again.";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
}

/// A result message to render beneath the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn for_outcome(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Delivered => Self {
                kind: MessageKind::Success,
                text: SUCCESS_TEXT.to_string(),
            },
            SubmitOutcome::Failed => Self {
                kind: MessageKind::Error,
                text: ERROR_TEXT.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormState {
    phase: FormPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Start a submission. False while one is already pending.
    pub fn begin(&mut self) -> bool {
        if self.phase == FormPhase::Sending {
            return false;
        }
        self.phase = FormPhase::Sending;
        true
    }

    /// Finish the pending submission, returning the message to show.
    /// The form returns to `Idle` on success and failure alike.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> FormMessage {
        self.phase = FormPhase::Idle;
        FormMessage::for_outcome(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_blocks_while_sending() {
        let mut state = FormState::new();
        assert!(state.begin());
        assert!(!state.begin());
        state.finish(SubmitOutcome::Delivered);
        assert!(state.begin());
    }

    #[test]
    fn finish_returns_to_idle_on_both_outcomes() {
        let mut state = FormState::new();
        state.begin();
        let msg = state.finish(SubmitOutcome::Failed);
        assert_eq!(state.phase(), FormPhase::Idle);
        assert_eq!(msg.kind, MessageKind::Error);
        assert_eq!(msg.text, ERROR_TEXT);

        state.begin();
        let msg = state.finish(SubmitOutcome::Delivered);
        assert_eq!(msg.kind, MessageKind::Success);
        assert_eq!(msg.text, SUCCESS_TEXT);
    }
}
