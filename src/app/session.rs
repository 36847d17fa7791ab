// SPDX-License-Identifier: MPL-2.0
//! Generation session state machine.
//!
//! `Idle -> Generating -> Idle` on success, `Generating -> Error` on failure;
//! `Error` behaves like `Idle` for input purposes and clears on the next
//! submit. At most one generation is in flight: gating lives here, in one
//! place, instead of in scattered view booleans.
//!
//! Background removal is tracked by an independent flag that only gates the
//! removal controls, never new generation requests.

/// Current phase of the generation session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Generating,
    /// Holds the user-visible failure message from the last attempt.
    Error(String),
}

/// Session state plus the independent removal-in-progress gate.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    removal_in_progress: bool,
}

impl Session {
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.state == SessionState::Generating
    }

    /// The error message to render, if the last attempt failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SessionState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether a submit with this prompt would start a generation.
    #[must_use]
    pub fn can_submit(&self, prompt: &str) -> bool {
        !self.is_generating() && !prompt.trim().is_empty()
    }

    /// Transitions to `Generating` for a valid submit.
    ///
    /// Returns `false` without changing state when the prompt is empty after
    /// trimming or a generation is already in flight. A pending error is
    /// cleared by a successful transition.
    pub fn try_begin_generation(&mut self, prompt: &str) -> bool {
        if !self.can_submit(prompt) {
            return false;
        }
        self.state = SessionState::Generating;
        true
    }

    /// Success path: back to `Idle`.
    pub fn finish_generation(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Failure path: records the message for the error banner.
    pub fn fail_generation(&mut self, message: String) {
        self.state = SessionState::Error(message);
    }

    #[must_use]
    pub fn removal_in_progress(&self) -> bool {
        self.removal_in_progress
    }

    /// Marks a background removal as started; `false` when one already runs.
    pub fn try_begin_removal(&mut self) -> bool {
        if self.removal_in_progress {
            return false;
        }
        self.removal_in_progress = true;
        true
    }

    /// Marks the background removal as finished, success or not.
    pub fn finish_removal(&mut self) {
        self.removal_in_progress = false;
    }

    /// Whether the spinner overlay (generation or removal) should show.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.is_generating() || self.removal_in_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let session = Session::default();
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(!session.removal_in_progress());
    }

    #[test]
    fn empty_prompt_does_not_fire() {
        let mut session = Session::default();
        assert!(!session.try_begin_generation("   "));
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn submit_is_gated_precisely_while_generating() {
        let mut session = Session::default();
        assert!(session.can_submit("a fox"));

        assert!(session.try_begin_generation("a fox"));
        assert!(!session.can_submit("a fox"));
        assert!(!session.try_begin_generation("a fox"));

        session.finish_generation();
        assert!(session.can_submit("a fox"));
    }

    #[test]
    fn success_returns_to_idle() {
        let mut session = Session::default();
        session.try_begin_generation("a fox");
        session.finish_generation();
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn failure_records_message() {
        let mut session = Session::default();
        session.try_begin_generation("a fox");
        session.fail_generation("quota exceeded".to_string());
        assert_eq!(session.error_message(), Some("quota exceeded"));
    }

    #[test]
    fn error_state_accepts_next_submit_and_clears() {
        let mut session = Session::default();
        session.try_begin_generation("a fox");
        session.fail_generation("boom".to_string());

        assert!(session.can_submit("another fox"));
        assert!(session.try_begin_generation("another fox"));
        assert!(session.error_message().is_none());
    }

    #[test]
    fn removal_gate_is_independent_of_generation() {
        let mut session = Session::default();
        assert!(session.try_begin_removal());
        assert!(!session.try_begin_removal());

        // Removal does not block a new generation.
        assert!(session.try_begin_generation("a fox"));

        session.finish_removal();
        assert!(!session.removal_in_progress());
        assert!(session.is_generating());
    }

    #[test]
    fn busy_covers_both_gates() {
        let mut session = Session::default();
        assert!(!session.is_busy());
        session.try_begin_removal();
        assert!(session.is_busy());
        session.finish_removal();
        session.try_begin_generation("a fox");
        assert!(session.is_busy());
    }
}
