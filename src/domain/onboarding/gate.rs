//! Step gates - Pure per-step predicates controlling the "Continue" action.
//!
//! These are deterministic functions of the session's field values, free of
//! hidden state, re-evaluated on every read. A failing gate is advisory for
//! the UI (the control is disabled, no error is surfaced);
//! [`OnboardingSession::advance`](super::OnboardingSession::advance)
//! additionally enforces it for programmatic callers.

use crate::domain::location::MEDELLIN;

use super::{OnboardingSession, OnboardingStep};

/// Minimum trimmed length for the display name.
pub const MIN_DISPLAY_NAME_CHARS: usize = 2;

/// Minimum trimmed length for the username.
pub const MIN_USERNAME_CHARS: usize = 3;

/// Returns true iff the gate for the given step passes on this session.
pub fn passes(session: &OnboardingSession, step: OnboardingStep) -> bool {
    match step {
        OnboardingStep::Identity => identity_complete(session),
        OnboardingStep::Category => session.category().is_some(),
        OnboardingStep::Discipline => session.discipline().is_some(),
        OnboardingStep::Location => session.city() == Some(MEDELLIN),
    }
}

/// Identity gate: trimmed display name and username meet their minimums.
pub fn identity_complete(session: &OnboardingSession) -> bool {
    trimmed_chars(session.display_name()) >= MIN_DISPLAY_NAME_CHARS
        && trimmed_chars(session.username()) >= MIN_USERNAME_CHARS
}

fn trimmed_chars(s: &str) -> usize {
    s.trim().chars().count()
}
