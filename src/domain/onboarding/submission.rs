//! SubmissionStatus - Lifecycle of the profile-creation call.
//!
//! `Idle → Submitting → {Succeeded, Failed}`, with `Failed → Submitting`
//! allowed so the user can retry by pressing the action again. Nothing is
//! retried automatically and no timeout is modeled: the call holds the
//! `Submitting` state until the collaborator resolves or rejects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Status of the profile submission for this onboarding session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// No submission attempted, or the previous attempt has not started.
    Idle,
    /// The profile-creation call is in flight.
    Submitting,
    /// The profile was created; the session is being handed off.
    Succeeded,
    /// The previous attempt failed; the user may retry.
    Failed,
}

impl SubmissionStatus {
    /// Returns true while the loading screen should be shown.
    ///
    /// Deliberately stays true after success: the screen showing the flag is
    /// about to be replaced by the post-onboarding flow, so there is no
    /// explicit reset on the success path. A failure resets it.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting | SubmissionStatus::Succeeded)
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Idle
    }
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Idle, Submitting) | (Submitting, Succeeded) | (Submitting, Failed) | (Failed, Submitting)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Idle => vec![Submitting],
            Submitting => vec![Succeeded, Failed],
            Succeeded => vec![],
            Failed => vec![Submitting],
        }
    }
}
