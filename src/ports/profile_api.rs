//! Profile API Port - Interface for the profile-creation backend.
//!
//! Called exactly once per submission attempt at the end of the Location
//! step. Persistence is entirely the collaborator's concern; the onboarding
//! engine owns no stored state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ArtistProfileId, CategoryId, DisciplineId, PhotoRef, UserId,
};

/// Port for creating the artist profile from a completed onboarding session.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Creates the profile. Resolves with the new profile id or rejects;
    /// no timeout is modeled and the call is never retried automatically.
    async fn submit_profile(&self, profile: NewArtistProfile)
        -> Result<ArtistProfileId, ProfileApiError>;
}

/// Validated draft of the profile to create.
///
/// Built from a gate-complete session; construction is the one place the
/// field maximums are enforced (the setters themselves accept raw input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArtistProfile {
    pub user_id: UserId,
    pub display_name: String,
    pub username: String,
    pub photo: Option<PhotoRef>,
    pub category: CategoryId,
    pub discipline: DisciplineId,
    pub city: String,
}

/// Profile creation errors.
#[derive(Debug, thiserror::Error)]
pub enum ProfileApiError {
    /// The username is already registered.
    #[error("username '{0}' is taken")]
    UsernameTaken(String),

    /// The backend rejected the profile data.
    #[error("profile rejected: {reason}")]
    Rejected { reason: String },

    /// Network failure reaching the backend.
    #[error("network error: {0}")]
    Network(String),

    /// The backend is temporarily unavailable.
    #[error("profile service unavailable: {0}")]
    Unavailable(String),
}

impl ProfileApiError {
    /// Creates a rejection error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected { reason: reason.into() }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Returns true if pressing submit again is worth trying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProfileApiError::Network(_) | ProfileApiError::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(ProfileApiError::network("timeout").is_retryable());
        assert!(ProfileApiError::Unavailable("maintenance".into()).is_retryable());
        assert!(!ProfileApiError::UsernameTaken("ana".into()).is_retryable());
        assert!(!ProfileApiError::rejected("bad city").is_retryable());
    }

    #[test]
    fn errors_display_correctly() {
        assert_eq!(
            ProfileApiError::UsernameTaken("ana".into()).to_string(),
            "username 'ana' is taken"
        );
        assert_eq!(
            ProfileApiError::rejected("bad city").to_string(),
            "profile rejected: bad city"
        );
    }
}
