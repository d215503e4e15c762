//! In-Memory Profile API Adapter
//!
//! Records submission attempts instead of calling a backend. Supports
//! always-succeeding, always-failing, fail-once and never-resolving modes
//! so the submission lifecycle can be observed from tests and development
//! builds.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::ArtistProfileId;
use crate::ports::{NewArtistProfile, ProfileApi, ProfileApiError};

type ErrorFactory = Box<dyn Fn() -> ProfileApiError + Send + Sync>;

enum Mode {
    Succeed,
    Failing(ErrorFactory),
    FailOnce(Mutex<Option<ProfileApiError>>),
    Pending,
}

/// Profile API that records submissions in memory.
pub struct InMemoryProfileApi {
    mode: Mode,
    submissions: Arc<RwLock<Vec<NewArtistProfile>>>,
}

impl InMemoryProfileApi {
    /// Every submission succeeds.
    pub fn new() -> Self {
        Self::with_mode(Mode::Succeed)
    }

    /// Every submission fails with a fresh error from the factory.
    pub fn failing(factory: impl Fn() -> ProfileApiError + Send + Sync + 'static) -> Self {
        Self::with_mode(Mode::Failing(Box::new(factory)))
    }

    /// The first submission fails with the given error, later ones succeed.
    pub fn fail_once(error: ProfileApiError) -> Self {
        Self::with_mode(Mode::FailOnce(Mutex::new(Some(error))))
    }

    /// Submissions never resolve; the call stays in flight forever.
    pub fn pending() -> Self {
        Self::with_mode(Mode::Pending)
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            submissions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns every profile draft received so far, in order.
    pub async fn submitted(&self) -> Vec<NewArtistProfile> {
        self.submissions.read().await.clone()
    }

    /// Returns the number of submission attempts received.
    pub async fn submission_count(&self) -> usize {
        self.submissions.read().await.len()
    }
}

impl Default for InMemoryProfileApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileApi for InMemoryProfileApi {
    async fn submit_profile(
        &self,
        profile: NewArtistProfile,
    ) -> Result<ArtistProfileId, ProfileApiError> {
        self.submissions.write().await.push(profile);

        match &self.mode {
            Mode::Succeed => Ok(ArtistProfileId::new()),
            Mode::Failing(factory) => Err(factory()),
            Mode::FailOnce(slot) => match slot.lock().await.take() {
                Some(err) => Err(err),
                None => Ok(ArtistProfileId::new()),
            },
            Mode::Pending => futures::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CategoryId, DisciplineId, UserId};
    use crate::domain::location::MEDELLIN;

    fn draft(username: &str) -> NewArtistProfile {
        NewArtistProfile {
            user_id: UserId::new("artist-1").unwrap(),
            display_name: "Ana".into(),
            username: username.into(),
            photo: None,
            category: CategoryId::new("music").unwrap(),
            discipline: DisciplineId::new("dj").unwrap(),
            city: MEDELLIN.into(),
        }
    }

    #[tokio::test]
    async fn records_submissions_in_order() {
        let api = InMemoryProfileApi::new();
        api.submit_profile(draft("ana")).await.unwrap();
        api.submit_profile(draft("maria")).await.unwrap();

        let submitted = api.submitted().await;
        assert_eq!(submitted.len(), 2);
        assert_eq!(submitted[0].username, "ana");
        assert_eq!(submitted[1].username, "maria");
    }

    #[tokio::test]
    async fn failing_mode_always_fails_but_still_records() {
        let api = InMemoryProfileApi::failing(|| ProfileApiError::network("down"));
        assert!(api.submit_profile(draft("ana")).await.is_err());
        assert!(api.submit_profile(draft("ana")).await.is_err());
        assert_eq!(api.submission_count().await, 2);
    }

    #[tokio::test]
    async fn fail_once_mode_recovers_on_retry() {
        let api = InMemoryProfileApi::fail_once(ProfileApiError::network("flaky"));
        assert!(api.submit_profile(draft("ana")).await.is_err());
        assert!(api.submit_profile(draft("ana")).await.is_ok());
    }
}
