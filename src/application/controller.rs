//! OnboardingController - Orchestrates the four-step onboarding flow.
//!
//! Owns the [`OnboardingSession`] and the collaborator ports. The four step
//! screens hold a reference to one controller instance and drive everything
//! through it; there is no ambient provider to look up, the dependencies are
//! constructor arguments.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{FeatureFlags, OnboardingConfig};
use crate::domain::foundation::{
    ArtistProfileId, CategoryId, DisciplineId, DomainError, ErrorCode, PhotoRef, UserId,
    ValidationError,
};
use crate::domain::location::{self, CoverageResolution};
use crate::domain::onboarding::{OnboardingSession, OnboardingStep};
use crate::ports::{
    GeoError, GeolocationProvider, NewArtistProfile, PermissionStatus, PhotoPicker, ProfileApi,
};

/// Token identifying one location request.
///
/// Each request gets a fresh token; a response is applied only if its token
/// is still the latest, so a slow early response can never overwrite the
/// result of a request triggered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequestToken(u64);

/// Outcome of a location resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationOutcome {
    /// Coverage confirmed; the session city is set.
    Covered,
    /// The detected place is outside coverage; the session city is cleared.
    /// A product state, not an error: the UI shows a banner with the
    /// explicit "register in Medellín anyway" override.
    NoCoverage { detected: String },
    /// The user denied location permission. Manual entry stays available.
    PermissionDenied,
    /// Position fix or geocoding failed. The session city is unchanged.
    Unavailable { message: String },
    /// A newer request was started before this response arrived; the
    /// response was discarded and the session city is unchanged.
    Superseded,
}

/// Controller for one onboarding session.
pub struct OnboardingController {
    session: OnboardingSession,
    geolocation: Arc<dyn GeolocationProvider>,
    photo_picker: Arc<dyn PhotoPicker>,
    profile_api: Arc<dyn ProfileApi>,
    config: OnboardingConfig,
    features: FeatureFlags,
    /// Sequence number of the latest location request.
    location_seq: u64,
    /// Sequence number of the latest settled (applied or failed) request.
    location_settled: u64,
}

impl OnboardingController {
    /// Creates a controller with a fresh session and default configuration.
    pub fn new(
        user_id: UserId,
        geolocation: Arc<dyn GeolocationProvider>,
        photo_picker: Arc<dyn PhotoPicker>,
        profile_api: Arc<dyn ProfileApi>,
    ) -> Self {
        Self {
            session: OnboardingSession::new(user_id),
            geolocation,
            photo_picker,
            profile_api,
            config: OnboardingConfig::default(),
            features: FeatureFlags::default(),
            location_seq: 0,
            location_settled: 0,
        }
    }

    /// Replaces configuration and feature flags.
    pub fn with_settings(mut self, config: OnboardingConfig, features: FeatureFlags) -> Self {
        self.config = config;
        self.features = features;
        self
    }

    /// Returns the session for reads (step, field values, gates, status).
    pub fn session(&self) -> &OnboardingSession {
        &self.session
    }

    /// Returns true while a location request is outstanding.
    pub fn is_locating(&self) -> bool {
        self.location_seq != self.location_settled
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field input (delegates; no validation, step unchanged)
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets the display name.
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.session.set_display_name(name);
    }

    /// Sets the username.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.session.set_username(username);
    }

    /// Selects a category.
    pub fn select_category(&mut self, category: CategoryId) {
        self.session.select_category(category);
    }

    /// Selects a discipline.
    pub fn select_discipline(&mut self, discipline: DisciplineId) {
        self.session.select_discipline(discipline);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Advances to the next step; the current step's gate must pass.
    pub fn continue_to_next_step(&mut self) -> Result<OnboardingStep, DomainError> {
        let step = self.session.advance()?;
        debug!(step = %step, "advanced onboarding step");
        Ok(step)
    }

    /// Goes back one step. No-op at the first step; clears no data.
    pub fn go_to_previous_step(&mut self) -> OnboardingStep {
        self.session.retreat()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Photo
    // ─────────────────────────────────────────────────────────────────────────

    /// Opens the photo picker and stores the result.
    ///
    /// Returns `Ok(None)` when the user cancels; the session is unchanged.
    pub async fn pick_photo(&mut self) -> Result<Option<PhotoRef>, DomainError> {
        let picked = self
            .photo_picker
            .pick_photo()
            .await
            .map_err(|e| DomainError::new(ErrorCode::PhotoPickerFailed, e.to_string()))?;

        match picked {
            Some(photo) => {
                self.session.set_photo(photo.clone());
                Ok(Some(photo))
            }
            None => Ok(None),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Location resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a location request and returns its token.
    ///
    /// Any previously issued token becomes stale immediately.
    pub fn begin_location_request(&mut self) -> LocationRequestToken {
        self.location_seq += 1;
        LocationRequestToken(self.location_seq)
    }

    /// Applies a detected place name for the given request.
    ///
    /// Stale tokens are discarded without touching the session.
    pub fn apply_location_response(
        &mut self,
        token: LocationRequestToken,
        place: &str,
    ) -> LocationOutcome {
        if token.0 != self.location_seq {
            debug!(token = token.0, latest = self.location_seq, "discarding stale location response");
            return LocationOutcome::Superseded;
        }
        self.location_settled = token.0;

        match location::resolve(place) {
            CoverageResolution::Covered => {
                info!(place, "location resolved inside coverage");
                self.session.apply_coverage(CoverageResolution::Covered);
                LocationOutcome::Covered
            }
            CoverageResolution::NoCoverage => {
                info!(place, "location resolved outside coverage");
                self.session.apply_coverage(CoverageResolution::NoCoverage);
                LocationOutcome::NoCoverage { detected: place.to_string() }
            }
        }
    }

    /// Full GPS resolution: permission, position fix, reverse geocode,
    /// coverage match. Permission denial and acquisition failures come back
    /// as outcomes, not errors; the user re-triggers manually, nothing loops.
    pub async fn detect_location(&mut self) -> LocationOutcome {
        let token = self.begin_location_request();

        match self.geolocation.request_permission().await {
            Ok(PermissionStatus::Granted) => {}
            Ok(PermissionStatus::Denied) | Err(GeoError::PermissionDenied) => {
                warn!("location permission denied");
                self.settle(token);
                return LocationOutcome::PermissionDenied;
            }
            Err(e) => return self.settle_unavailable(token, e),
        }

        let position = match self.geolocation.current_position().await {
            Ok(p) => p,
            Err(e) => return self.settle_unavailable(token, e),
        };

        let placemark = match self.geolocation.reverse_geocode(position).await {
            Ok(p) => p,
            Err(e) => return self.settle_unavailable(token, e),
        };

        match placemark.place_name() {
            Some(place) => {
                let place = place.to_string();
                self.apply_location_response(token, &place)
            }
            None => self.settle_unavailable(
                token,
                GeoError::geocoding_failed("geocoder returned no place name"),
            ),
        }
    }

    /// Runs the coverage matcher over manually typed text.
    pub fn resolve_manual_city(&mut self, text: &str) -> LocationOutcome {
        let token = self.begin_location_request();
        self.apply_location_response(token, text)
    }

    /// Sets the city to Medellín without a coverage match.
    ///
    /// The opt-in path behind the no-coverage banner.
    pub fn register_in_medellin_anyway(&mut self) -> Result<(), DomainError> {
        if !self.features.allow_coverage_override {
            return Err(DomainError::new(
                ErrorCode::OverrideDisabled,
                "Coverage override is disabled",
            ));
        }
        info!("registering in Medellín via coverage override");
        self.session.select_medellin();
        Ok(())
    }

    fn settle(&mut self, token: LocationRequestToken) {
        if token.0 == self.location_seq {
            self.location_settled = token.0;
        }
    }

    fn settle_unavailable(&mut self, token: LocationRequestToken, err: GeoError) -> LocationOutcome {
        warn!(error = %err, "location acquisition failed");
        self.settle(token);
        LocationOutcome::Unavailable { message: err.to_string() }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────────────────────

    /// Submits the profile.
    ///
    /// The session enters `Submitting` synchronously before the API call is
    /// awaited, so the host can swap to the creating-profile screen without
    /// a frame of stale content. On failure the session drops back out of
    /// `Submitting`, field values survive, and the collaborator's error is
    /// propagated inside the returned `DomainError`.
    pub async fn submit(&mut self) -> Result<ArtistProfileId, DomainError> {
        let draft = self.build_draft()?;
        self.session.begin_submission()?;
        info!(username = draft.username.as_str(), "submitting artist profile");

        match self.profile_api.submit_profile(draft).await {
            Ok(profile_id) => {
                self.session.complete_submission()?;
                info!(%profile_id, "artist profile created");
                Ok(profile_id)
            }
            Err(e) => {
                self.session.fail_submission()?;
                warn!(error = %e, "profile submission failed");
                Err(DomainError::submission_failed(e))
            }
        }
    }

    /// Builds the profile draft from the session, enforcing field maximums.
    fn build_draft(&self) -> Result<NewArtistProfile, DomainError> {
        let display_name = self.session.display_name().trim().to_string();
        let username = self.session.username().trim().to_string();

        check_max_chars("display_name", &display_name, self.config.max_display_name_chars)?;
        check_max_chars("username", &username, self.config.max_username_chars)?;

        let category = self
            .session
            .category()
            .cloned()
            .ok_or_else(|| DomainError::validation("category", "No category selected"))?;
        let discipline = self
            .session
            .discipline()
            .cloned()
            .ok_or_else(|| DomainError::validation("discipline", "No discipline selected"))?;
        let city = self
            .session
            .city()
            .map(str::to_string)
            .ok_or_else(|| DomainError::validation("city", "City is unresolved"))?;

        Ok(NewArtistProfile {
            user_id: self.session.user_id().clone(),
            display_name,
            username,
            photo: self.session.photo().cloned(),
            category,
            discipline,
            city,
        })
    }
}

fn check_max_chars(field: &'static str, value: &str, max: usize) -> Result<(), DomainError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::out_of_range(field, 0, max, actual).into());
    }
    Ok(())
}
