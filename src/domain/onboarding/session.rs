//! OnboardingSession aggregate.
//!
//! A single mutable record owned by the controller, living exactly as long
//! as one onboarding attempt: created when onboarding starts (all fields
//! empty, first step), mutated only through the methods below, and dropped
//! when the profile is submitted or the flow is abandoned.
//!
//! # Invariants
//!
//! - `step` only ever moves to an adjacent step, never skips.
//! - `advance` rejects when the current step's gate fails; `retreat` clears
//!   no data, so advance-then-retreat is a lossless round trip.
//! - `city` is set only by coverage resolution or the explicit Medellín
//!   override; `None` means unresolved or ineligible.
//! - `submission` transitions follow [`SubmissionStatus`]'s state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CategoryId, DisciplineId, DomainError, ErrorCode, PhotoRef, StateMachine, Timestamp, UserId,
};
use crate::domain::location::{CoverageResolution, MEDELLIN};

use super::{gate, OnboardingStep, SubmissionStatus};

/// Maximum length for the display name (enforced at draft construction).
pub const MAX_DISPLAY_NAME_CHARS: usize = 50;

/// Maximum length for the username (enforced at draft construction).
pub const MAX_USERNAME_CHARS: usize = 20;

/// Mutable state of one onboarding attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSession {
    /// User going through onboarding.
    user_id: UserId,

    /// Current wizard step.
    step: OnboardingStep,

    /// Public artist name. Raw as typed, no validation on set.
    display_name: String,

    /// Unique handle. Raw as typed, no validation on set.
    username: String,

    /// Locally picked profile photo, if any.
    photo: Option<PhotoRef>,

    /// Chosen category id from the external taxonomy.
    category: Option<CategoryId>,

    /// Chosen discipline id. Not cleared when the category changes; see
    /// `select_category`.
    discipline: Option<DisciplineId>,

    /// Resolved city. `Some(MEDELLIN)` once coverage is confirmed,
    /// `None` while unresolved or out of coverage.
    city: Option<String>,

    /// Lifecycle of the profile-creation call.
    submission: SubmissionStatus,

    /// When onboarding started.
    created_at: Timestamp,
}

impl OnboardingSession {
    /// Creates a fresh session at the first step with all fields empty.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            step: OnboardingStep::first(),
            display_name: String::new(),
            username: String::new(),
            photo: None,
            category: None,
            discipline: None,
            city: None,
            submission: SubmissionStatus::Idle,
            created_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the user going through onboarding.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the current step.
    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Returns the display name as typed.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the username as typed.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the picked photo, if any.
    pub fn photo(&self) -> Option<&PhotoRef> {
        self.photo.as_ref()
    }

    /// Returns the chosen category id.
    pub fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }

    /// Returns the chosen discipline id.
    pub fn discipline(&self) -> Option<&DisciplineId> {
        self.discipline.as_ref()
    }

    /// Returns the resolved city, if coverage has been confirmed.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Returns the submission lifecycle status.
    pub fn submission(&self) -> SubmissionStatus {
        self.submission
    }

    /// Returns true while the host should show the creating-profile screen.
    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    /// Returns when onboarding started.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true iff the gate for the given step passes.
    pub fn gate_passes(&self, step: OnboardingStep) -> bool {
        gate::passes(self, step)
    }

    /// Returns true iff the current step's gate passes.
    pub fn can_continue(&self) -> bool {
        self.gate_passes(self.step)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field setters (no validation, never change `step`)
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets the display name.
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }

    /// Sets the username.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Stores a picked photo.
    pub fn set_photo(&mut self, photo: PhotoRef) {
        self.photo = Some(photo);
    }

    /// Removes the picked photo.
    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    /// Selects a category.
    ///
    /// A previously selected discipline is NOT cleared, even when it belongs
    /// to the old category. The Discipline step re-renders its choices from
    /// the new category, so a stale id cannot be confirmed visually, but it
    /// stays on the session until the user picks again.
    pub fn select_category(&mut self, category: CategoryId) {
        self.category = Some(category);
    }

    /// Selects a discipline.
    pub fn select_discipline(&mut self, discipline: DisciplineId) {
        self.discipline = Some(discipline);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves to the next step after checking the current step's gate.
    ///
    /// # Errors
    ///
    /// - `StepGateFailed` if the current step's gate fails; `step` unchanged.
    /// - `AtFinalStep` at the Location step, where the forward action is
    ///   submission, not navigation; `step` unchanged.
    pub fn advance(&mut self) -> Result<OnboardingStep, DomainError> {
        if !self.can_continue() {
            return Err(DomainError::new(
                ErrorCode::StepGateFailed,
                format!("{} step is incomplete", self.step),
            )
            .with_detail("step", self.step.display_name()));
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(next)
            }
            None => Err(DomainError::new(
                ErrorCode::AtFinalStep,
                "Already at the final step; submit the profile instead",
            )),
        }
    }

    /// Moves to the previous step. No-op at the first step; clears no data.
    pub fn retreat(&mut self) -> OnboardingStep {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
        }
        self.step
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Location resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a coverage resolution: a match sets the canonical city, a
    /// miss clears it (no-coverage is a product state, not an error).
    pub fn apply_coverage(&mut self, resolution: CoverageResolution) {
        match resolution {
            CoverageResolution::Covered => self.city = Some(MEDELLIN.to_string()),
            CoverageResolution::NoCoverage => self.city = None,
        }
    }

    /// Sets the city to Medellín unconditionally.
    ///
    /// Escape hatch for users outside the coverage keyword list who still
    /// want to register in Medellín.
    pub fn select_medellin(&mut self) {
        self.city = Some(MEDELLIN.to_string());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Enters the `Submitting` state, synchronously, before any async work.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if not at the Location step or the status
    ///   does not allow starting (already submitting, or already succeeded).
    /// - `StepGateFailed` if the Location gate fails.
    pub fn begin_submission(&mut self) -> Result<(), DomainError> {
        if !self.step.is_last() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot submit from the {} step", self.step),
            ));
        }
        if !self.gate_passes(OnboardingStep::Location) {
            return Err(DomainError::new(
                ErrorCode::StepGateFailed,
                "Location step is incomplete",
            ));
        }
        self.submission = self
            .submission
            .transition_to(SubmissionStatus::Submitting)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        Ok(())
    }

    /// Records that the profile-creation call resolved.
    pub fn complete_submission(&mut self) -> Result<(), DomainError> {
        self.submission = self
            .submission
            .transition_to(SubmissionStatus::Succeeded)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        Ok(())
    }

    /// Records that the profile-creation call rejected. Field values are
    /// preserved; the user may retry.
    pub fn fail_submission(&mut self) -> Result<(), DomainError> {
        self.submission = self
            .submission
            .transition_to(SubmissionStatus::Failed)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        Ok(())
    }
}
