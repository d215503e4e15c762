//! OnboardingStep - The four steps of artist onboarding, in canonical order.
//!
//! 1. Identity (display name + username + optional photo) →
//! 2. Category → 3. Discipline → 4. Location
//!
//! Navigation only ever moves one step at a time; there is no skipping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four onboarding steps in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Identity,
    Category,
    Discipline,
    Location,
}

impl OnboardingStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Identity,
            OnboardingStep::Category,
            OnboardingStep::Discipline,
            OnboardingStep::Location,
        ]
    }

    /// Returns the 0-based index of this step in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .expect("OnboardingStep must be in all() array")
    }

    /// Returns the 1-based step number shown in the wizard (1..=4).
    pub fn number(&self) -> u8 {
        self.order_index() as u8 + 1
    }

    /// Returns the next step in order, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        let idx = self.order_index();
        Self::all().get(idx + 1).copied()
    }

    /// Returns the previous step in order, if any.
    pub fn previous(&self) -> Option<OnboardingStep> {
        let idx = self.order_index();
        if idx == 0 {
            None
        } else {
            Self::all().get(idx - 1).copied()
        }
    }

    /// Returns the first step in the sequence.
    pub fn first() -> OnboardingStep {
        Self::all()[0]
    }

    /// Returns the last step in the sequence.
    pub fn last() -> OnboardingStep {
        *Self::all().last().expect("at least one step")
    }

    /// Returns true if this is the first step.
    pub fn is_first(&self) -> bool {
        *self == Self::first()
    }

    /// Returns true if this is the last step (the one that submits).
    pub fn is_last(&self) -> bool {
        *self == Self::last()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            OnboardingStep::Identity => "Identity",
            OnboardingStep::Category => "Category",
            OnboardingStep::Discipline => "Discipline",
            OnboardingStep::Location => "Location",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
