//! Application layer - Orchestration of the onboarding flow.
//!
//! The controller owns the session and drives it against the collaborator
//! ports; queries serve read-only data to the step screens.

mod controller;
mod discipline_options;

pub use controller::{LocationOutcome, LocationRequestToken, OnboardingController};
pub use discipline_options::{DisciplineOption, DisciplineOptions};
