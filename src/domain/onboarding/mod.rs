//! Onboarding module - The multi-step flow new artists complete.

pub mod gate;
mod session;
mod step;
mod submission;

pub use session::{OnboardingSession, MAX_DISPLAY_NAME_CHARS, MAX_USERNAME_CHARS};
pub use step::OnboardingStep;
pub use submission::SubmissionStatus;
