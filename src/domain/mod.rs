//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `onboarding` - Step sequence, session aggregate, gates, submission lifecycle
//! - `location` - Coverage resolution for the launch area

pub mod foundation;
pub mod location;
pub mod onboarding;
