//! Palco Onboarding - Artist Onboarding Flow Engine
//!
//! This crate implements the multi-step onboarding flow new artists complete
//! before their profile is created on the Palco marketplace: step progression,
//! validation gating, location coverage resolution, and the submission
//! lifecycle against the profile-creation API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
