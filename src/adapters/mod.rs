//! Adapters - Implementations of port interfaces.
//!
//! In-memory and scripted adapters for tests and host-app development.
//! Production adapters (platform geolocation, the real profile backend)
//! live with the host applications.

pub mod geolocation;
pub mod photo;
pub mod profile;
pub mod taxonomy;
