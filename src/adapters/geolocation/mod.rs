//! Geolocation adapters.

mod scripted;

pub use scripted::ScriptedGeolocation;
