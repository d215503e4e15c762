//! Scripted Geolocation Adapter
//!
//! Plays back a fixed script instead of talking to a platform location API.
//! Used by the test suites and by host apps during development.

use async_trait::async_trait;

use crate::ports::{GeoError, GeolocationProvider, PermissionStatus, Placemark, Position};

/// Default fix used by the granted script (central Medellín).
const DEFAULT_FIX: Position = Position { latitude: 6.2442, longitude: -75.5812 };

#[derive(Debug, Clone)]
enum Script {
    Granted { place: String },
    Denied,
    Unavailable { message: String },
    GeocodeFailing { message: String },
}

/// Geolocation provider that follows a fixed script.
#[derive(Debug, Clone)]
pub struct ScriptedGeolocation {
    script: Script,
}

impl ScriptedGeolocation {
    /// Permission granted, position fixed, geocoder detects `place`.
    pub fn granted_in(place: impl Into<String>) -> Self {
        Self { script: Script::Granted { place: place.into() } }
    }

    /// Permission denied.
    pub fn denied() -> Self {
        Self { script: Script::Denied }
    }

    /// Permission granted but the position fix fails.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self { script: Script::Unavailable { message: message.into() } }
    }

    /// Permission and fix succeed but reverse geocoding fails.
    pub fn geocode_failing(message: impl Into<String>) -> Self {
        Self { script: Script::GeocodeFailing { message: message.into() } }
    }
}

#[async_trait]
impl GeolocationProvider for ScriptedGeolocation {
    async fn request_permission(&self) -> Result<PermissionStatus, GeoError> {
        match &self.script {
            Script::Denied => Ok(PermissionStatus::Denied),
            _ => Ok(PermissionStatus::Granted),
        }
    }

    async fn current_position(&self) -> Result<Position, GeoError> {
        match &self.script {
            Script::Denied => Err(GeoError::PermissionDenied),
            Script::Unavailable { message } => Err(GeoError::position_unavailable(message.clone())),
            _ => Ok(DEFAULT_FIX),
        }
    }

    async fn reverse_geocode(&self, _position: Position) -> Result<Placemark, GeoError> {
        match &self.script {
            Script::Granted { place } => Ok(Placemark::city(place.clone())),
            Script::Denied => Err(GeoError::PermissionDenied),
            Script::Unavailable { message } | Script::GeocodeFailing { message } => {
                Err(GeoError::geocoding_failed(message.clone()))
            }
        }
    }
}
