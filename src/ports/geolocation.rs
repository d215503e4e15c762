//! Geolocation Port - Interface for device location and reverse geocoding.
//!
//! The onboarding flow never talks to a platform location API directly; it
//! asks this port for a permission decision, a position fix, and a
//! reverse-geocoded place name, then runs the coverage matcher over the
//! result. Neither call supports cancellation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for device geolocation and reverse geocoding.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Asks the platform for location permission.
    async fn request_permission(&self) -> Result<PermissionStatus, GeoError>;

    /// Acquires the device's current position.
    ///
    /// Call only after permission was granted.
    async fn current_position(&self) -> Result<Position, GeoError>;

    /// Reverse-geocodes a position to a placemark.
    async fn reverse_geocode(&self, position: Position) -> Result<Placemark, GeoError>;
}

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// A geographic position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Reverse-geocoded place description.
///
/// Geocoders fill these fields inconsistently, so the detected place name is
/// the first non-empty of city, subregion, region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placemark {
    pub city: Option<String>,
    pub subregion: Option<String>,
    pub region: Option<String>,
}

impl Placemark {
    /// Creates a placemark with only a city.
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    /// Returns the first non-empty of city, subregion, region.
    pub fn place_name(&self) -> Option<&str> {
        [&self.city, &self.subregion, &self.region]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .find(|s| !s.trim().is_empty())
    }
}

/// Geolocation errors.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// The user denied location permission.
    #[error("location permission denied")]
    PermissionDenied,

    /// The position fix could not be acquired.
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    /// The reverse geocoder failed or was unreachable.
    #[error("reverse geocoding failed: {0}")]
    GeocodingFailed(String),
}

impl GeoError {
    /// Creates a position unavailable error.
    pub fn position_unavailable(message: impl Into<String>) -> Self {
        Self::PositionUnavailable(message.into())
    }

    /// Creates a geocoding failure.
    pub fn geocoding_failed(message: impl Into<String>) -> Self {
        Self::GeocodingFailed(message.into())
    }
}
