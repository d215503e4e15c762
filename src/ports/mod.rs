//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the onboarding domain and the outside world. Adapters implement them.
//!
//! - `GeolocationProvider` - Device location + reverse geocoding
//! - `PhotoPicker` - Local profile photo selection
//! - `ProfileApi` - Profile creation at the end of the flow
//! - `TaxonomyProvider` - Read-only artist category catalog

mod geolocation;
mod photo_picker;
mod profile_api;
mod taxonomy;

pub use geolocation::{GeoError, GeolocationProvider, PermissionStatus, Placemark, Position};
pub use photo_picker::{PhotoPicker, PhotoPickerError};
pub use profile_api::{NewArtistProfile, ProfileApi, ProfileApiError};
pub use taxonomy::{Category, Locale, TaxonomyProvider};
