//! Coverage matching for the Medellín metro launch area.
//!
//! The product currently supports a single metro area. A free-text place
//! name (reverse-geocoded or typed by the user) is matched against a fixed
//! keyword list by lowercase substring containment. The substring policy is
//! deliberately loose ("San Itagui Norte" matches, and so would a town
//! literally named "Envigadolandia"): with a single-city launch the false
//! positive surface is acceptable and the check stays trivial.

use serde::{Deserialize, Serialize};

/// Canonical city name stored on the session once coverage is confirmed.
pub const MEDELLIN: &str = "Medellín";

/// Keywords identifying municipalities of the Medellín metro area.
///
/// Both accented and plain spellings are listed because geocoders are
/// inconsistent about diacritics.
pub const COVERAGE_KEYWORDS: &[&str] = &[
    "medellín",
    "medellin",
    "envigado",
    "bello",
    "itagüí",
    "itagui",
    "sabaneta",
    "copacabana",
    "la estrella",
];

/// Returns true iff the place name matches the coverage keyword list.
///
/// Matching is case-insensitive substring containment.
pub fn in_coverage(place: &str) -> bool {
    let normalized = place.to_lowercase();
    COVERAGE_KEYWORDS.iter().any(|kw| normalized.contains(kw))
}

/// Outcome of resolving a place name against the coverage area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageResolution {
    /// The place is inside the supported metro area.
    Covered,
    /// The place is outside coverage. Not an error: a first-class product
    /// state with its own banner and an explicit opt-in override.
    NoCoverage,
}

/// Resolves a free-text place name to a coverage outcome.
pub fn resolve(place: &str) -> CoverageResolution {
    if in_coverage(place) {
        CoverageResolution::Covered
    } else {
        CoverageResolution::NoCoverage
    }
}
