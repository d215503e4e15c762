//! Taxonomy Port - Read-only access to the artist category catalog.
//!
//! The Discipline step populates its choices from here; the session stores
//! only the chosen ids, never the catalog itself.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, DisciplineId};

/// Port for the external artist taxonomy.
pub trait TaxonomyProvider: Send + Sync {
    /// Returns all categories in display order.
    fn categories(&self) -> Vec<Category>;

    /// Looks up a category by id.
    fn category_by_id(&self, id: &CategoryId) -> Option<Category>;

    /// Returns a localized display name for a discipline within a category.
    fn discipline_name(
        &self,
        category: &CategoryId,
        discipline: &DisciplineId,
        locale: Locale,
    ) -> Option<String>;
}

/// A category and the disciplines it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub disciplines: Vec<DisciplineId>,
}

impl Category {
    /// Creates a new category.
    pub fn new(id: CategoryId, disciplines: Vec<DisciplineId>) -> Self {
        Self { id, disciplines }
    }

    /// Returns true if the discipline belongs to this category.
    pub fn contains(&self, discipline: &DisciplineId) -> bool {
        self.disciplines.contains(discipline)
    }
}

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Es
    }
}
