//! DisciplineOptions - Query for the Discipline step's choices.

use std::sync::Arc;

use crate::domain::foundation::{CategoryId, DisciplineId, DomainError, ErrorCode};
use crate::ports::{Locale, TaxonomyProvider};

/// A discipline choice with its localized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineOption {
    pub id: DisciplineId,
    pub label: String,
}

/// Read-side query resolving a category's disciplines to display options.
pub struct DisciplineOptions {
    taxonomy: Arc<dyn TaxonomyProvider>,
}

impl DisciplineOptions {
    pub fn new(taxonomy: Arc<dyn TaxonomyProvider>) -> Self {
        Self { taxonomy }
    }

    /// Returns the options for a category, labels localized.
    ///
    /// Falls back to the raw discipline id when no localized name exists.
    ///
    /// # Errors
    ///
    /// - `CategoryNotFound` for an id missing from the taxonomy.
    pub fn for_category(
        &self,
        category: &CategoryId,
        locale: Locale,
    ) -> Result<Vec<DisciplineOption>, DomainError> {
        let found = self.taxonomy.category_by_id(category).ok_or_else(|| {
            DomainError::new(
                ErrorCode::CategoryNotFound,
                format!("Unknown category '{}'", category),
            )
        })?;

        Ok(found
            .disciplines
            .iter()
            .map(|discipline| DisciplineOption {
                id: discipline.clone(),
                label: self
                    .taxonomy
                    .discipline_name(category, discipline, locale)
                    .unwrap_or_else(|| discipline.as_str().to_string()),
            })
            .collect())
    }
}
