//! Static Taxonomy Adapter
//!
//! Ships the launch taxonomy as fixed in-memory data. The catalog is owned
//! by the backend in production; this adapter mirrors its shape for tests
//! and offline development.

use std::collections::HashMap;

use crate::domain::foundation::{CategoryId, DisciplineId, ValidationError};
use crate::ports::{Category, Locale, TaxonomyProvider};

/// Taxonomy provider backed by a fixed catalog.
pub struct StaticCatalog {
    categories: Vec<Category>,
    labels: HashMap<(String, String, Locale), String>,
}

impl StaticCatalog {
    /// Builds an empty catalog.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            labels: HashMap::new(),
        }
    }

    /// Builds the launch catalog: music, visual arts, performance,
    /// audiovisual, with es/en discipline labels.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();

        catalog
            .add_category("music", &[
                ("dj", "DJ", "DJ"),
                ("singer", "Cantante", "Singer"),
                ("band", "Banda", "Band"),
                ("instrumentalist", "Instrumentista", "Instrumentalist"),
            ])
            .expect("valid default catalog");
        catalog
            .add_category("visual_arts", &[
                ("painter", "Pintor/a", "Painter"),
                ("muralist", "Muralista", "Muralist"),
                ("illustrator", "Ilustrador/a", "Illustrator"),
            ])
            .expect("valid default catalog");
        catalog
            .add_category("performance", &[
                ("dancer", "Bailarín/a", "Dancer"),
                ("actor", "Actor/Actriz", "Actor"),
                ("magician", "Mago/a", "Magician"),
            ])
            .expect("valid default catalog");
        catalog
            .add_category("audiovisual", &[
                ("photographer", "Fotógrafo/a", "Photographer"),
                ("videographer", "Videógrafo/a", "Videographer"),
            ])
            .expect("valid default catalog");

        catalog
    }

    /// Adds a category with `(discipline_id, es_label, en_label)` entries.
    pub fn add_category(
        &mut self,
        category_id: &str,
        disciplines: &[(&str, &str, &str)],
    ) -> Result<(), ValidationError> {
        let category_id = CategoryId::new(category_id)?;
        let mut ids = Vec::with_capacity(disciplines.len());

        for (discipline_id, es, en) in disciplines {
            let discipline_id = DisciplineId::new(*discipline_id)?;
            let key = (category_id.as_str().to_string(), discipline_id.as_str().to_string());
            self.labels.insert((key.0.clone(), key.1.clone(), Locale::Es), es.to_string());
            self.labels.insert((key.0, key.1, Locale::En), en.to_string());
            ids.push(discipline_id);
        }

        self.categories.push(Category::new(category_id, ids));
        Ok(())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TaxonomyProvider for StaticCatalog {
    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn category_by_id(&self, id: &CategoryId) -> Option<Category> {
        self.categories.iter().find(|c| &c.id == id).cloned()
    }

    fn discipline_name(
        &self,
        category: &CategoryId,
        discipline: &DisciplineId,
        locale: Locale,
    ) -> Option<String> {
        self.labels
            .get(&(category.as_str().to_string(), discipline.as_str().to_string(), locale))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_four_categories() {
        let catalog = StaticCatalog::with_defaults();
        assert_eq!(catalog.categories().len(), 4);
    }

    #[test]
    fn category_lookup_finds_disciplines() {
        let catalog = StaticCatalog::with_defaults();
        let music = catalog.category_by_id(&CategoryId::new("music").unwrap()).unwrap();
        assert!(music.contains(&DisciplineId::new("dj").unwrap()));
        assert!(!music.contains(&DisciplineId::new("painter").unwrap()));
    }

    #[test]
    fn unknown_category_returns_none() {
        let catalog = StaticCatalog::with_defaults();
        assert!(catalog.category_by_id(&CategoryId::new("juggling").unwrap()).is_none());
    }

    #[test]
    fn labels_are_localized() {
        let catalog = StaticCatalog::with_defaults();
        let category = CategoryId::new("performance").unwrap();
        let discipline = DisciplineId::new("dancer").unwrap();
        assert_eq!(
            catalog.discipline_name(&category, &discipline, Locale::Es).unwrap(),
            "Bailarín/a"
        );
        assert_eq!(
            catalog.discipline_name(&category, &discipline, Locale::En).unwrap(),
            "Dancer"
        );
    }

    #[test]
    fn missing_label_returns_none() {
        let catalog = StaticCatalog::with_defaults();
        assert!(catalog
            .discipline_name(
                &CategoryId::new("music").unwrap(),
                &DisciplineId::new("painter").unwrap(),
                Locale::Es,
            )
            .is_none());
    }
}
