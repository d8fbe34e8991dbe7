use crate::core::types::PhraseEntry;
use crate::error::{PhraseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The dataset shipped with the crate.
const BUNDLED_PHRASES: &str = include_str!("../../data/phrases.json");

/// How many keys each category contributes to the no-match guidance.
pub const FALLBACK_EXAMPLES_PER_CATEGORY: usize = 4;

/// A labelled group of entries, e.g. "Colors".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Audio subfolder holding this category's clips, searched before the
    /// configured folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_folder: Option<String>,
    pub entries: Vec<PhraseEntry>,
}

/// On-disk shape of a phrase dataset (JSON or TOML).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseDataset {
    pub categories: Vec<Category>,
}

/// Immutable, ordered phrase table. Registration order is category order,
/// then entry order within a category; it decides every tie-break.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    categories: Vec<Category>,
    /// English key -> (category index, entry index).
    positions: HashMap<String, (usize, usize)>,
}

impl PhraseTable {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut positions = HashMap::new();
        for (c, category) in categories.iter().enumerate() {
            for (e, entry) in category.entries.iter().enumerate() {
                if positions.insert(entry.english.clone(), (c, e)).is_some() {
                    return Err(PhraseError::DuplicateKey(entry.english.clone()));
                }
            }
        }
        if positions.is_empty() {
            return Err(PhraseError::EmptyTable);
        }
        Ok(Self { categories, positions })
    }

    pub fn from_dataset(dataset: PhraseDataset) -> Result<Self> {
        Self::new(dataset.categories)
    }

    /// Parses the dataset embedded in the binary.
    pub fn bundled() -> Result<Self> {
        let dataset: PhraseDataset = serde_json::from_str(BUNDLED_PHRASES)?;
        Self::from_dataset(dataset)
    }

    pub fn get(&self, english: &str) -> Option<&PhraseEntry> {
        self.positions
            .get(english)
            .map(|&(c, e)| &self.categories[c].entries[e])
    }

    /// The category that registered `english`.
    pub fn category_of(&self, english: &str) -> Option<&Category> {
        self.positions
            .get(english)
            .map(|&(c, _)| &self.categories[c])
    }

    /// The audio folder declared by the category of `english`, if any.
    pub fn audio_folder_of(&self, english: &str) -> Option<&str> {
        self.category_of(english)?.audio_folder.as_deref()
    }

    /// All entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &PhraseEntry> {
        self.categories.iter().flat_map(|category| category.entries.iter())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Category label -> representative English keys, used only when nothing
/// matches. Independent of the search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    groups: Vec<(String, Vec<String>)>,
}

impl CategoryCatalog {
    pub fn from_table(table: &PhraseTable, per_category: usize) -> Self {
        let groups = table
            .categories()
            .iter()
            .filter(|category| !category.entries.is_empty())
            .map(|category| {
                let keys = category
                    .entries
                    .iter()
                    .take(per_category)
                    .map(|entry| entry.english.clone())
                    .collect();
                (category.name.clone(), keys)
            })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[(String, Vec<String>)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, entries: &[(&str, &str, &str)]) -> Category {
        Category {
            name: name.to_string(),
            audio_folder: None,
            entries: entries
                .iter()
                .map(|&(en, fil, agta)| PhraseEntry::new(en, fil, agta))
                .collect(),
        }
    }

    #[test]
    fn test_bundled_table_loads() {
        let table = PhraseTable::bundled().unwrap();
        assert_eq!(table.len(), 67);
        assert_eq!(table.categories().len(), 9);
        let mother = table.get("Mother").unwrap();
        assert_eq!(mother.filipino, "Nanay");
        assert_eq!(mother.casiguran_agta, "inéng");
        assert_eq!(table.entries().next().unwrap().english, "What is your name?");
        assert_eq!(table.audio_folder_of("Mother"), Some("Family_Members"));
        assert_eq!(table.audio_folder_of("Goodbye"), Some("Greetings"));
        assert_eq!(table.audio_folder_of("Blue"), None);
        assert_eq!(table.category_of("Blue").unwrap().name, "Colors");
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = PhraseTable::new(vec![
            category("A", &[("Dog", "Aso", "Aso")]),
            category("B", &[("Dog", "Aso", "Aso")]),
        ]);
        assert!(matches!(result, Err(PhraseError::DuplicateKey(key)) if key == "Dog"));
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = PhraseTable::new(vec![category("Nothing", &[])]);
        assert!(matches!(result, Err(PhraseError::EmptyTable)));
    }

    #[test]
    fn test_catalog_takes_leading_keys() {
        let table = PhraseTable::new(vec![
            category("Colors", &[("Blue", "Asul", "asul"), ("Red", "Pula", "medingat"), ("White", "Puti", "melatak")]),
            category("Empty", &[]),
            category("Animals", &[("Dog", "Aso", "Aso")]),
        ])
        .unwrap();
        let catalog = CategoryCatalog::from_table(&table, 2);
        assert_eq!(
            catalog.groups(),
            &[
                ("Colors".to_string(), vec!["Blue".to_string(), "Red".to_string()]),
                ("Animals".to_string(), vec!["Dog".to_string()]),
            ]
        );
    }
}
