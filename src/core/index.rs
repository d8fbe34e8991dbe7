use crate::core::normalize::normalize;
use crate::core::table::PhraseTable;
use crate::error::{PhraseError, Result};
use std::collections::HashMap;

/// A normalized string claimed by two different English keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub normalized: String,
    pub kept: String,
    pub dropped: String,
}

/// Normalized variant -> owning English key, plus the ordered corpus of
/// every distinct normalized variant. Derived entirely from a `PhraseTable`.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    owners: HashMap<String, String>,
    corpus: Vec<String>,
    collisions: Vec<Collision>,
}

impl SearchIndex {
    /// First registration wins on collision. With `strict` set, a collision
    /// aborts the build instead.
    pub fn build(table: &PhraseTable, strict: bool) -> Result<Self> {
        let mut index = Self::default();
        for entry in table.entries() {
            for variant in entry.variants() {
                let normalized = normalize(variant);
                if normalized.is_empty() {
                    continue;
                }
                index.register(normalized, &entry.english, strict)?;
            }
        }

        log::info!(
            "search index built: {} entries, {} normalized strings, {} collisions",
            table.len(),
            index.corpus.len(),
            index.collisions.len()
        );
        Ok(index)
    }

    fn register(&mut self, normalized: String, english: &str, strict: bool) -> Result<()> {
        match self.owners.get(&normalized) {
            Some(owner) if owner == english => Ok(()),
            Some(owner) => {
                let collision = Collision {
                    normalized,
                    kept: owner.clone(),
                    dropped: english.to_string(),
                };
                if strict {
                    return Err(PhraseError::NormalizedCollision {
                        normalized: collision.normalized,
                        kept: collision.kept,
                        dropped: collision.dropped,
                    });
                }
                log::warn!(
                    "{:?} maps to both {:?} and {:?}; keeping {:?}",
                    collision.normalized,
                    collision.kept,
                    collision.dropped,
                    collision.kept
                );
                self.collisions.push(collision);
                Ok(())
            }
            None => {
                self.corpus.push(normalized.clone());
                self.owners.insert(normalized, english.to_string());
                Ok(())
            }
        }
    }

    /// The English key owning an already-normalized string.
    pub fn lookup(&self, normalized: &str) -> Option<&str> {
        self.owners.get(normalized).map(String::as_str)
    }

    /// Distinct normalized strings in registration order.
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}
