use crate::config::MatcherConfig;
use crate::core::guide::render_guide;
use crate::core::index::SearchIndex;
use crate::core::normalize::normalize;
use crate::core::table::{CategoryCatalog, PhraseTable, FALLBACK_EXAMPLES_PER_CATEGORY};
use crate::core::types::{MatchStage, TranslationResult};
use crate::error::Result;
use crate::fuzzy::similarity::close_matches;
use std::collections::HashSet;

// The matcher owns the immutable table and everything derived from it.
// Nothing changes after construction, so `translate` takes `&self` and the
// matcher can be shared freely between threads.
pub struct PhraseMatcher {
    table: PhraseTable,
    index: SearchIndex,
    guide: String,
    settings: MatcherConfig,
}

impl PhraseMatcher {
    pub fn new(table: PhraseTable, settings: MatcherConfig) -> Result<Self> {
        let index = SearchIndex::build(&table, settings.strict)?;
        let catalog = CategoryCatalog::from_table(&table, FALLBACK_EXAMPLES_PER_CATEGORY);
        Ok(Self {
            guide: render_guide(&catalog),
            table,
            index,
            settings,
        })
    }

    /// Matcher over the bundled dataset with default settings.
    pub fn bundled() -> Result<Self> {
        Self::new(PhraseTable::bundled()?, MatcherConfig::default())
    }

    pub fn table(&self) -> &PhraseTable {
        &self.table
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Runs the pipeline: exact, then substring, then fuzzy, then guidance.
    /// Total over all inputs.
    pub fn translate(&self, raw: &str) -> TranslationResult {
        if raw.trim().is_empty() {
            return TranslationResult::prompt();
        }
        let query = normalize(raw);
        if query.is_empty() {
            return TranslationResult::prompt();
        }

        let result = self
            .exact_match(&query)
            .or_else(|| self.substring_match(&query))
            .or_else(|| self.fuzzy_match(&query))
            .unwrap_or_else(|| TranslationResult::fallback(self.guide.clone()));

        log::debug!(
            "{:?} -> {:?} via {:?} ({} suggestions)",
            query,
            result.matched_key,
            result.stage,
            result.suggestions.len()
        );
        result
    }

    fn exact_match(&self, query: &str) -> Option<TranslationResult> {
        let key = self.index.lookup(query)?;
        self.respond(key, Vec::new(), MatchStage::Exact)
    }

    /// Corpus strings contained in the query, or containing it, on word
    /// boundaries. The shortest one wins.
    fn substring_match(&self, query: &str) -> Option<TranslationResult> {
        let mut candidates: Vec<&str> = self
            .index
            .corpus()
            .iter()
            .map(String::as_str)
            .filter(|phrase| contains_phrase(query, phrase) || contains_phrase(phrase, query))
            .collect();
        // Stable: equal lengths keep registration order.
        candidates.sort_by_key(|phrase| phrase.chars().count());

        let (first, rest) = candidates.split_first()?;
        let key = self.index.lookup(first)?;
        let suggestions = self.suggestions_for(key, rest.iter().copied());
        self.respond(key, suggestions, MatchStage::Substring)
    }

    fn fuzzy_match(&self, query: &str) -> Option<TranslationResult> {
        let ranked = close_matches(
            query,
            self.index.corpus(),
            self.settings.fuzzy_candidates,
            self.settings.fuzzy_cutoff,
        );
        let (best, rest) = ranked.split_first()?;
        let key = self.index.lookup(best.candidate)?;
        let suggestions = self.suggestions_for(key, rest.iter().map(|m| m.candidate));
        self.respond(key, suggestions, MatchStage::Fuzzy)
    }

    /// Maps normalized candidates to English keys, dropping the matched key
    /// and repeats, capped at `max_suggestions`.
    fn suggestions_for<'a>(
        &self,
        matched: &str,
        candidates: impl Iterator<Item = &'a str>,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        candidates
            .filter_map(|candidate| self.index.lookup(candidate))
            .filter(|&key| key != matched && seen.insert(key))
            .take(self.settings.max_suggestions)
            .map(str::to_string)
            .collect()
    }

    fn respond(
        &self,
        key: &str,
        suggestions: Vec<String>,
        stage: MatchStage,
    ) -> Option<TranslationResult> {
        let entry = self.table.get(key)?;
        Some(TranslationResult::matched(entry, suggestions, stage))
    }
}

/// Whether `needle` occurs in `haystack` as a run of whole words. Both are
/// normalized, so words are separated by single spaces.
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    format!(" {haystack} ").contains(&format!(" {needle} "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Category;
    use crate::core::types::PhraseEntry;

    fn matcher(entries: &[(&str, &str, &str)]) -> PhraseMatcher {
        let table = PhraseTable::new(vec![Category {
            name: "Test".to_string(),
            audio_folder: None,
            entries: entries
                .iter()
                .map(|&(en, fil, agta)| PhraseEntry::new(en, fil, agta))
                .collect(),
        }])
        .unwrap();
        PhraseMatcher::new(table, MatcherConfig::default()).unwrap()
    }

    #[test]
    fn test_contains_phrase_respects_word_boundaries() {
        assert!(contains_phrase("my mother", "mother"));
        assert!(contains_phrase("mother", "mother"));
        assert!(!contains_phrase("grandmother", "mother"));
        assert!(!contains_phrase("good afternoon", "on"));
        assert!(contains_phrase("where is the garden", "the garden"));
    }

    #[test]
    fn test_shortest_substring_wins() {
        let m = matcher(&[
            ("Grandmother", "Lola", "boboy bakés"),
            ("Mother", "Nanay", "inéng"),
        ]);
        let result = m.translate("my mother is here");
        assert_eq!(result.stage, MatchStage::Substring);
        assert_eq!(result.matched_key.as_deref(), Some("Mother"));
    }

    #[test]
    fn test_substring_suggestions_skip_matched_key() {
        let m = matcher(&[
            ("Where is the garden", "Nasaan ang halamanan?", "ahe to sikaw"),
            ("It is my garden", "Sa akin ang halamanan.", "ko o ko a sikaw"),
            ("Whose garden is it", "Kaninong halamanan iyon?", "kini esya a sikaw ya"),
        ]);
        let result = m.translate("garden");
        assert_eq!(result.stage, MatchStage::Substring);
        assert_eq!(result.matched_key.as_deref(), Some("It is my garden"));
        assert_eq!(result.suggestions, vec!["Whose garden is it", "Where is the garden"]);
    }

    #[test]
    fn test_suggestions_capped() {
        let entries: Vec<(String, String, String)> = (0..9)
            .map(|i| (format!("red {i}"), format!("pula {i}"), format!("medingat {i}")))
            .collect();
        let borrowed: Vec<(&str, &str, &str)> = entries
            .iter()
            .map(|(a, b, c)| (a.as_str(), b.as_str(), c.as_str()))
            .collect();
        let result = matcher(&borrowed).translate("red");
        assert_eq!(result.matched_key.as_deref(), Some("red 0"));
        assert_eq!(result.suggestions.len(), 5);
        assert_eq!(result.suggestions[0], "red 1");
    }

    #[test]
    fn test_fuzzy_when_no_substring() {
        let m = matcher(&[("Blue", "Asul", "asul"), ("Black", "Itim", "mengitet")]);
        let result = m.translate("blu");
        assert_eq!(result.stage, MatchStage::Fuzzy);
        assert_eq!(result.matched_key.as_deref(), Some("Blue"));
        assert!(!result.suggestions.contains(&"Blue".to_string()));
    }

    #[test]
    fn test_fallback_is_guide() {
        let m = matcher(&[("Blue", "Asul", "asul")]);
        let result = m.translate("xyzzyqwerty");
        assert_eq!(result.stage, MatchStage::Fallback);
        assert_eq!(result.matched_key, None);
        assert!(result.suggestions.is_empty());
        assert!(result.text.ends_with("Test: Blue"));
    }

    #[test]
    fn test_filler_only_input_prompts() {
        let m = matcher(&[("Blue", "Asul", "asul")]);
        assert_eq!(m.translate("please translate?"), TranslationResult::prompt());
    }
}
