use serde::{Deserialize, Serialize};

pub const EMPTY_INPUT_PROMPT: &str = "Please provide a phrase to translate.";

/// One row of the phrase table. `english` is the canonical key: it is what
/// `translate` reports back and what audio filenames are derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub english: String,
    pub filipino: String,
    pub casiguran_agta: String,
}

impl PhraseEntry {
    pub fn new(english: &str, filipino: &str, casiguran_agta: &str) -> Self {
        Self {
            english: english.to_string(),
            filipino: filipino.to_string(),
            casiguran_agta: casiguran_agta.to_string(),
        }
    }

    /// The three display strings, key first.
    pub fn variants(&self) -> [&str; 3] {
        [&self.english, &self.filipino, &self.casiguran_agta]
    }

    /// The three-line response shown to the user.
    pub fn format_translation(&self) -> String {
        format!(
            "English: {}\nFilipino: {}\nCasiguran Agta: {}",
            self.english, self.filipino, self.casiguran_agta
        )
    }
}

/// Which pipeline stage produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    Empty,
    Exact,
    Substring,
    Fuzzy,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
    pub matched_key: Option<String>,
    /// English keys of other plausible entries, never including `matched_key`.
    pub suggestions: Vec<String>,
    pub stage: MatchStage,
}

impl TranslationResult {
    pub fn prompt() -> Self {
        Self {
            text: EMPTY_INPUT_PROMPT.to_string(),
            matched_key: None,
            suggestions: Vec::new(),
            stage: MatchStage::Empty,
        }
    }

    pub fn matched(entry: &PhraseEntry, suggestions: Vec<String>, stage: MatchStage) -> Self {
        Self {
            text: entry.format_translation(),
            matched_key: Some(entry.english.clone()),
            suggestions,
            stage,
        }
    }

    pub fn fallback(text: String) -> Self {
        Self {
            text,
            matched_key: None,
            suggestions: Vec::new(),
            stage: MatchStage::Fallback,
        }
    }
}
