use deunicode::deunicode_with_tofu;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters replaced by a space before filler removal.
const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '-', '_', '/', '\\', '\'', '"', '\u{2018}', '\u{2019}',
    '\u{201C}', '\u{201D}',
];

const ENGLISH_FILLERS: &[&str] = &["what is", "what's", "can you translate", "please translate"];

const TAGALOG_FILLERS: &[&str] = &[
    "ano ang",
    "ano yung",
    "ano ito",
    "paki translate",
    "paki",
    "anong",
    "meaning ng",
    "kahulugan ng",
    "translate",
];

/// Whole-word alternation of every filler, longest first so that
/// "paki translate" is consumed before "paki".
static FILLER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut fillers: Vec<String> = ENGLISH_FILLERS
        .iter()
        .chain(TAGALOG_FILLERS)
        .map(|filler| collapse_whitespace(&strip_punctuation(&fold_case_and_accents(filler))))
        .collect();
    fillers.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    fillers.dedup();

    let alternation = fillers
        .iter()
        .map(|filler| regex::escape(filler).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    // Built from escaped literals only.
    Regex::new(&format!(r"\b(?:{alternation})\b")).unwrap()
});

/// Canonical comparison form: lowercase, accent-free, no punctuation,
/// fillers removed, single-spaced. Two inputs are equivalent iff their
/// normalized forms are equal. Idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let folded = fold_case_and_accents(text);
    let mut current = collapse_whitespace(&strip_punctuation(&folded));

    // Removing one filler can bring two words together into another filler,
    // so repeat until nothing matches.
    loop {
        let stripped = collapse_whitespace(&FILLER_PATTERN.replace_all(&current, " "));
        if stripped == current {
            return current;
        }
        current = stripped;
    }
}

/// Lowercases and transliterates to the closest ASCII: combining marks go
/// after canonical decomposition ("é" -> "e", "ñ" -> "n"), then everything
/// else non-ASCII is transliterated ("ß" -> "ss", "ł" -> "l", "…" -> "...").
/// Characters with no transliteration are dropped.
fn fold_case_and_accents(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    deunicode_with_tofu(&stripped, "").to_lowercase()
}

fn strip_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
