use crate::core::table::CategoryCatalog;

pub const FALLBACK_INTRO: &str =
    "Sorry, I don't have a translation for that phrase. Try one of these:";

/// Renders the no-match guidance: an intro line, then one
/// `"{Category}: {key}, {key}, ..."` line per category.
pub fn render_guide(catalog: &CategoryCatalog) -> String {
    let mut lines = Vec::with_capacity(catalog.groups().len() + 1);
    lines.push(FALLBACK_INTRO.to_string());
    for (label, keys) in catalog.groups() {
        lines.push(format!("{}: {}", label, keys.join(", ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{PhraseTable, FALLBACK_EXAMPLES_PER_CATEGORY};

    #[test]
    fn test_bundled_guide() {
        let table = PhraseTable::bundled().unwrap();
        let guide = render_guide(&CategoryCatalog::from_table(&table, FALLBACK_EXAMPLES_PER_CATEGORY));
        let lines: Vec<&str> = guide.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], FALLBACK_INTRO);
        assert_eq!(lines[3], "Animals: Dog");
        assert_eq!(lines[6], "Colors: Blue, Red, White, Black");
    }
}
