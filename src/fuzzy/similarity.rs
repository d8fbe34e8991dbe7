use std::cmp::Ordering;

/// Similarity ratio on a 0..=1 scale:
/// `1 - levenshtein(a, b) / max(len(a), len(b))`, lengths in chars.
/// Two empty strings are identical (1.0).
pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// A corpus string that passed the cutoff, with its position in the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseMatch<'a> {
    pub candidate: &'a str,
    pub score: f64,
    pub position: usize,
}

/// Up to `n` corpus strings whose ratio to `query` is at least `cutoff`,
/// best first. Equal scores keep corpus order, so the result is stable for
/// a fixed corpus.
///
/// Complexity: O(C * q * k) for C candidates of length k and a query of
/// length q; the corpus is a few hundred short strings.
pub fn close_matches<'a>(
    query: &str,
    corpus: &'a [String],
    n: usize,
    cutoff: f64,
) -> Vec<CloseMatch<'a>> {
    if n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<CloseMatch<'a>> = corpus
        .iter()
        .enumerate()
        .filter_map(|(position, candidate)| {
            let score = ratio(query, candidate);
            (score >= cutoff).then_some(CloseMatch {
                candidate: candidate.as_str(),
                score,
                position,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.position.cmp(&b.position))
    });
    scored.truncate(n);
    scored
}
