use chitieu_core::{registry, Category};
use tracing::{debug, trace};

use crate::util::{fold_diacritics, mismatch_score};

/// Highest mismatch score (0.0 perfect, 1.0 unrelated) still accepted as a fuzzy hit.
pub const DEFAULT_FUZZY_THRESHOLD: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    Fuzzy { score: f32 },
    Exact,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: &'static Category,
    pub confidence: f32,
    pub kind: MatchKind,
}

impl Classification {
    fn unmatched() -> Self {
        Self {
            category: registry::other(),
            confidence: 0.0,
            kind: MatchKind::None,
        }
    }
}

/// A keyword or display name, folded for comparison.
struct CorpusEntry {
    category: &'static Category,
    term: String,
    word_count: usize,
}

pub struct CategoryMatcher {
    threshold: f32,
    corpus: Vec<CorpusEntry>,
}

impl Default for CategoryMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_THRESHOLD)
    }
}

impl CategoryMatcher {
    pub fn new(threshold: f32) -> Self {
        let corpus = registry::searchable()
            .flat_map(|category| {
                category
                    .keywords
                    .iter()
                    .copied()
                    .chain(std::iter::once(category.name))
                    .map(move |term| {
                        let term = fold_diacritics(term);
                        CorpusEntry {
                            category,
                            word_count: term.split_whitespace().count().max(1),
                            term,
                        }
                    })
            })
            .collect();
        Self { threshold, corpus }
    }

    /// Fuzzy search first, then literal keyword containment, then the sentinel.
    pub fn classify(&self, description: &str) -> Classification {
        if description.trim().is_empty() {
            return Classification::unmatched();
        }

        if let Some((entry, score)) = self.best_fuzzy(description) {
            debug!(category = entry.category.id, term = %entry.term, score, "fuzzy category match");
            return Classification {
                category: entry.category,
                confidence: 1.0 - score,
                kind: MatchKind::Fuzzy { score },
            };
        }

        if let Some(category) = exact_match(description) {
            debug!(category = category.id, "exact keyword match");
            return Classification {
                category,
                confidence: 1.0,
                kind: MatchKind::Exact,
            };
        }

        debug!(description, "no category match");
        Classification::unmatched()
    }

    /// Lowest-scoring corpus entry within the threshold; ties keep registry order.
    fn best_fuzzy(&self, description: &str) -> Option<(&CorpusEntry, f32)> {
        let folded = fold_diacritics(description);
        let words: Vec<&str> = folded.split_whitespace().collect();

        let mut best: Option<(&CorpusEntry, f32)> = None;
        for entry in &self.corpus {
            let score = term_score(&folded, &words, entry);
            trace!(term = %entry.term, score, "fuzzy candidate");
            if best.map_or(true, |(_, s)| score < s) {
                best = Some((entry, score));
                if score == 0.0 {
                    break;
                }
            }
        }

        best.filter(|(_, score)| *score <= self.threshold)
    }
}

/// Compares the term against the whole description and against every run of
/// consecutive words as long as the term, keeping the closest.
fn term_score(folded: &str, words: &[&str], entry: &CorpusEntry) -> f32 {
    let whole = mismatch_score(folded, &entry.term);
    if words.len() <= entry.word_count {
        return whole;
    }
    words
        .windows(entry.word_count)
        .map(|w| mismatch_score(&w.join(" "), &entry.term))
        .fold(whole, f32::min)
}

/// First category, in registry order, with a keyword contained in the description.
fn exact_match(description: &str) -> Option<&'static Category> {
    registry::all()
        .iter()
        .find(|c| c.keywords.iter().any(|k| description.contains(k)))
}
