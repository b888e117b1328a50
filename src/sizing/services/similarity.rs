//! String similarity scorers on a 0-100 scale.
//!
//! Inputs are normalised first: lower-cased, every character that is not a
//! letter or digit replaced by a space, then trimmed. A value that
//! normalises to nothing scores 0 against everything.

use crate::sizing::domain::Catalog;
use crate::sizing::policies::{BestMatch, SimilarityScores, PERFECT_SCORE};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]").expect("Invalid regex"));

pub fn preprocess(value: &str) -> String {
    RE_NON_ALNUM.replace_all(value, " ").trim().to_lowercase()
}

fn to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Character-level ratio derived from the Levenshtein distance
pub fn ratio(left: &str, right: &str) -> u8 {
    if left.is_empty() || right.is_empty() {
        return 0;
    }
    to_score(strsim::normalized_levenshtein(left, right))
}

fn sorted_tokens(value: &str) -> String {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Ratio after sorting the tokens of both sides; ignores word order
pub fn token_sort_ratio(left: &str, right: &str) -> u8 {
    ratio(&sorted_tokens(left), &sorted_tokens(right))
}

fn join_tokens(shared: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        return shared.to_string();
    }
    if shared.is_empty() {
        return rest.join(" ");
    }
    format!("{} {}", shared, rest.join(" "))
}

/// Set-based ratio; ignores extra or missing tokens on one side.
///
/// When one token set contains the other the score is 100.
pub fn token_set_ratio(left: &str, right: &str) -> u8 {
    let left_tokens: BTreeSet<&str> = left.split_whitespace().collect();
    let right_tokens: BTreeSet<&str> = right.split_whitespace().collect();
    if left_tokens.is_empty() || right_tokens.is_empty() {
        return 0;
    }

    let shared: Vec<&str> = left_tokens.intersection(&right_tokens).copied().collect();
    let only_left: Vec<&str> = left_tokens.difference(&right_tokens).copied().collect();
    let only_right: Vec<&str> = right_tokens.difference(&left_tokens).copied().collect();

    if !shared.is_empty() && (only_left.is_empty() || only_right.is_empty()) {
        return PERFECT_SCORE;
    }

    let shared = shared.join(" ");
    let left_combined = join_tokens(&shared, &only_left);
    let right_combined = join_tokens(&shared, &only_right);

    ratio(&shared, &left_combined)
        .max(ratio(&shared, &right_combined))
        .max(ratio(&left_combined, &right_combined))
}

/// Selects one of the scorers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scorer {
    Plain,
    TokenSort,
    TokenSet,
}

impl Scorer {
    /// Scores two already-normalised strings
    pub fn score(&self, left: &str, right: &str) -> u8 {
        match self {
            Scorer::Plain => ratio(left, right),
            Scorer::TokenSort => token_sort_ratio(left, right),
            Scorer::TokenSet => token_set_ratio(left, right),
        }
    }
}

/// Catalog model names, normalised once and kept in declaration order
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    processed: Vec<String>,
}

impl CandidateSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            processed: names.into_iter().map(|n| preprocess(n.as_ref())).collect(),
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.model_names())
    }

    pub fn len(&self) -> usize {
        self.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }

    /// Best candidate for `query` under `scorer`.
    ///
    /// Ties go to the earliest candidate. `None` only when the set is empty.
    pub fn best_match(&self, query: &str, scorer: Scorer) -> Option<BestMatch> {
        self.best_processed(&preprocess(query), scorer)
    }

    /// Runs all three scorers against the set
    pub fn scores(&self, query: &str) -> Option<SimilarityScores> {
        let query = preprocess(query);
        Some(SimilarityScores {
            plain: self.best_processed(&query, Scorer::Plain)?,
            token_sort: self.best_processed(&query, Scorer::TokenSort)?,
            token_set: self.best_processed(&query, Scorer::TokenSet)?,
        })
    }

    fn best_processed(&self, query: &str, scorer: Scorer) -> Option<BestMatch> {
        let mut best: Option<BestMatch> = None;
        for (index, candidate) in self.processed.iter().enumerate() {
            let score = scorer.score(query, candidate);
            if best.is_none_or(|b| score > b.score) {
                best = Some(BestMatch { index, score });
                if score == PERFECT_SCORE {
                    break;
                }
            }
        }
        best
    }
}
