// src/models.rs
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Personal facts used as raw material for wordlist generation.
/// Every field is optional; at least one must be non-empty for a
/// generation call to succeed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedSet {
    pub name: Option<String>,
    pub pet: Option<String>,
    pub year: Option<String>,
    pub place: Option<String>,
    pub number: Option<String>,
}

impl SeedSet {
    /// Trimmed, lowercased, non-empty seed tokens in field order.
    /// Duplicate values across fields are kept here; they collapse
    /// naturally once inserted into the candidate set.
    pub fn tokens(&self) -> Vec<String> {
        [
            &self.name,
            &self.pet,
            &self.year,
            &self.place,
            &self.number,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
    }
}

/// Result of one strength analysis call. Never persisted, recomputed
/// per call.
#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    /// zxcvbn-style score, 0 (worst) to 4 (best).
    pub score: u8,
    pub guesses: u64,
    /// Human-readable offline-cracking estimate from the scorer.
    pub crack_time_display: String,
    /// Rule-table findings, in check order.
    pub issues: Vec<String>,
    /// Scorer warning (if any) followed by scorer suggestions.
    pub suggestions: Vec<String>,
}

/// A generated candidate set. Uniqueness is the set's invariant;
/// ordering only exists at presentation/export time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    pub words: HashSet<String>,
}

impl Wordlist {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }

    /// Lexicographically sorted candidates for display and export.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
