// src/generators/wordlist.rs
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;

use crate::error::{Result, ToolkitError};
use crate::models::{SeedSet, Wordlist};

/// Appended to every plain, capitalized and uppercased token, and to
/// every permutation join. The empty suffix keeps the bare form.
pub const SUFFIXES: [&str; 8] = ["", "123", "!", "?", "@", "_", "2025", "2024"];

/// Permutation concatenations are bounded at this many seeds.
const MAX_PERMUTATION_LEN: usize = 4;

lazy_static! {
    /// Leetspeak substitutions applied per character.
    static ref LEET_MAP: HashMap<char, char> = [
        ('a', '4'),
        ('e', '3'),
        ('i', '1'),
        ('o', '0'),
        ('s', '5'),
    ]
    .into_iter()
    .collect();
}

/// Expands seed tokens into a de-duplicated candidate wordlist.
///
/// The expansion is deterministic: identical seeds always produce the
/// identical set.
pub struct WordlistGenerator;

impl WordlistGenerator {
    pub fn new() -> Self {
        WordlistGenerator
    }

    pub fn generate(&self, seeds: &SeedSet) -> Result<Wordlist> {
        let base = seeds.tokens();
        if base.is_empty() {
            return Err(ToolkitError::EmptySeedSet);
        }

        let mut words: HashSet<String> = base.iter().cloned().collect();

        for token in &base {
            for suffix in SUFFIXES {
                words.insert(format!("{token}{suffix}"));
                words.insert(format!("{}{suffix}", capitalize(token)));
                words.insert(format!("{}{suffix}", token.to_uppercase()));
            }
            let leet = leetify(token);
            words.insert(capitalize(&leet));
            words.insert(leet);
            words.insert(reverse(token));
        }

        for n in 2..=base.len().min(MAX_PERMUTATION_LEN) {
            for joined in joined_permutations(&base, n) {
                words.insert(reverse(&joined));
                for suffix in SUFFIXES {
                    words.insert(format!("{joined}{suffix}"));
                }
                words.insert(joined);
            }
        }

        log::debug!(
            "generated {} candidates from {} seed tokens",
            words.len(),
            base.len()
        );
        Ok(Wordlist { words })
    }
}

impl Default for WordlistGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the candidates one per line in lexicographic order, with a
/// trailing newline and nothing else. Returns how many lines were
/// written.
pub fn export_wordlist(wordlist: &Wordlist, path: &Path) -> Result<usize> {
    if wordlist.is_empty() {
        return Err(ToolkitError::NothingToExport);
    }

    let sorted = wordlist.sorted();
    let mut contents = sorted.join("\n");
    contents.push('\n');

    fs::write(path, contents).map_err(|source| ToolkitError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("exported {} candidates to {}", sorted.len(), path.display());
    Ok(sorted.len())
}

/// First character uppercased, remainder unchanged.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

fn leetify(word: &str) -> String {
    word.chars()
        .map(|c| LEET_MAP.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Concatenations of every ordered arrangement of `n` tokens drawn by
/// position, so equal-valued tokens in different fields still count as
/// distinct picks (their joins collapse in the result set).
fn joined_permutations(tokens: &[String], n: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut used = vec![false; tokens.len()];
    let mut picked = Vec::with_capacity(n);
    collect_permutations(tokens, n, &mut used, &mut picked, &mut out);
    out
}

fn collect_permutations(
    tokens: &[String],
    n: usize,
    used: &mut [bool],
    picked: &mut Vec<usize>,
    out: &mut Vec<String>,
) {
    if picked.len() == n {
        out.push(picked.iter().map(|&i| tokens[i].as_str()).collect());
        return;
    }
    for i in 0..tokens.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        picked.push(i);
        collect_permutations(tokens, n, used, picked, out);
        picked.pop();
        used[i] = false;
    }
}
