// src/generators/mod.rs
mod wordlist;

pub use wordlist::{export_wordlist, WordlistGenerator, SUFFIXES};
