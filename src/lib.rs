// src/lib.rs
//! PassDefender: password strength analysis and personal-fact wordlist
//! generation.
//!
//! Two independent, stateless pipelines:
//! - the [`analyzer`] scores a password and decorates the score with
//!   rule-based findings;
//! - the [`generators`] expand seed tokens into a de-duplicated
//!   candidate wordlist, optionally exported as plain text.

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod generators;
pub mod models;
pub mod utils;

pub use error::{Result, ToolkitError};
