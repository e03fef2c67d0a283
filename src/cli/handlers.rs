// src/cli/handlers.rs
use std::error::Error;
use std::path::Path;

use crate::analyzer::StrengthAdvisor;
use crate::generators::{export_wordlist, WordlistGenerator};
use crate::models::SeedSet;
use crate::utils;

// Handlers for one-shot CLI commands

pub fn handle_analyze(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let advisor = StrengthAdvisor::new();
    let report = advisor.analyze(password)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        utils::print_report(&report);
    }
    Ok(())
}

pub fn handle_wordlist(
    seeds: &SeedSet,
    output: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let generator = WordlistGenerator::new();
    let wordlist = generator.generate(seeds)?;

    if json {
        let payload = serde_json::json!({
            "count": wordlist.len(),
            "words": wordlist.sorted(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        utils::print_wordlist(&wordlist);
    }

    if let Some(path) = output {
        let written = export_wordlist(&wordlist, path)?;
        println!("✅ Wordlist saved to: {} ({written} entries)", path.display());
    }
    Ok(())
}
