// src/cli/menu.rs
use std::error::Error;
use std::path::PathBuf;

use inquire::{Password, PasswordDisplayMode, Select, Text};

use crate::analyzer::{StrengthAdvisor, ZxcvbnScorer};
use crate::error::ToolkitError;
use crate::generators::{export_wordlist, WordlistGenerator};
use crate::models::{SeedSet, Wordlist};
use crate::utils;

const MENU_ANALYZE: &str = "Analyze a password";
const MENU_GENERATE: &str = "Generate a wordlist";
const MENU_EXPORT: &str = "Export the last wordlist";
const MENU_CLEAR: &str = "Clear results";
const MENU_QUIT: &str = "Quit";

pub fn run_menu() -> Result<(), Box<dyn Error>> {
    println!("🛡️  Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║        PASSDEFENDER TOOLKIT          ║");
    println!("╚══════════════════════════════════════╝");

    let advisor = StrengthAdvisor::new();
    let generator = WordlistGenerator::new();

    // The menu keeps only the most recent generation around so it can
    // be exported; everything else is recomputed per request.
    let mut last_wordlist: Option<Wordlist> = None;

    loop {
        let choice = Select::new(
            "What would you like to do?",
            vec![
                MENU_ANALYZE,
                MENU_GENERATE,
                MENU_EXPORT,
                MENU_CLEAR,
                MENU_QUIT,
            ],
        )
        .prompt()?;

        let outcome = match choice {
            MENU_ANALYZE => analyze_flow(&advisor),
            MENU_GENERATE => generate_flow(&generator, &mut last_wordlist),
            MENU_EXPORT => export_flow(last_wordlist.as_ref()),
            MENU_CLEAR => {
                last_wordlist = None;
                println!("🧹 Results cleared");
                Ok(())
            }
            _ => break,
        };

        // Errors end the single operation, never the menu.
        if let Err(e) = outcome {
            println!("❌ {e}");
        }
        println!();
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn analyze_flow(advisor: &StrengthAdvisor<ZxcvbnScorer>) -> Result<(), Box<dyn Error>> {
    let password = Password::new("Enter the password to analyze:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_display_toggle_enabled()
        .without_confirmation()
        .prompt()?;

    let report = advisor.analyze(&password)?;
    utils::print_report(&report);
    Ok(())
}

fn generate_flow(
    generator: &WordlistGenerator,
    last_wordlist: &mut Option<Wordlist>,
) -> Result<(), Box<dyn Error>> {
    println!("Leave any field empty to skip it.");
    let seeds = SeedSet {
        name: prompt_optional("Name:")?,
        pet: prompt_optional("Pet/Nickname:")?,
        year: prompt_optional("Birth year:")?,
        place: prompt_optional("Favorite place:")?,
        number: prompt_optional("Favorite number:")?,
    };

    let wordlist = generator.generate(&seeds)?;
    utils::print_wordlist(&wordlist);
    *last_wordlist = Some(wordlist);
    Ok(())
}

fn export_flow(last_wordlist: Option<&Wordlist>) -> Result<(), Box<dyn Error>> {
    let wordlist = last_wordlist.ok_or(ToolkitError::NothingToExport)?;

    let path = Text::new("Save wordlist to:")
        .with_default("wordlist.txt")
        .prompt()?;
    let path = PathBuf::from(path);

    let written = export_wordlist(wordlist, &path)?;
    println!("✅ Wordlist saved to: {} ({written} entries)", path.display());
    Ok(())
}

fn prompt_optional(label: &str) -> Result<Option<String>, Box<dyn Error>> {
    let value = Text::new(label).prompt()?;
    if value.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}
