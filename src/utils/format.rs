// src/utils/format.rs
use console::{style, StyledObject};

use crate::models::{StrengthReport, Wordlist};

/// Strength label for a 0..=4 score. Presentation only; the advisor
/// never deals in labels.
pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "Very Weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        _ => "Strong",
    }
}

fn styled_label(score: u8) -> StyledObject<&'static str> {
    let label = strength_label(score);
    match score {
        0 | 1 => style(label).red().bold(),
        2 => style(label).yellow().bold(),
        _ => style(label).green().bold(),
    }
}

/// Prints a strength report the way the analyzer panel used to render
/// it: label line, crack-time estimate, then itemized issues and
/// suggestions.
pub fn print_report(report: &StrengthReport) {
    println!(
        "Strength: {}    [Score: {}/4, Guesses: {}]",
        styled_label(report.score),
        report.score,
        report.guesses
    );
    println!("Estimated crack time: {}", report.crack_time_display);

    if !report.issues.is_empty() {
        println!("\n{}", style("Issues:").red());
        for issue in &report.issues {
            println!(" • {issue}");
        }
    }
    if !report.suggestions.is_empty() {
        println!("\n{}", style("Suggestions:").yellow());
        for suggestion in &report.suggestions {
            println!(" • {suggestion}");
        }
    }
    if report.issues.is_empty() && report.suggestions.is_empty() {
        println!(
            "\n{}",
            style("No issues detected — this is a strong password!").green()
        );
    }
}

/// Prints the sorted candidates followed by the transient summary line.
/// The summary never goes into an exported file.
pub fn print_wordlist(wordlist: &Wordlist) {
    for word in wordlist.sorted() {
        println!("{word}");
    }
    println!(
        "\n{}",
        style(format!("Total combinations: {}", wordlist.len())).green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_one_to_one_to_scores() {
        assert_eq!(strength_label(0), "Very Weak");
        assert_eq!(strength_label(1), "Weak");
        assert_eq!(strength_label(2), "Fair");
        assert_eq!(strength_label(3), "Good");
        assert_eq!(strength_label(4), "Strong");
    }
}
