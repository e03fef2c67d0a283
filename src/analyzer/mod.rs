// src/analyzer/mod.rs
use std::collections::HashSet;

use lazy_static::lazy_static;
use zxcvbn::{zxcvbn, Score};

use crate::error::{Result, ToolkitError};
use crate::models::StrengthReport;

lazy_static! {
    /// Passwords flagged as "common word" regardless of what the scorer says.
    static ref COMMON_WORDS: HashSet<&'static str> =
        ["password", "qwerty", "letmein", "admin", "welcome"]
            .into_iter()
            .collect();
}

/// Raw output of one scoring call, normalized to what the advisor needs.
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub score: u8,
    pub guesses: u64,
    pub crack_time_display: String,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// Narrow seam around the scoring collaborator so any equivalent
/// strength scorer can be swapped in without touching the rule table.
pub trait StrengthScorer {
    fn score(&self, password: &str) -> ScoreResult;
}

/// Default scorer backed by the zxcvbn estimator.
pub struct ZxcvbnScorer;

impl StrengthScorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> ScoreResult {
        let entropy = zxcvbn(password, &[]);

        let score = match entropy.score() {
            Score::One => 1,
            Score::Two => 2,
            Score::Three => 3,
            Score::Four => 4,
            _ => 0,
        };

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback
                    .suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        ScoreResult {
            score,
            guesses: entropy.guesses(),
            crack_time_display: entropy
                .crack_times()
                .offline_fast_hashing_1e10_per_second()
                .to_string(),
            warning,
            suggestions,
        }
    }
}

/// Scores a password and decorates the result with rule-based issues.
pub struct StrengthAdvisor<S: StrengthScorer> {
    scorer: S,
}

impl StrengthAdvisor<ZxcvbnScorer> {
    pub fn new() -> Self {
        Self::with_scorer(ZxcvbnScorer)
    }
}

impl Default for StrengthAdvisor<ZxcvbnScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StrengthScorer> StrengthAdvisor<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Analyze a password. Empty input is rejected before any scoring.
    pub fn analyze(&self, password: &str) -> Result<StrengthReport> {
        if password.is_empty() {
            return Err(ToolkitError::EmptyPassword);
        }

        let result = self.scorer.score(password);
        log::debug!(
            "scored password: score={} guesses={}",
            result.score,
            result.guesses
        );

        let issues = rule_issues(password, result.score);

        let mut suggestions = Vec::new();
        if let Some(warning) = result.warning {
            suggestions.push(warning);
        }
        suggestions.extend(result.suggestions);

        Ok(StrengthReport {
            score: result.score,
            guesses: result.guesses,
            crack_time_display: result.crack_time_display,
            issues,
            suggestions,
        })
    }
}

/// Fixed, score-tiered rule table. Checks run in a fixed order; a strong
/// score (>= 3) produces no rule-based issues at all.
fn rule_issues(password: &str, score: u8) -> Vec<String> {
    let mut issues = Vec::new();

    if score <= 1 {
        if password.chars().count() < 8 {
            issues.push("Password is too short (<8 chars).".to_string());
        }
        if COMMON_WORDS.contains(password.to_lowercase().as_str()) {
            issues.push("Password is a common word.".to_string());
        }
        if is_all_digits(password) {
            issues.push("Password only contains numbers.".to_string());
        }
        if is_all_lowercase(password) {
            issues.push("No uppercase letters present.".to_string());
        }
        // Fires together with the previous check for all-lowercase
        // alphabetic passwords; both items are kept.
        if is_alphabetic(password) && is_all_lowercase(password) {
            issues.push("Password contains only lowercase letters.".to_string());
        }
        if is_alphabetic(password) {
            issues.push("No digits or special characters used.".to_string());
        }
    } else if score <= 2 {
        if !password.chars().any(|c| c.is_uppercase()) {
            issues.push("Try adding uppercase letters.".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            issues.push("Consider adding numbers.".to_string());
        }
        if password.chars().all(|c| c.is_alphanumeric()) {
            issues.push("Try adding special characters (!@# etc).".to_string());
        }
    }

    issues
}

fn is_all_digits(password: &str) -> bool {
    password.chars().all(|c| c.is_ascii_digit())
}

/// At least one lowercase letter and no uppercase letters anywhere.
fn is_all_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase()) && !password.chars().any(|c| c.is_uppercase())
}

fn is_alphabetic(password: &str) -> bool {
    password.chars().all(|c| c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a canned score so tier boundaries can be tested
    /// without depending on zxcvbn's estimates.
    struct StubScorer {
        score: u8,
        warning: Option<String>,
        suggestions: Vec<String>,
    }

    impl StubScorer {
        fn with_score(score: u8) -> Self {
            Self {
                score,
                warning: None,
                suggestions: Vec::new(),
            }
        }
    }

    impl StrengthScorer for StubScorer {
        fn score(&self, _password: &str) -> ScoreResult {
            ScoreResult {
                score: self.score,
                guesses: 1_000,
                crack_time_display: "instant".to_string(),
                warning: self.warning.clone(),
                suggestions: self.suggestions.clone(),
            }
        }
    }

    fn issues_for(password: &str, score: u8) -> Vec<String> {
        StrengthAdvisor::with_scorer(StubScorer::with_score(score))
            .analyze(password)
            .unwrap()
            .issues
    }

    #[test]
    fn empty_password_is_rejected() {
        let advisor = StrengthAdvisor::with_scorer(StubScorer::with_score(0));
        assert!(matches!(
            advisor.analyze(""),
            Err(ToolkitError::EmptyPassword)
        ));
    }

    #[test]
    fn weak_tier_flags_common_word() {
        let issues = issues_for("password", 0);
        assert!(issues.contains(&"Password is a common word.".to_string()));
        // "password" is lowercase alphabetic, so both the uppercase check
        // and the lowercase-only check fire.
        assert!(issues.contains(&"No uppercase letters present.".to_string()));
        assert!(issues.contains(&"Password contains only lowercase letters.".to_string()));
        assert!(issues.contains(&"No digits or special characters used.".to_string()));
    }

    #[test]
    fn weak_tier_checks_run_in_fixed_order() {
        let issues = issues_for("abc", 1);
        assert_eq!(
            issues,
            vec![
                "Password is too short (<8 chars).".to_string(),
                "No uppercase letters present.".to_string(),
                "Password contains only lowercase letters.".to_string(),
                "No digits or special characters used.".to_string(),
            ]
        );
    }

    #[test]
    fn weak_tier_flags_digit_only_passwords() {
        let issues = issues_for("1234567890", 0);
        assert!(issues.contains(&"Password only contains numbers.".to_string()));
        assert!(!issues.contains(&"No uppercase letters present.".to_string()));
    }

    #[test]
    fn common_word_check_is_case_insensitive() {
        let issues = issues_for("QWERTY", 1);
        assert!(issues.contains(&"Password is a common word.".to_string()));
    }

    #[test]
    fn middle_tier_suggests_missing_character_classes() {
        let issues = issues_for("correcthorse", 2);
        assert_eq!(
            issues,
            vec![
                "Try adding uppercase letters.".to_string(),
                "Consider adding numbers.".to_string(),
                "Try adding special characters (!@# etc).".to_string(),
            ]
        );
    }

    #[test]
    fn middle_tier_is_quiet_when_classes_present() {
        assert!(issues_for("Horse42!staple", 2).is_empty());
    }

    #[test]
    fn strong_tier_produces_no_issues() {
        assert!(issues_for("password", 3).is_empty());
        assert!(issues_for("abc", 4).is_empty());
    }

    #[test]
    fn scorer_warning_comes_before_suggestions() {
        let scorer = StubScorer {
            score: 2,
            warning: Some("warned".to_string()),
            suggestions: vec!["first".to_string(), "second".to_string()],
        };
        let report = StrengthAdvisor::with_scorer(scorer)
            .analyze("Horse42!staple")
            .unwrap();
        assert_eq!(report.suggestions, vec!["warned", "first", "second"]);
    }

    #[test]
    fn zxcvbn_scorer_rates_common_password_weak() {
        let report = StrengthAdvisor::new().analyze("password").unwrap();
        assert!(report.score <= 1);
        assert!(report
            .issues
            .contains(&"Password is a common word.".to_string()));
        assert!(!report.crack_time_display.is_empty());
    }

    #[test]
    fn zxcvbn_scorer_stays_in_score_range() {
        for pwd in ["a", "Tr0ub4dor&3", "correct horse battery staple"] {
            let report = StrengthAdvisor::new().analyze(pwd).unwrap();
            assert!(report.score <= 4);
        }
    }
}
