// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Additive password strength scoring.
//!
//! | rule | points | otherwise |
//! |---|---|---|
//! | length >= 14 chars | 2 | |
//! | length in 8..14 chars | 1 | [`Deficiency::TooShort`] below 8 |
//! | both ASCII upper and lower case | 1 | [`Deficiency::MixedCase`] |
//! | a decimal digit | 1 | [`Deficiency::Digit`] |
//! | a character from [`SYMBOLS`] | 1 | [`Deficiency::Symbol`] |

use std::sync::LazyLock;

use regex::Regex;

/// Highest achievable score.
pub const MAX_SCORE: u8 = 5;

/// Scores at or above this are considered strong.
pub const STRONG_THRESHOLD: u8 = 4;

/// Characters that satisfy the symbol rule.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Any Unicode decimal digit, matching `\d` semantics.
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

/// A rule the password failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Deficiency {
    #[strum(to_string = "Too short (min 8 chars)")]
    TooShort,
    #[strum(to_string = "Mix upper and lower case")]
    MixedCase,
    #[strum(to_string = "Add at least one number")]
    Digit,
    #[strum(to_string = "Add a special character")]
    Symbol,
}

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// 0 to [`MAX_SCORE`].
    pub score: u8,
    /// Failed rules, in rule order.
    pub deficiencies: Vec<Deficiency>,
}

impl StrengthReport {
    pub fn is_strong(&self) -> bool {
        self.score >= STRONG_THRESHOLD
    }
}

/// Score `password` against the fixed rule set. Pure.
pub fn evaluate(password: &str) -> StrengthReport {
    let mut score = 0;
    let mut deficiencies = Vec::new();

    let len = password.chars().count();
    if len >= 14 {
        score += 2;
    } else if len >= 8 {
        score += 1;
    } else {
        deficiencies.push(Deficiency::TooShort);
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        score += 1;
    } else {
        deficiencies.push(Deficiency::MixedCase);
    }

    if DIGIT.is_match(password) {
        score += 1;
    } else {
        deficiencies.push(Deficiency::Digit);
    }

    if password.chars().any(|c| SYMBOLS.contains(c)) {
        score += 1;
    } else {
        deficiencies.push(Deficiency::Symbol);
    }

    StrengthReport {
        score,
        deficiencies,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn classic_passphrase_is_strong() {
        let report = evaluate("Tr0ub4dor&3xtra!");
        assert_eq!(report.score, MAX_SCORE);
        assert!(report.deficiencies.is_empty());
        assert!(report.is_strong());
    }

    #[test]
    fn empty_password_fails_every_rule() {
        let report = evaluate("");
        assert_eq!(report.score, 0);
        assert_eq!(
            report.deficiencies,
            vec![
                Deficiency::TooShort,
                Deficiency::MixedCase,
                Deficiency::Digit,
                Deficiency::Symbol
            ]
        );
        assert!(!report.is_strong());
    }

    #[test]
    fn length_boundaries() {
        assert_eq!(evaluate("abcdefg").score, 0);
        assert_eq!(evaluate("abcdefgh").score, 1);
        assert_eq!(evaluate("abcdefghijklm").score, 1);
        assert_eq!(evaluate("abcdefghijklmn").score, 2);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes.
        let report = evaluate("ééééééé");
        assert!(report.deficiencies.contains(&Deficiency::TooShort));
    }

    #[test]
    fn mixed_case_needs_both() {
        assert!(evaluate("ALLUPPER").deficiencies.contains(&Deficiency::MixedCase));
        assert!(evaluate("alllower").deficiencies.contains(&Deficiency::MixedCase));
        assert!(!evaluate("MixedCase").deficiencies.contains(&Deficiency::MixedCase));
    }

    #[test]
    fn non_ascii_letters_do_not_count_as_case() {
        assert!(evaluate("Éé").deficiencies.contains(&Deficiency::MixedCase));
    }

    #[test]
    fn unicode_digits_count() {
        assert!(!evaluate("٣").deficiencies.contains(&Deficiency::Digit));
        assert!(evaluate("no digits").deficiencies.contains(&Deficiency::Digit));
    }

    #[test]
    fn only_listed_symbols_count() {
        for c in SYMBOLS.chars() {
            let report = evaluate(&c.to_string());
            assert!(!report.deficiencies.contains(&Deficiency::Symbol), "{c}");
        }
        for c in ['-', '_', '+', '=', '~', '/', '[', ' '] {
            let report = evaluate(&c.to_string());
            assert!(report.deficiencies.contains(&Deficiency::Symbol), "{c}");
        }
    }

    #[test]
    fn four_is_the_strong_threshold() {
        // Long, mixed case, digit, no symbol.
        let report = evaluate("Abcdefghijklm1");
        assert_eq!(report.score, 4);
        assert!(report.is_strong());

        // Short-ish, mixed case, digit, no symbol.
        let report = evaluate("Abcdefg1");
        assert_eq!(report.score, 3);
        assert!(!report.is_strong());
    }

    #[test]
    fn deficiency_messages() {
        assert_eq!(Deficiency::TooShort.to_string(), "Too short (min 8 chars)");
        assert_eq!(Deficiency::MixedCase.to_string(), "Mix upper and lower case");
        assert_eq!(Deficiency::Digit.to_string(), "Add at least one number");
        assert_eq!(Deficiency::Symbol.to_string(), "Add a special character");
    }

    proptest! {
        #[test]
        fn score_is_bounded(password in ".*") {
            let report = evaluate(&password);
            prop_assert!(report.score <= MAX_SCORE);
            prop_assert!(report.deficiencies.len() <= 4);
        }

        #[test]
        fn perfect_score_iff_no_deficiencies_and_long(password in ".*") {
            let report = evaluate(&password);
            let long = password.chars().count() >= 14;
            prop_assert_eq!(report.score == MAX_SCORE, report.deficiencies.is_empty() && long);
        }

        #[test]
        fn evaluation_is_deterministic(password in ".*") {
            prop_assert_eq!(evaluate(&password), evaluate(&password));
        }
    }
}
