//! Boolean classification.
//!
//! [`BoolMode::Classifying`] applies three rules in order, first match wins:
//!
//! 1. **Tokens**: exact match in the truthy or falsy [`TokenTables`].
//! 2. **Numeric sign**: a plain decimal number (`+2.5`, `-3`, `.5`, `1e-3`)
//!    is `true` when strictly positive, `false` when zero or negative.
//!    `NaN`, `Inf` and values that overflow to infinity do not count.
//! 3. **Standard parsing**: `1 t T TRUE true True` / `0 f F FALSE false False`.
//!
//! [`BoolMode::Lenient`] accepts `yes` in any case, then standard parsing.
//!
//! Anything else is a parse failure; callers decide whether that becomes an
//! error or a default.

use std::sync::LazyLock;

use regex::Regex;

use crate::tokens::TokenTables;
use crate::types::BoolMode;

/// Optional sign, digits with an optional fraction (or a bare leading dot),
/// optional exponent. ASCII digits only.
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(([0-9]+\.?[0-9]*)|(\.[0-9]+))([eE][+-]?[0-9]+)?$")
        .expect("numeric pattern is valid")
});

/// Turns strings into `bool` with a fixed mode and token tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolClassifier {
    tables: TokenTables,
    mode: BoolMode,
}

impl BoolClassifier {
    pub fn new(tables: TokenTables, mode: BoolMode) -> Self {
        Self { tables, mode }
    }

    pub fn tables(&self) -> &TokenTables {
        &self.tables
    }

    pub fn mode(&self) -> BoolMode {
        self.mode
    }

    /// Classify `raw` (surrounding whitespace is ignored).
    ///
    /// Returns `None` for empty input and for anything the active mode does
    /// not recognize.
    pub fn classify(&self, raw: &str) -> Option<bool> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }
        match self.mode {
            BoolMode::Classifying => self.classify_strict(s),
            BoolMode::Lenient => classify_lenient(s),
        }
    }

    fn classify_strict(&self, s: &str) -> Option<bool> {
        self.tables
            .lookup(s)
            .or_else(|| numeric_sign(s))
            .or_else(|| parse_standard(s))
    }
}

/// The lenient rule set, independent of any token tables.
pub fn classify_lenient(raw: &str) -> Option<bool> {
    let s = raw.trim();
    if s.eq_ignore_ascii_case("yes") {
        return Some(true);
    }
    parse_standard(s)
}

/// `true` for a finite positive number, `false` for zero or negative,
/// `None` when `s` is not a plain decimal number.
pub fn numeric_sign(s: &str) -> Option<bool> {
    if !NUMERIC.is_match(s) {
        return None;
    }
    let n: f64 = s.parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(n > 0.0)
}

/// The conventional boolean spellings.
pub fn parse_standard(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{CANONICAL_FALSE_VALUES, CANONICAL_TRUE_VALUES, TokenSet};

    fn classifying() -> BoolClassifier {
        BoolClassifier::default()
    }

    fn lenient() -> BoolClassifier {
        BoolClassifier::new(TokenTables::default(), BoolMode::Lenient)
    }

    #[test]
    fn every_canonical_truthy_token_is_true() {
        let c = classifying();
        for token in TokenSet::parse(CANONICAL_TRUE_VALUES).iter() {
            assert_eq!(c.classify(token), Some(true), "token {token:?}");
        }
    }

    #[test]
    fn every_canonical_falsy_token_is_false() {
        let c = classifying();
        for token in TokenSet::parse(CANONICAL_FALSE_VALUES).iter() {
            assert_eq!(c.classify(token), Some(false), "token {token:?}");
        }
    }

    #[test]
    fn on_off_recognized_by_default_tables() {
        let c = classifying();
        assert_eq!(c.classify("ON"), Some(true));
        assert_eq!(c.classify("off"), Some(false));
    }

    #[test]
    fn on_off_rejected_with_canonical_tables() {
        let c = BoolClassifier::new(TokenTables::canonical(), BoolMode::Classifying);
        assert_eq!(c.classify("on"), None);
        assert_eq!(c.classify("Off"), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let c = classifying();
        assert_eq!(c.classify("  yes  "), c.classify("yes"));
        assert_eq!(c.classify("  no  "), Some(false));
        assert_eq!(c.classify("\t1\n"), Some(true));
        assert_eq!(c.classify("  0  "), Some(false));
    }

    #[test]
    fn positive_numbers_are_true() {
        let c = classifying();
        for n in ["2", "+2.5", "1e-3", "0.01", ".5", "3.", "42E2", "+0.1e+1"] {
            assert_eq!(c.classify(n), Some(true), "number {n:?}");
        }
    }

    #[test]
    fn zero_and_negative_numbers_are_false() {
        let c = classifying();
        for n in ["0.00", "+0", "-0", "-2", "-3.14", "-1e-3", "0e10", "-.5"] {
            assert_eq!(c.classify(n), Some(false), "number {n:?}");
        }
    }

    #[test]
    fn non_finite_spellings_are_rejected() {
        let c = classifying();
        for s in ["NaN", "Inf", "-Inf", "inf", "infinity", "1e400"] {
            assert_eq!(c.classify(s), None, "value {s:?}");
        }
    }

    #[test]
    fn unknown_words_are_rejected() {
        let c = classifying();
        for s in ["maybe", "abc", "y", "n", "yES", "1.2.3", "0x10", "1_000", "", "   "] {
            assert_eq!(c.classify(s), None, "value {s:?}");
        }
    }

    #[test]
    fn tokens_take_priority_over_numbers() {
        // A table entry beats sign inference.
        let c = BoolClassifier::new(TokenTables::from_lists("yes", "1"), BoolMode::Classifying);
        assert_eq!(c.classify("1"), Some(false));
    }

    #[test]
    fn standard_parse_is_last_resort_for_custom_tables() {
        let c = BoolClassifier::new(TokenTables::from_lists("oui", "non"), BoolMode::Classifying);
        assert_eq!(c.classify("oui"), Some(true));
        assert_eq!(c.classify("True"), Some(true));
        assert_eq!(c.classify("F"), Some(false));
        assert_eq!(c.classify("yes"), None);
    }

    #[test]
    fn numeric_grammar_is_ascii_only() {
        assert_eq!(numeric_sign("١"), None);
        assert_eq!(numeric_sign("12"), Some(true));
    }

    #[test]
    fn lenient_accepts_yes_in_any_case() {
        let c = lenient();
        assert_eq!(c.classify("yes"), Some(true));
        assert_eq!(c.classify("YeS"), Some(true));
        assert_eq!(c.classify("true"), Some(true));
        assert_eq!(c.classify("0"), Some(false));
    }

    #[test]
    fn lenient_ignores_tables_and_numbers() {
        let c = lenient();
        assert_eq!(c.classify("no"), None);
        assert_eq!(c.classify("on"), None);
        assert_eq!(c.classify("2"), None);
        assert_eq!(c.classify("-1"), None);
    }
}
