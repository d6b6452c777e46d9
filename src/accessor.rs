//! The four retrieval modes over any [`EnvSource`].
//!
//! | Mode | Method | Absent / empty | Unparsable |
//! |------|--------|----------------|------------|
//! | zero value | [`get`](Env::get) | `T::default()` | `T::default()` |
//! | caller default | [`get_or`](Env::get_or) | `default` | `default` |
//! | error | [`try_get`](Env::try_get) | [`EnvError::NotFound`] | [`EnvError::Parse`] |
//! | abort | [`must_get`](Env::must_get) | panic | panic |
//!
//! The mode logic is shared by every type; only [`EnvValue::parse_env`]
//! differs. The per-type methods (`get_bool`, `try_get_int`, ...) are thin
//! wrappers kept for discoverability.

use crate::builder::EnvBuilder;
use crate::classify::{self, BoolClassifier};
use crate::decode::Resolver;
use crate::error::EnvError;
use crate::settings::EnvSettings;
use crate::source::{EnvSource, ProcessEnv};
use crate::value::EnvValue;

/// Typed access to environment variables.
#[derive(Debug)]
pub struct Env<S: EnvSource = ProcessEnv> {
    pub(crate) source: S,
    pub(crate) resolver: Resolver,
    pub(crate) classifier: BoolClassifier,
}

impl Default for Env<ProcessEnv> {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Env<ProcessEnv> {
    pub fn builder() -> EnvBuilder<ProcessEnv> {
        EnvBuilder::new()
    }

    /// Process environment configured from loaded [`EnvSettings`].
    pub fn from_settings(settings: &EnvSettings) -> Self {
        Self::builder().settings(settings).build()
    }
}

impl<S: EnvSource> Env<S> {
    /// Accessor over `source` with default tables, mode and policy.
    pub fn with_source(source: S) -> Self {
        EnvBuilder::new().source(source).build()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn classifier(&self) -> &BoolClassifier {
        &self.classifier
    }

    /// Resolved string for `key`: trimmed, decoded, `""` when absent.
    pub fn resolve(&self, key: &str) -> String {
        self.resolver.resolve(&self.source, key)
    }

    /// `key` as `T`, or `T`'s zero value.
    pub fn get<T: EnvValue>(&self, key: &str) -> T {
        self.try_get(key).unwrap_or_default()
    }

    /// `key` as `T`, or `default`.
    pub fn get_or<T: EnvValue>(&self, key: &str, default: T) -> T {
        self.try_get(key).unwrap_or(default)
    }

    /// `key` as `T`, or why not.
    pub fn try_get<T: EnvValue>(&self, key: &str) -> Result<T, EnvError> {
        let value = self.resolver.try_resolve(&self.source, key)?;
        T::parse_env(&value, &self.classifier).ok_or_else(|| EnvError::Parse {
            key: key.into(),
            value,
            expected: T::EXPECTED,
        })
    }

    /// `key` as `T`.
    ///
    /// # Panics
    ///
    /// Panics with the [`EnvError`] message when the key is absent, empty,
    /// undecodable or unparsable. Use this only for settings the process
    /// cannot run without.
    #[track_caller]
    pub fn must_get<T: EnvValue>(&self, key: &str) -> T {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn get_string(&self, key: &str) -> String {
        self.get(key)
    }

    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_or(key, default.to_string())
    }

    pub fn try_get_string(&self, key: &str) -> Result<String, EnvError> {
        self.try_get(key)
    }

    #[track_caller]
    pub fn must_get_string(&self, key: &str) -> String {
        self.must_get(key)
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.get(key)
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.get_or(key, default)
    }

    pub fn try_get_int(&self, key: &str) -> Result<i64, EnvError> {
        self.try_get(key)
    }

    #[track_caller]
    pub fn must_get_int(&self, key: &str) -> i64 {
        self.must_get(key)
    }

    pub fn get_float(&self, key: &str) -> f64 {
        self.get(key)
    }

    pub fn get_float_or(&self, key: &str, default: f64) -> f64 {
        self.get_or(key, default)
    }

    pub fn try_get_float(&self, key: &str) -> Result<f64, EnvError> {
        self.try_get(key)
    }

    #[track_caller]
    pub fn must_get_float(&self, key: &str) -> f64 {
        self.must_get(key)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_or(key, default)
    }

    pub fn try_get_bool(&self, key: &str) -> Result<bool, EnvError> {
        self.try_get(key)
    }

    #[track_caller]
    pub fn must_get_bool(&self, key: &str) -> bool {
        self.must_get(key)
    }

    /// Lenient boolean: `yes` in any case, the standard spellings, and
    /// `default` for everything else, whatever [`BoolMode`](crate::BoolMode)
    /// this accessor was built with.
    pub fn get_bool_lenient(&self, key: &str, default: bool) -> bool {
        let value = self.resolve(key);
        classify::classify_lenient(&value).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{accessor, env_with};
    use crate::tokens::TokenTables;
    use crate::types::{BoolMode, DecodePolicy};

    #[test]
    fn absent_key_modes() {
        let env = accessor(&[]);
        assert_eq!(env.get_string("MISSING"), "");
        assert_eq!(env.get_int("MISSING"), 0);
        assert_eq!(env.get_float("MISSING"), 0.0);
        assert!(!env.get_bool("MISSING"));

        assert_eq!(env.get_string_or("MISSING", "fallback"), "fallback");
        assert_eq!(env.get_int_or("MISSING", 456), 456);
        assert_eq!(env.get_float_or("MISSING", 678.9), 678.9);
        assert!(env.get_bool_or("MISSING", true));

        assert!(env.try_get_string("MISSING").unwrap_err().is_not_found());
        assert!(env.try_get_int("MISSING").unwrap_err().is_not_found());
        assert!(env.try_get_float("MISSING").unwrap_err().is_not_found());
        assert!(env.try_get_bool("MISSING").unwrap_err().is_not_found());
    }

    #[test]
    fn empty_value_is_not_found() {
        let env = accessor(&[("BLANK", ""), ("SPACES", "   ")]);
        assert!(env.try_get_string("BLANK").unwrap_err().is_not_found());
        assert!(env.try_get_int("SPACES").unwrap_err().is_not_found());
        assert_eq!(env.get_string_or("SPACES", "d"), "d");
    }

    #[test]
    fn port_parses_as_int() {
        let env = accessor(&[("PORT", "8080")]);
        assert_eq!(env.try_get_int("PORT").unwrap(), 8080);
        assert_eq!(env.get::<u16>("PORT"), 8080);
    }

    #[test]
    fn zero_point_zero_is_false() {
        let env = accessor(&[("DEBUG", "0.00")]);
        assert!(!env.try_get_bool("DEBUG").unwrap());
    }

    #[test]
    fn negative_feature_weight_is_false() {
        let env = accessor(&[("FEATURE_X", "-3.14")]);
        assert!(!env.try_get_bool("FEATURE_X").unwrap());
    }

    #[test]
    fn unclassifiable_bool() {
        let env = accessor(&[("FLAG", "maybe")]);
        let err = env.try_get_bool("FLAG").unwrap_err();
        assert!(matches!(
            err,
            EnvError::Parse { ref key, ref value, expected: "a boolean" }
                if key == "FLAG" && value == "maybe"
        ));
        assert!(!env.get_bool("FLAG"));
        assert!(env.get_bool_or("FLAG", true));
    }

    #[test]
    fn ratio_default_when_unset() {
        let env = accessor(&[]);
        assert_eq!(env.get_float_or("RATIO", 1.5), 1.5);
    }

    #[test]
    #[should_panic(expected = "environment variable 'REQUIRED' not found")]
    fn must_get_string_panics_when_unset() {
        accessor(&[]).must_get_string("REQUIRED");
    }

    #[test]
    #[should_panic(expected = "cannot be parsed as an integer")]
    fn must_get_int_panics_on_garbage() {
        accessor(&[("WORKERS", "many")]).must_get_int("WORKERS");
    }

    #[test]
    fn must_get_returns_value_when_present() {
        let env = accessor(&[("REQUIRED", "here"), ("ON", "On")]);
        assert_eq!(env.must_get_string("REQUIRED"), "here");
        assert!(env.must_get_bool("ON"));
    }

    #[test]
    fn parse_failure_falls_back_per_mode() {
        let env = accessor(&[("N", "abc")]);
        assert_eq!(env.get_int("N"), 0);
        assert_eq!(env.get_int_or("N", 9), 9);
        assert!(matches!(
            env.try_get_int("N"),
            Err(EnvError::Parse { expected: "an integer", .. })
        ));
        assert_eq!(env.get_float("N"), 0.0);
        assert!(matches!(
            env.try_get_float("N"),
            Err(EnvError::Parse { expected: "a float", .. })
        ));

        let env = accessor(&[("BIG", "1e400")]);
        assert_eq!(env.get_float("BIG"), 0.0);
        assert_eq!(env.get_float_or("BIG", 1.5), 1.5);
        assert!(matches!(
            env.try_get_float("BIG"),
            Err(EnvError::Parse { expected: "a float", .. })
        ));
    }

    #[test]
    fn padded_bool_is_trimmed_before_classifying() {
        let env = accessor(&[("A", "  yes  "), ("B", "yes")]);
        assert_eq!(env.try_get_bool("A").unwrap(), env.try_get_bool("B").unwrap());
    }

    #[test]
    fn base64_values_flow_through_typed_accessors() {
        let env = accessor(&[("PORT", "base64:ODA4MA=="), ("ON", "base64:eWVz")]);
        assert_eq!(env.get_int("PORT"), 8080);
        assert!(env.get_bool("ON"));
    }

    #[test]
    fn bad_base64_surfaces_as_parse_error_by_default() {
        let env = accessor(&[("PORT", "base64:@@@")]);
        assert!(matches!(env.try_get_int("PORT"), Err(EnvError::Parse { .. })));
    }

    #[test]
    fn bad_base64_surfaces_as_decode_error_when_strict() {
        let env = Env::builder()
            .source(env_with(&[("PORT", "base64:@@@")]))
            .decode_policy(DecodePolicy::Strict)
            .build();
        assert!(matches!(env.try_get_int("PORT"), Err(EnvError::Decode { .. })));
        assert_eq!(env.get_int_or("PORT", 3000), 3000);
    }

    #[test]
    fn lenient_mode_changes_classification() {
        let env = Env::builder()
            .source(env_with(&[("A", "YES"), ("B", "on"), ("C", "5")]))
            .bool_mode(BoolMode::Lenient)
            .build();
        assert!(env.get_bool("A"));
        assert!(env.try_get_bool("B").is_err());
        assert!(!env.get_bool_or("C", false));
    }

    #[test]
    fn get_bool_lenient_defaults_on_anything_unrecognized() {
        let env = accessor(&[("A", "YeS"), ("B", "on"), ("C", "False")]);
        assert!(env.get_bool_lenient("A", false));
        assert!(env.get_bool_lenient("B", true));
        assert!(!env.get_bool_lenient("B", false));
        assert!(!env.get_bool_lenient("C", true));
        assert!(env.get_bool_lenient("MISSING", true));
    }

    #[test]
    fn custom_tables_are_used() {
        let env = Env::builder()
            .source(env_with(&[("A", "oui"), ("B", "non")]))
            .token_tables(TokenTables::from_lists("oui", "non"))
            .build();
        assert!(env.get_bool("A"));
        assert!(!env.get_bool_or("B", true));
    }

    #[test]
    fn generic_get_supports_other_widths() {
        let env = accessor(&[("SMALL", "200"), ("RATE", "0.25")]);
        assert_eq!(env.get::<u8>("SMALL"), 200);
        assert_eq!(env.get::<f32>("RATE"), 0.25);
        assert_eq!(env.get::<i8>("SMALL"), 0);
    }
}
