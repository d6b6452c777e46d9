use crate::accessor::Env;
use crate::classify::BoolClassifier;
use crate::decode::{Resolver, ValueDecoder};
use crate::settings::EnvSettings;
use crate::source::{EnvSource, ProcessEnv};
use crate::tokens::TokenTables;
use crate::types::{BoolMode, DecodePolicy};

/// Builder for an [`Env`] accessor.
///
/// Every knob is optional:
///
/// - **Source**: [`source()`](Self::source), the process environment by default.
/// - **Tables**: [`token_tables()`](Self::token_tables), the extended `on`/`off` lists by default.
/// - **Bool mode**: [`bool_mode()`](Self::bool_mode), [`BoolMode::Classifying`] by default.
/// - **Decode policy**: [`decode_policy()`](Self::decode_policy), [`DecodePolicy::ErrorAsValue`] by default.
pub struct EnvBuilder<S: EnvSource = ProcessEnv> {
    source: S,
    tables: Option<TokenTables>,
    bool_mode: BoolMode,
    resolver: Resolver,
}

impl EnvBuilder<ProcessEnv> {
    pub(crate) fn new() -> Self {
        Self {
            source: ProcessEnv,
            tables: None,
            bool_mode: BoolMode::default(),
            resolver: Resolver::default(),
        }
    }
}

impl<S: EnvSource> EnvBuilder<S> {
    /// Read from `source` instead of the process environment.
    pub fn source<S2: EnvSource>(self, source: S2) -> EnvBuilder<S2> {
        EnvBuilder {
            source,
            tables: self.tables,
            bool_mode: self.bool_mode,
            resolver: self.resolver,
        }
    }

    /// Replace the truthy/falsy tables.
    pub fn token_tables(mut self, tables: TokenTables) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Replace the truthy/falsy tables from comma-separated lists.
    pub fn token_lists(self, truthy: &str, falsy: &str) -> Self {
        self.token_tables(TokenTables::from_lists(truthy, falsy))
    }

    pub fn bool_mode(mut self, mode: BoolMode) -> Self {
        self.bool_mode = mode;
        self
    }

    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.resolver.set_policy(policy);
        self
    }

    /// Register an extra prefix decoder after the built-in ones.
    pub fn decoder(mut self, decoder: impl ValueDecoder + 'static) -> Self {
        self.resolver = self.resolver.with_decoder(decoder);
        self
    }

    /// Apply tables, bool mode and decode policy from loaded settings.
    pub fn settings(self, settings: &EnvSettings) -> Self {
        self.token_lists(&settings.true_values, &settings.false_values)
            .bool_mode(settings.bool_mode)
            .decode_policy(settings.decode_policy)
    }

    pub fn build(self) -> Env<S> {
        let tables = self.tables.unwrap_or_default();
        Env {
            source: self.source,
            resolver: self.resolver,
            classifier: BoolClassifier::new(tables, self.bool_mode),
        }
    }
}
