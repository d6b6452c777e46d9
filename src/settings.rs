//! Settings for the accessor itself: token lists, bool mode, decode policy.
//!
//! Layered by confique, highest priority first:
//!
//! ```text
//! ENVKIT_* environment variables
//!        ↓ falls back to
//! settings file (TOML, optional)
//!        ↓ falls back to
//! compiled defaults
//! ```

use std::path::Path;

use confique::Config;

use crate::error::EnvError;
use crate::types::{BoolMode, DecodePolicy};

#[derive(Config, Debug, Clone, PartialEq)]
pub struct EnvSettings {
    /// Comma-separated tokens read as `true` (case-sensitive, exact match).
    #[config(
        env = "ENVKIT_TRUE_VALUES",
        default = "true,True,TRUE,T,t,1,yes,Yes,YES,on,On,ON"
    )]
    pub true_values: String,

    /// Comma-separated tokens read as `false` (case-sensitive, exact match).
    #[config(
        env = "ENVKIT_FALSE_VALUES",
        default = "false,False,FALSE,F,f,0,no,No,NO,off,Off,OFF"
    )]
    pub false_values: String,

    /// Boolean rule set: "classifying" (tokens, numeric sign, standard
    /// spellings) or "lenient" ("yes" in any case, standard spellings).
    #[config(default = "classifying")]
    pub bool_mode: BoolMode,

    /// Undecodable `base64:`/`obfuscated:` values: "error-as-value" returns the
    /// decoder message as the value, "strict" reports a decode error.
    #[config(default = "error-as-value")]
    pub decode_policy: DecodePolicy,
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self {
            true_values: crate::tokens::TRUE_VALUES.to_string(),
            false_values: crate::tokens::FALSE_VALUES.to_string(),
            bool_mode: BoolMode::default(),
            decode_policy: DecodePolicy::default(),
        }
    }
}

impl EnvSettings {
    /// Load from `ENVKIT_*` variables, then `path` if given and present,
    /// then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, EnvError> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Load from a TOML string layered over defaults. No env lookup.
    pub fn from_toml_str(content: &str) -> Result<Self, EnvError> {
        let layer: <Self as Config>::Layer = toml::from_str(content)?;
        Ok(Self::builder().preloaded(layer).load()?)
    }
}

/// A commented TOML template listing every setting and its default.
pub fn settings_template() -> String {
    confique::toml::template::<EnvSettings>(confique::toml::FormatOptions::default())
}
