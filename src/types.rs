//! Shared option types for accessors and loaders.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which rule set turns a string into a `bool`.
///
/// Both flavors exist in deployed code and callers may depend on either, so
/// neither replaces the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoolMode {
    /// Token tables, then numeric sign inference, then standard bool parsing.
    #[default]
    Classifying,
    /// `yes` (any case), then standard bool parsing. Pair with
    /// [`Env::get_or`](crate::Env::get_or) to fall back to a default on
    /// anything else.
    Lenient,
}

/// What the resolver does when a `base64:` or `obfuscated:` payload does not
/// decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodePolicy {
    /// Return the decoder's error message as the resolved value.
    #[default]
    ErrorAsValue,
    /// Report [`EnvError::Decode`](crate::EnvError::Decode).
    Strict,
}

/// Where to search for `.env` files.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPath {
    /// Platform config directory (XDG on Linux, ~/Library/Application Support on macOS).
    /// Needs an app name on the loader.
    Platform,
    /// A subdirectory under the user's home directory, e.g. `Home(".myapp")`.
    Home(&'static str),
    /// Current working directory.
    Cwd,
    /// An explicit path.
    Path(PathBuf),
    /// Walk up from the current working directory, shallowest first.
    Ancestors(Boundary),
}

/// How far [`SearchPath::Ancestors`] walks.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary {
    /// Up to the filesystem root.
    Root,
    /// Stop (inclusive) at the first directory containing this entry, e.g. `".git"`.
    Marker(&'static str),
}

/// What to do with several discovered `.env` files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Layer every file found; later (higher-priority) files win per key.
    #[default]
    Merge,
    /// Use only the highest-priority file found.
    FirstMatch,
}

/// What to do when a `.env` file exists but cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Return [`EnvError::DotEnv`](crate::EnvError).
    #[default]
    Error,
    /// Log the failure and exit the process with status 1.
    Abort,
}
