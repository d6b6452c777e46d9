//! Typed environment variable accessors. Read a key, decode it if it is
//! wrapped, coerce it to the type you asked for.
//!
//! ```ignore
//! let port = envkit::get_int_or_default("PORT", 8080);
//! let debug = envkit::get_bool("DEBUG");
//! let url: String = envkit::get_string_or_panic("DATABASE_URL");
//! ```
//!
//! # Four retrieval modes
//!
//! Every type is read the same four ways; only the parser differs.
//!
//! | Mode | Free function | [`Env`] method | On absence / bad value |
//! |------|---------------|----------------|------------------------|
//! | zero value | `get_int` | [`get`](Env::get) | `0`, `""`, `0.0`, `false` |
//! | caller default | `get_int_or_default` | [`get_or`](Env::get_or) | the default |
//! | error | `get_int_or_error` | [`try_get`](Env::try_get) | [`EnvError`] |
//! | abort | `get_int_or_panic` | [`must_get`](Env::must_get) | panic |
//!
//! An absent variable and one that is empty (after trimming and decoding)
//! are the same thing: [`EnvError::NotFound`].
//!
//! # Resolution
//!
//! Values are trimmed. A value starting with `base64:` is decoded as URL-safe
//! base64; one starting with `obfuscated:` is run through
//! [`obfuscate::deobfuscate`]. Everything else is used as-is. See
//! [`decode`] for what happens when decoding fails.
//!
//! # Booleans
//!
//! Booleans go through an ordered classification (see [`classify`]):
//!
//! 1. exact token tables: `true True TRUE T t 1 yes Yes YES on On ON` and
//!    `false False FALSE F f 0 no No NO off Off OFF`;
//! 2. numeric sign: any positive number is `true`, zero or negative `false`
//!    (`0.00` → `false`, `-3.14` → `false`, `1e-3` → `true`);
//! 3. the standard spellings `1 t T TRUE true True` / `0 f F FALSE false False`.
//!
//! A second, lenient flavor ([`BoolMode::Lenient`], [`get_bool_lenient`])
//! accepts `yes` in any case plus the standard spellings and defaults on
//! everything else.
//!
//! # Injecting a source
//!
//! [`Env`] is generic over [`EnvSource`]. The free functions use the process
//! environment; tests and embedded callers can use [`MapEnv`]:
//!
//! ```ignore
//! let env = Env::builder()
//!     .source(MapEnv::from_pairs([("FEATURE_X", "0.75")]))
//!     .build();
//! assert!(env.get_bool("FEATURE_X"));
//! ```
//!
//! # Populating the environment
//!
//! - [`DotEnvLoader`] (feature `dotenv`, on by default) discovers and loads
//!   `.env` files. Existing variables win unless told otherwise.
//! - [`load_vault`] (feature `vault`, on by default) decrypts a
//!   password-protected vault and writes every pair.
//!
//! # Settings
//!
//! Token lists, the bool mode and the decode policy can come from
//! [`EnvSettings`]: compiled defaults, an optional TOML file, and `ENVKIT_*`
//! variables. [`settings_template`] renders a commented starting file.

pub mod classify;
pub mod decode;
pub mod error;
pub mod obfuscate;
pub mod source;
pub mod tokens;
pub mod types;

mod accessor;
mod builder;
#[cfg(feature = "dotenv")]
mod dotenv;
pub mod file;
mod global;
mod settings;
mod value;
#[cfg(feature = "vault")]
mod vault;

#[cfg(test)]
mod fixtures;

pub use accessor::Env;
pub use builder::EnvBuilder;
pub use classify::BoolClassifier;
pub use decode::{Resolver, ValueDecoder, encode_base64_value, encode_obfuscated_value};
#[cfg(feature = "dotenv")]
pub use dotenv::{DotEnvLoader, LoadReport};
pub use error::EnvError;
#[cfg(feature = "dotenv")]
pub use global::load_dotenv;
pub use global::{
    get_bool, get_bool_lenient, get_bool_or_default, get_bool_or_error, get_bool_or_panic,
    get_float, get_float_or_default, get_float_or_error, get_float_or_panic, get_int,
    get_int_or_default, get_int_or_error, get_int_or_panic, get_string, get_string_or_default,
    get_string_or_error, get_string_or_panic, process_env,
};
pub use settings::{EnvSettings, settings_template};
pub use source::{EnvSource, MapEnv, ProcessEnv};
pub use tokens::{TokenSet, TokenTables};
pub use types::{BoolMode, Boundary, DecodePolicy, MalformedPolicy, SearchMode, SearchPath};
pub use value::EnvValue;
#[cfg(feature = "vault")]
pub use vault::{
    PasswordVault, VaultCipher, VaultOptions, load_vault, load_vault_into, load_vault_keys,
    load_vault_keys_with,
};
