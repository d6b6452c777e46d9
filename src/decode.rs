//! Raw value lookup and prefix decoding.
//!
//! A value is trimmed, then checked against each registered decoder's prefix
//! in order. The first matching decoder gets the remainder of the string.
//! Values without a known prefix come back trimmed and otherwise untouched.
//!
//! | Stored value | Resolved value |
//! |--------------|----------------|
//! | `  8080 ` | `8080` |
//! | `base64:aGVsbG8=` | `hello` |
//! | `obfuscated:…` | the deobfuscated text |
//!
//! Decode failures follow the resolver's [`DecodePolicy`]. Under
//! [`ErrorAsValue`](DecodePolicy::ErrorAsValue) the decoder's error message
//! *is* the resolved value, which almost always fails type parsing one layer
//! up. Under [`Strict`](DecodePolicy::Strict) it becomes
//! [`EnvError::Decode`].

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;

use crate::error::EnvError;
use crate::obfuscate;
use crate::source::EnvSource;
use crate::types::DecodePolicy;

/// Prefix marking a URL-safe base64 value.
pub const BASE64_PREFIX: &str = "base64:";

/// Prefix marking an obfuscated value.
pub const OBFUSCATED_PREFIX: &str = "obfuscated:";

/// Turns the payload after a prefix into bytes.
pub trait ValueDecoder: Send + Sync {
    /// Literal prefix this decoder claims, including the trailing `:`.
    fn prefix(&self) -> &str;

    /// Decode the payload (the value with the prefix stripped).
    fn decode(&self, payload: &str) -> Result<Vec<u8>, String>;
}

/// URL-safe, padded base64.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Decoder;

impl ValueDecoder for Base64Decoder {
    fn prefix(&self) -> &str {
        BASE64_PREFIX
    }

    fn decode(&self, payload: &str) -> Result<Vec<u8>, String> {
        URL_SAFE.decode(payload).map_err(|e| e.to_string())
    }
}

/// See [`obfuscate`](crate::obfuscate).
#[derive(Debug, Clone, Copy, Default)]
pub struct ObfuscatedDecoder;

impl ValueDecoder for ObfuscatedDecoder {
    fn prefix(&self) -> &str {
        OBFUSCATED_PREFIX
    }

    fn decode(&self, payload: &str) -> Result<Vec<u8>, String> {
        obfuscate::deobfuscate(payload)
    }
}

/// Encode `plain` as a `base64:` value the resolver will decode.
pub fn encode_base64_value(plain: &[u8]) -> String {
    format!("{BASE64_PREFIX}{}", URL_SAFE.encode(plain))
}

/// Encode `plain` as an `obfuscated:` value the resolver will decode.
pub fn encode_obfuscated_value(plain: &[u8]) -> String {
    format!("{OBFUSCATED_PREFIX}{}", obfuscate::obfuscate(plain))
}

/// Looks up keys in an [`EnvSource`] and applies prefix decoding.
pub struct Resolver {
    decoders: Vec<Box<dyn ValueDecoder>>,
    policy: DecodePolicy,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefixes: Vec<&str> = self.decoders.iter().map(|d| d.prefix()).collect();
        f.debug_struct("Resolver")
            .field("prefixes", &prefixes)
            .field("policy", &self.policy)
            .finish()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DecodePolicy::default())
    }
}

impl Resolver {
    /// Resolver with the built-in `base64:` and `obfuscated:` decoders.
    pub fn new(policy: DecodePolicy) -> Self {
        Self {
            decoders: vec![Box::new(Base64Decoder), Box::new(ObfuscatedDecoder)],
            policy,
        }
    }

    /// Register another decoder. Earlier decoders win on overlapping prefixes.
    pub fn with_decoder(mut self, decoder: impl ValueDecoder + 'static) -> Self {
        self.decoders.push(Box::new(decoder));
        self
    }

    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: DecodePolicy) {
        self.policy = policy;
    }

    /// Resolve `key`. Absent keys resolve to `""`.
    ///
    /// Under [`DecodePolicy::Strict`] an undecodable value also resolves to
    /// `""`; use [`try_resolve`](Self::try_resolve) to see why.
    pub fn resolve<S: EnvSource + ?Sized>(&self, source: &S, key: &str) -> String {
        match self.lookup(source, key) {
            Ok(value) => value,
            Err(_) => String::new(),
        }
    }

    /// Resolve `key`, reporting [`EnvError::NotFound`] for absent or empty
    /// values and, under the strict policy, [`EnvError::Decode`].
    pub fn try_resolve<S: EnvSource + ?Sized>(
        &self,
        source: &S,
        key: &str,
    ) -> Result<String, EnvError> {
        let value = self.lookup(source, key)?;
        if value.is_empty() {
            return Err(EnvError::NotFound { key: key.into() });
        }
        Ok(value)
    }

    fn lookup<S: EnvSource + ?Sized>(&self, source: &S, key: &str) -> Result<String, EnvError> {
        let Some(raw) = source.var(key) else {
            tracing::trace!(key, "variable not set");
            return Ok(String::new());
        };

        match self.decode_value(&raw) {
            Ok(value) => Ok(value),
            Err(reason) => match self.policy {
                DecodePolicy::ErrorAsValue => {
                    tracing::warn!(key, "value failed to decode, using decoder message as value");
                    Ok(reason)
                }
                DecodePolicy::Strict => Err(EnvError::Decode {
                    key: key.into(),
                    reason,
                }),
            },
        }
    }

    /// Trim `raw` and run the matching decoder, if any.
    ///
    /// Pure: the same input always yields the same output, and a value with
    /// no recognized prefix comes back trimmed.
    pub fn decode_value(&self, raw: &str) -> Result<String, String> {
        let trimmed = raw.trim();

        let Some((decoder, payload)) = self
            .decoders
            .iter()
            .find_map(|d| trimmed.strip_prefix(d.prefix()).map(|rest| (d, rest)))
        else {
            return Ok(trimmed.to_string());
        };

        tracing::trace!(prefix = decoder.prefix(), "decoding prefixed value");
        let bytes = decoder.decode(payload)?;

        match self.policy {
            DecodePolicy::ErrorAsValue => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            DecodePolicy::Strict => String::from_utf8(bytes)
                .map_err(|e| format!("decoded value is not valid UTF-8: {e}")),
        }
    }
}
