//! Password-protected vaults of environment variables.
//!
//! A vault is read either from a file or from a string (exactly one of the
//! two), decrypted with a password, and its pairs written into an
//! [`EnvSource`], replacing any existing values.
//!
//! # Format
//!
//! [`PasswordVault`] stores `envkit-vault-v1:` followed by unpadded URL-safe
//! base64 of `salt (16) || tag (32) || ciphertext`:
//!
//! - keys: 64 bytes of PBKDF2-HMAC-SHA256 over the password and salt with
//!   [`KEY_ROUNDS`] iterations, split into a cipher key and a MAC key;
//! - ciphertext: the JSON object of pairs XOR-ed with SHA-256 keystream blocks
//!   of `cipher key || block counter (u64, big-endian)`;
//! - tag: HMAC-SHA256 under the MAC key over `salt || ciphertext`, verified
//!   before decrypting.

use std::collections::BTreeMap;
use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::EnvError;
use crate::file;
use crate::source::{EnvSource, ProcessEnv};

/// Text every [`PasswordVault`] payload starts with.
pub const VAULT_HEADER: &str = "envkit-vault-v1:";

/// PBKDF2 iterations used to stretch the password.
pub const KEY_ROUNDS: u32 = 10_000;

const SALT_LEN: usize = 16;
const TAG_LEN: usize = 32;
const KEY_LEN: usize = 32;

type HmacSha256 = Hmac<Sha256>;

/// Where to read a vault from and how to open it.
#[derive(Debug, Clone, Default)]
pub struct VaultOptions {
    pub password: String,
    pub file_path: Option<PathBuf>,
    pub content: Option<String>,
}

impl VaultOptions {
    pub fn from_file(password: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            password: password.to_string(),
            file_path: Some(path.into()),
            content: None,
        }
    }

    pub fn from_content(password: &str, content: &str) -> Self {
        Self {
            password: password.to_string(),
            file_path: None,
            content: Some(content.to_string()),
        }
    }

    /// Check the password and source rules and read the vault text.
    ///
    /// Empty paths and empty content count as not given.
    fn read(&self) -> Result<String, EnvError> {
        if self.password.is_empty() {
            return Err(EnvError::VaultPasswordRequired);
        }

        let file_path = self
            .file_path
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty());
        let content = self.content.as_deref().filter(|c| !c.is_empty());

        match (file_path, content) {
            (None, None) => Err(EnvError::VaultSourceRequired),
            (Some(_), Some(_)) => Err(EnvError::VaultSourceConflict),
            (None, Some(content)) => Ok(content.to_string()),
            (Some(path), None) => {
                if !file::file_exists(path) {
                    return Err(EnvError::VaultFileNotFound(path.clone()));
                }
                std::fs::read_to_string(path).map_err(|e| EnvError::Io {
                    path: path.clone(),
                    source: e,
                })
            }
        }
    }
}

/// Decrypts vault text into pairs.
pub trait VaultCipher {
    fn open(&self, password: &str, content: &str) -> Result<BTreeMap<String, String>, EnvError>;
}

/// The built-in vault format. See the [module docs](self).
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordVault;

impl PasswordVault {
    /// Encrypt `pairs` under `password` with a fresh random salt.
    pub fn seal(
        &self,
        password: &str,
        pairs: &BTreeMap<String, String>,
    ) -> Result<String, EnvError> {
        if password.is_empty() {
            return Err(EnvError::VaultPasswordRequired);
        }

        let mut data =
            serde_json::to_vec(pairs).map_err(|e| EnvError::VaultFormat(e.to_string()))?;
        let salt: [u8; SALT_LEN] = rand::random();
        let keys = derive_keys(password, &salt);
        let (cipher_key, mac_key) = keys.split_at(KEY_LEN);
        apply_keystream(cipher_key, &mut data);
        let tag = authenticator(mac_key, &salt, &data)?.finalize().into_bytes();

        let mut out = Vec::with_capacity(SALT_LEN + TAG_LEN + data.len());
        out.extend_from_slice(&salt);
        out.extend_from_slice(&tag);
        out.extend_from_slice(&data);
        Ok(format!("{VAULT_HEADER}{}", URL_SAFE_NO_PAD.encode(out)))
    }
}

impl VaultCipher for PasswordVault {
    fn open(&self, password: &str, content: &str) -> Result<BTreeMap<String, String>, EnvError> {
        let body = content
            .trim()
            .strip_prefix(VAULT_HEADER)
            .ok_or_else(|| EnvError::VaultFormat("missing vault header".into()))?;
        let raw = URL_SAFE_NO_PAD
            .decode(body)
            .map_err(|e| EnvError::VaultFormat(e.to_string()))?;
        if raw.len() < SALT_LEN + TAG_LEN {
            return Err(EnvError::VaultFormat("vault is truncated".into()));
        }

        let (salt, rest) = raw.split_at(SALT_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);
        let keys = derive_keys(password, salt);
        let (cipher_key, mac_key) = keys.split_at(KEY_LEN);
        authenticator(mac_key, salt, ciphertext)?
            .verify_slice(tag)
            .map_err(|_| EnvError::VaultDecrypt)?;

        let mut data = ciphertext.to_vec();
        apply_keystream(cipher_key, &mut data);
        serde_json::from_slice(&data).map_err(|e| EnvError::VaultFormat(e.to_string()))
    }
}

fn derive_keys(password: &str, salt: &[u8]) -> [u8; 2 * KEY_LEN] {
    let mut keys = [0u8; 2 * KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, KEY_ROUNDS, &mut keys);
    keys
}

fn apply_keystream(key: &[u8], data: &mut [u8]) {
    for (counter, chunk) in data.chunks_mut(32).enumerate() {
        let block = Sha256::new()
            .chain_update(key)
            .chain_update((counter as u64).to_be_bytes())
            .finalize();
        for (byte, k) in chunk.iter_mut().zip(block.iter()) {
            *byte ^= k;
        }
    }
}

fn authenticator(mac_key: &[u8], salt: &[u8], ciphertext: &[u8]) -> Result<HmacSha256, EnvError> {
    let mut mac = HmacSha256::new_from_slice(mac_key)
        .map_err(|e| EnvError::VaultFormat(e.to_string()))?;
    mac.update(salt);
    mac.update(ciphertext);
    Ok(mac)
}

/// Validate `options`, read the vault and decrypt it with [`PasswordVault`].
pub fn load_vault_keys(options: &VaultOptions) -> Result<BTreeMap<String, String>, EnvError> {
    load_vault_keys_with(options, &PasswordVault)
}

/// Like [`load_vault_keys`] with a caller-supplied cipher.
pub fn load_vault_keys_with(
    options: &VaultOptions,
    cipher: &dyn VaultCipher,
) -> Result<BTreeMap<String, String>, EnvError> {
    let content = options.read()?;
    cipher.open(&options.password, &content)
}

/// Decrypt a vault and write every pair into `target`. Returns the count written.
pub fn load_vault_into<S: EnvSource + ?Sized>(
    target: &S,
    options: &VaultOptions,
) -> Result<usize, EnvError> {
    let keys = load_vault_keys(options)?;
    for (key, value) in &keys {
        target.set_var(key, value);
    }
    tracing::debug!(injected = keys.len(), "loaded vault");
    Ok(keys.len())
}

/// Decrypt a vault into the process environment.
pub fn load_vault(options: &VaultOptions) -> Result<usize, EnvError> {
    load_vault_into(&ProcessEnv, options)
}
