//! Reversible obfuscation for values stored behind the `obfuscated:` prefix.
//!
//! This hides secrets from casual inspection (shell history, `ps e`, CI logs).
//! It is not encryption: anyone with this crate can reverse it. Use a vault
//! for real secrets.
//!
//! Encoding: every byte is XOR-ed with a fixed 32-byte mask, the result is
//! reversed, then written as unpadded URL-safe base64.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

const MASK: &[u8; 32] = b"envkit/obfuscation/mask/00000001";

/// Obfuscate `plain` into printable text.
pub fn obfuscate(plain: &[u8]) -> String {
    let mut bytes = mask(plain);
    bytes.reverse();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Reverse [`obfuscate`]. The error is the decoder's message.
pub fn deobfuscate(text: &str) -> Result<Vec<u8>, String> {
    let mut bytes = URL_SAFE_NO_PAD
        .decode(text.trim_end_matches('='))
        .map_err(|e| e.to_string())?;
    bytes.reverse();
    Ok(mask(&bytes))
}

fn mask(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .zip(MASK.iter().cycle())
        .map(|(b, m)| b ^ m)
        .collect()
}
