use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("environment variable '{key}' not found")]
    NotFound { key: String },

    #[error("environment variable '{key}' with value '{value}' cannot be parsed as {expected}")]
    Parse {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("environment variable '{key}' could not be decoded: {reason}")]
    Decode { key: String, reason: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[cfg(feature = "dotenv")]
    #[error("Failed to parse {path}: {source}")]
    DotEnv {
        path: PathBuf,
        source: dotenvy::Error,
    },

    #[error("Vault password is required")]
    VaultPasswordRequired,

    #[error("Vault file path or vault content is required")]
    VaultSourceRequired,

    #[error("Vault file path and vault content are mutually exclusive")]
    VaultSourceConflict,

    #[error("Vault file not found: {0}")]
    VaultFileNotFound(PathBuf),

    #[error("Malformed vault: {0}")]
    VaultFormat(String),

    #[error("Vault could not be decrypted (wrong password or corrupted content)")]
    VaultDecrypt,

    #[error("Settings error: {0}")]
    Settings(#[from] confique::Error),

    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),
}

impl EnvError {
    /// True when the key was absent or resolved to an empty string.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EnvError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats() {
        let err = EnvError::NotFound {
            key: "DATABASE_URL".into(),
        };
        assert_eq!(
            err.to_string(),
            "environment variable 'DATABASE_URL' not found"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn parse_error_formats() {
        let err = EnvError::Parse {
            key: "FLAG".into(),
            value: "maybe".into(),
            expected: "a boolean",
        };
        let msg = err.to_string();
        assert!(msg.contains("FLAG"));
        assert!(msg.contains("maybe"));
        assert!(msg.ends_with("cannot be parsed as a boolean"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn vault_file_not_found_formats() {
        let err = EnvError::VaultFileNotFound("/etc/app/.vault".into());
        assert!(err.to_string().contains("/etc/app/.vault"));
    }
}
