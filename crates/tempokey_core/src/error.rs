use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("secrets file not found: {0}")]
    SecretsNotFound(PathBuf),

    #[error("failed to parse secrets file: {0}")]
    SecretsParse(String),

    #[error("account '{0}' has an invalid base-32 secret")]
    InvalidSecret(String),

    #[error("unsupported algorithm '{0}' (supported: SHA1, SHA256, SHA512)")]
    UnsupportedAlgorithm(String),

    #[error("account '{label}' has invalid digit count {digits} (expected 1 to 9)")]
    InvalidDigits { label: String, digits: u32 },

    #[error("account '{label}' has invalid period {period} (must be positive)")]
    InvalidPeriod { label: String, period: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_string() {
        let err: Error = String::from("test error").into();
        if let Error::Other(msg) = err {
            assert_eq!(msg, "test error");
        } else {
            panic!("Expected Error::Other");
        }
    }

    #[test]
    fn test_error_from_str() {
        let err: Error = "test error".into();
        if let Error::Other(msg) = err {
            assert_eq!(msg, "test error");
        } else {
            panic!("Expected Error::Other");
        }
    }

    #[test]
    fn test_error_display_variants() {
        assert_eq!(
            Error::SecretsNotFound(PathBuf::from("/home/u/secrets.toml")).to_string(),
            "secrets file not found: /home/u/secrets.toml"
        );
        assert_eq!(
            Error::InvalidSecret("work".to_string()).to_string(),
            "account 'work' has an invalid base-32 secret"
        );
        assert_eq!(
            Error::UnsupportedAlgorithm("MD5".to_string()).to_string(),
            "unsupported algorithm 'MD5' (supported: SHA1, SHA256, SHA512)"
        );
        assert_eq!(
            Error::InvalidDigits {
                label: "work".to_string(),
                digits: 12
            }
            .to_string(),
            "account 'work' has invalid digit count 12 (expected 1 to 9)"
        );
        assert_eq!(
            Error::InvalidPeriod {
                label: "work".to_string(),
                period: 0
            }
            .to_string(),
            "account 'work' has invalid period 0 (must be positive)"
        );
    }
}
