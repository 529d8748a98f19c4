//! Account model and secrets-file parsing.
//!
//! The secrets file is TOML with a top-level `[[accounts]]` array. All
//! fields are required; a missing or mistyped field fails the parse. The
//! `accounts` key itself may be absent (zero accounts).

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::otp::{self, Algorithm};

/// The OTP scheme an account uses. Only TOTP is supported; anything else
/// parses as `Unknown` and is skipped by the renderer rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    #[serde(rename = "TOTP")]
    Totp,
    #[serde(other)]
    Unknown,
}

/// A single account entry, immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub secret: String,
    pub issuer: String,
    pub label: String,
    pub digits: u32,
    pub algorithm: Algorithm,
    pub period: u64,
}

impl Account {
    /// Display name: "Issuer (label)", or just the label when the issuer
    /// is empty.
    pub fn display_name(&self) -> String {
        if self.issuer.is_empty() {
            self.label.clone()
        } else {
            format!("{} ({})", self.issuer, self.label)
        }
    }

    /// Check the invariants the code computation relies on. Accounts of
    /// unknown kind are never computed, so they are not validated.
    pub fn validate(&self) -> Result<(), Error> {
        if self.kind != AccountKind::Totp {
            return Ok(());
        }
        if self.period == 0 {
            return Err(Error::InvalidPeriod {
                label: self.label.clone(),
                period: self.period,
            });
        }
        if self.digits == 0 || self.digits > 9 {
            return Err(Error::InvalidDigits {
                label: self.label.clone(),
                digits: self.digits,
            });
        }
        match otp::decode_secret(&self.secret) {
            Some(key) if !key.is_empty() => Ok(()),
            _ => Err(Error::InvalidSecret(self.label.clone())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    #[serde(default)]
    accounts: Vec<Account>,
}

/// Parse the secrets file text into validated accounts.
pub fn parse_secrets(text: &str) -> Result<Vec<Account>, Error> {
    let file: SecretsFile =
        toml::from_str(text).map_err(|e| Error::SecretsParse(e.to_string()))?;
    for account in &file.accounts {
        account.validate()?;
    }
    tracing::debug!(count = file.accounts.len(), "parsed secrets file");
    Ok(file.accounts)
}
