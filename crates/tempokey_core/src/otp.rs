//! RFC 6238 (TOTP) code generation on top of RFC 4226 (HOTP).

use std::fmt;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::accounts::Account;
use crate::error::Error;

/// Hash algorithm driving the HMAC computation.
///
/// This is a closed set: an algorithm name outside of it fails secrets
/// parsing with [`Error::UnsupportedAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Algorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::Sha1
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha1 => write!(f, "SHA1"),
            Self::Sha256 => write!(f, "SHA256"),
            Self::Sha512 => write!(f, "SHA512"),
        }
    }
}

impl Algorithm {
    /// Parse a case-insensitive algorithm name ("sha1", "SHA-256", ...).
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.to_ascii_uppercase().as_str() {
            "SHA1" | "SHA-1" => Ok(Self::Sha1),
            "SHA256" | "SHA-256" => Ok(Self::Sha256),
            "SHA512" | "SHA-512" => Ok(Self::Sha512),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> {
        Algorithm::parse(&s)
    }
}

/// A freshly computed one-time code for a single account.
#[derive(Debug, Clone, Serialize)]
pub struct TotpCode {
    /// Zero-padded code, `digits` characters long.
    pub code: String,
    /// Seconds until the code rotates, in `(0, period]`.
    pub remaining: f64,
    /// The account's period, carried along for rendering.
    pub period: u64,
}

/// Decode a base-32 secret. Case-insensitive; spaces, dashes, and missing
/// padding are tolerated.
pub fn decode_secret(secret: &str) -> Option<Vec<u8>> {
    let cleaned = secret.replace([' ', '-'], "").to_uppercase();
    let padded = pad_base32(&cleaned);
    base32::decode(base32::Alphabet::Rfc4648 { padding: true }, &padded)
        .or_else(|| base32::decode(base32::Alphabet::Rfc4648 { padding: false }, &cleaned))
}

/// Encode raw bytes as base-32 (uppercase, unpadded).
pub fn encode_secret(bytes: &[u8]) -> String {
    base32::encode(base32::Alphabet::Rfc4648 { padding: false }, bytes)
}

fn pad_base32(s: &str) -> String {
    match s.len() % 8 {
        0 => s.to_string(),
        r => format!("{}{}", s, "=".repeat(8 - r)),
    }
}

/// Compute an HOTP code for raw key bytes and a counter (RFC 4226 §5.3).
pub fn hotp(key: &[u8], counter: u64, digits: u32, algorithm: Algorithm) -> String {
    let mac = compute_hmac(key, &counter.to_be_bytes(), algorithm);
    truncate(&mac, digits)
}

fn compute_hmac(key: &[u8], data: &[u8], algorithm: Algorithm) -> Vec<u8> {
    match algorithm {
        Algorithm::Sha1 => {
            let mut mac = Hmac::<Sha1>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Sha256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Sha512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
    }
}

/// Dynamic truncation per RFC 4226 §5.3.
fn truncate(mac: &[u8], digits: u32) -> String {
    let offset = (mac[mac.len() - 1] & 0x0f) as usize;
    let binary = ((mac[offset] as u32 & 0x7f) << 24)
        | ((mac[offset + 1] as u32) << 16)
        | ((mac[offset + 2] as u32) << 8)
        | (mac[offset + 3] as u32);
    let code = binary % 10u32.pow(digits);
    format!("{:0>width$}", code, width = digits as usize)
}

/// The TOTP counter for a given unix timestamp: `floor(t / period)`.
pub fn time_step_at(unix_seconds: f64, period: u64) -> u64 {
    unix_seconds as u64 / period
}

/// Seconds until the current time step expires, in `(0, period]`.
pub fn seconds_remaining_at(unix_seconds: f64, period: u64) -> f64 {
    let p = period as f64;
    p - (unix_seconds % p)
}

/// Current unix time as fractional seconds.
pub fn unix_time_now() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Compute the code for a TOTP account at an explicit timestamp.
pub fn code_at(account: &Account, unix_seconds: f64) -> Result<TotpCode, Error> {
    let key = decode_secret(&account.secret)
        .ok_or_else(|| Error::InvalidSecret(account.label.clone()))?;
    let step = time_step_at(unix_seconds, account.period);
    let code = hotp(&key, step, account.digits, account.algorithm);
    Ok(TotpCode {
        code,
        remaining: seconds_remaining_at(unix_seconds, account.period),
        period: account.period,
    })
}

/// Compute the code for a TOTP account at the current wall-clock time.
pub fn current_code(account: &Account) -> Result<TotpCode, Error> {
    code_at(account, unix_time_now())
}
