use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempokey_core::accounts::{self, Account};
use tempokey_core::Error;

/// Default secrets location: `secrets.toml` in the user config directory.
pub fn default_secrets_path() -> PathBuf {
    ProjectDirs::from("com", "tempokey", "tempokey")
        .map(|d| d.config_dir().join("secrets.toml"))
        .unwrap_or_else(|| PathBuf::from("secrets.toml"))
}

/// Read and parse the secrets file. Called once at startup; the account
/// list is immutable afterwards.
pub fn load_accounts(path: Option<&Path>) -> Result<Vec<Account>, Error> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_secrets_path);
    if !path.is_file() {
        return Err(Error::SecretsNotFound(path));
    }
    let text = std::fs::read_to_string(&path)?;
    accounts::parse_secrets(&text)
}
