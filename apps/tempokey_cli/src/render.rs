//! Terminal output: one colored block per TOTP account.

use console::style;
use tempokey_core::accounts::{Account, AccountKind};
use tempokey_core::otp::{self, TotpCode};
use tempokey_core::Error;
use tracing::debug;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Render all supported accounts at the given timestamp. Accounts of
/// unknown kind produce no output; zero accounts yield the empty string.
pub fn render_all(accounts: &[Account], unix_seconds: f64) -> Result<String, Error> {
    let mut out = String::new();
    for account in accounts {
        if account.kind != AccountKind::Totp {
            debug!(account = %account.display_name(), "skipping unsupported account type");
            continue;
        }
        let code = otp::code_at(account, unix_seconds)?;
        out.push_str(&render_account(account, &code));
    }
    Ok(out)
}

/// One account block: issuer + label, the code, and a progress bar with
/// `round(remaining)` filled cells out of `period`.
fn render_account(account: &Account, code: &TotpCode) -> String {
    let filled = (code.remaining.round() as u64).min(code.period) as usize;
    let rest = code.period as usize - filled;
    let bar = format!("|{}{}|", FILLED.repeat(filled), EMPTY.repeat(rest));
    format!(
        "\n{} {}\n{}\n{}\n",
        style(&account.issuer).cyan(),
        account.label,
        style(&code.code).green().bold(),
        style(bar).yellow(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempokey_core::otp::Algorithm;

    const SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

    fn account(kind: AccountKind) -> Account {
        Account {
            kind,
            secret: SECRET.to_string(),
            issuer: "GitHub".to_string(),
            label: "user@example.com".to_string(),
            digits: 6,
            algorithm: Algorithm::Sha1,
            period: 30,
        }
    }

    fn count(s: &str, cell: &str) -> usize {
        s.matches(cell).count()
    }

    #[test]
    fn test_render_known_code() {
        let out = render_all(&[account(AccountKind::Totp)], 59.0).unwrap();
        assert!(out.contains("GitHub"));
        assert!(out.contains("user@example.com"));
        // RFC 6238 step 1 with a 6-digit SHA-1 code.
        assert!(out.contains("287082"));
    }

    #[rstest]
    #[case(59.0, 1)] // remaining 1.0
    #[case(30.0, 30)] // rotation instant, bar full
    #[case(44.5, 16)] // remaining 15.5 rounds up
    #[case(59.6, 0)] // remaining 0.4 rounds down
    fn test_bar_filled_cells(#[case] t: f64, #[case] expected_filled: usize) {
        let out = render_all(&[account(AccountKind::Totp)], t).unwrap();
        assert_eq!(count(&out, FILLED), expected_filled);
        assert_eq!(count(&out, EMPTY), 30 - expected_filled);
    }

    #[test]
    fn test_bar_total_cells_equal_period() {
        for tenths in 0..600 {
            let t = tenths as f64 / 10.0;
            let out = render_all(&[account(AccountKind::Totp)], t).unwrap();
            assert_eq!(count(&out, FILLED) + count(&out, EMPTY), 30, "t={t}");
        }
    }

    #[test]
    fn test_unknown_kind_renders_nothing() {
        let out = render_all(&[account(AccountKind::Unknown)], 59.0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_accounts_render_empty() {
        assert!(render_all(&[], 59.0).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_secret_propagates() {
        let mut bad = account(AccountKind::Totp);
        bad.secret = "!!!".to_string();
        assert!(matches!(
            render_all(&[bad], 59.0),
            Err(Error::InvalidSecret(_))
        ));
    }
}
