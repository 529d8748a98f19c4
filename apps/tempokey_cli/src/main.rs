mod configuration;
mod render;
mod telemetry;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use console::Term;
use tempokey_core::accounts::Account;
use tempokey_core::otp;
use tracing::error;

/// Show the current one-time code for every TOTP account in the secrets file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Refresh the codes every second until interrupted
    #[arg(short, long, default_value = "false")]
    watch: bool,

    /// Path to the secrets file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let _guard = telemetry::init_subscriber("tempokey_cli", "info");

    let cli = Cli::parse();

    let accounts = match configuration::load_accounts(cli.config.as_deref()) {
        Ok(accounts) => accounts,
        Err(e) => {
            error!(?e, "failed to load secrets");
            return Err(e.into());
        }
    };

    if cli.watch {
        watch(&accounts).await?;
    } else {
        print!("{}", render::render_all(&accounts, otp::unix_time_now())?);
    }

    Ok(())
}

/// Clear the screen and re-render once a second until Ctrl-C, which is a
/// normal exit rather than an error.
async fn watch(accounts: &[Account]) -> anyhow::Result<()> {
    let term = Term::stdout();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            _ = ticker.tick() => {
                term.clear_screen()?;
                term.write_str(&render::render_all(accounts, otp::unix_time_now())?)?;
            }
        }
    }

    Ok(())
}
