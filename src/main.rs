//! Ticketdesk - a terminal client for event-ticket orders.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use ticketdesk::i18n::Locale;
use ticketdesk::{App, Config};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Manage your event-ticket orders from the terminal")]
struct Cli {
    /// Configuration file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Booking API base URL, overriding the configuration.
    #[arg(long)]
    base_url: Option<String>,
    /// Display language.
    #[arg(long, value_enum)]
    locale: Option<Locale>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns stdout, so logs go to a rolling file
    let _guard = init_logging()?;

    let mut config = Config::load(cli.config).context("loading configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(locale) = cli.locale {
        config.ui.locale = locale;
    }

    let mut app = App::new(config).context("starting terminal UI")?;
    app.run().await?;

    Ok(())
}

fn init_logging() -> anyhow::Result<WorkerGuard> {
    let log_dir = ticketdesk::config::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, "ticketdesk.log"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticketdesk=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(guard)
}
