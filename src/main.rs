use anyhow::{anyhow, Result};
use is_terminal::IsTerminal;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordhoard::{word_store, Config, InMemoryWordStore, SharedConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let mut args = std::env::args();
    let program_name = args.next().unwrap_or("wordhoard".to_string());
    let config_file = args.next();
    if args.next().is_some() {
        return Err(anyhow!("usage: {program_name} [/path/to/config.json]"));
    }

    let config = config_init(config_file)?;

    let words = config.seed.words();
    tracing::info!("seeded word list with {} words", words.len());
    let word_store = word_store::shared(InMemoryWordStore::new(words));

    tracing::info!(
        "API listening on {} ({:?} indexing, append {})",
        &config.bind_addr,
        config.index_policy,
        if config.allow_append { "enabled" } else { "disabled" },
    );
    wordhoard::api::new(config, word_store, shutdown_signal()).await?;

    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordhoard=info,tower_http=info".into()),
        )
        .init();
}

fn config_init(config_file: Option<String>) -> Result<SharedConfig> {
    match config_file {
        None => {
            tracing::debug!("no config file given, using defaults");
            Ok(Arc::new(Config::default()))
        }
        Some(config_file) => {
            let config = Config::try_from_file(&config_file)?;
            tracing::debug!("loaded config from {config_file}");
            Ok(Arc::new(config))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("unable to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("quitting from signal");
}
