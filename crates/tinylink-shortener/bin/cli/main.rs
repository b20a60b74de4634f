mod cli;

use crate::cli::{Command, CLI};
use anyhow::{bail, Context};
use clap::Parser;
use tinylink_generator::RandomGenerator;
use tinylink_shortener::{ShortenParams, Shortener, ShortenerService, ShortenerSettings};
use tinylink_storage::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CLI::parse();

    info!(
        store = %config.store.display(),
        link_style = %config.link_style,
        "starting tinylink"
    );

    let settings = ShortenerSettings::builder()
        .link_style(config.link_style())
        .build();
    let service = ShortenerService::new(
        FileStore::new(&config.store),
        RandomGenerator::new(),
        settings,
    );

    match config.command {
        Command::Shorten { url, alias } => {
            let params = ShortenParams {
                original_url: url,
                custom_alias: alias,
            };
            let shortened = service.shorten(params)?;

            println!("{}", shortened.short_url);
            if shortened.reused {
                eprintln!("Already shortened earlier, reusing its code");
            }
            eprintln!("{}", shortened.report);
        }
        Command::Resolve { link } => {
            let Some(entry) = service.resolve_link(&link) else {
                bail!("no stored link matches '{}'", link);
            };
            println!("{}", entry.original_url);
        }
        Command::History => {
            let history = service.history();
            if history.is_empty() {
                println!("No shortened URLs yet.");
            }
            for entry in history {
                println!(
                    "{}  {}  {}",
                    entry.created_at,
                    entry.display_link(),
                    entry.original_url
                );
            }
        }
        Command::Clear => {
            let removed = service
                .clear_history()
                .with_context(|| format!("clearing {}", config.store.display()))?;
            if removed {
                println!("History cleared.");
            } else {
                println!("History was already empty.");
            }
        }
    }

    Ok(())
}
