//! wordbank CLI - interactive vocabulary menu

use std::io;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use wordbank::{Config, Menu, VocabularyStore};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordbank=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    let store = VocabularyStore::open(&config.db_path)
        .with_context(|| format!("failed to open word store {}", config.db_path.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&store, &config, stdin.lock(), stdout.lock()).run()?;

    store.close()?;
    Ok(())
}
