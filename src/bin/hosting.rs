//! Hosting server binary.
//!
//! Accepts WebSocket connections, pairs players into heads-up matches,
//! and writes final stacks to PostgreSQL (or memory when no database is set).

use clap::Parser;
use highcard::gameroom::Realtime;
use highcard::hosting::*;
use highcard::save::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    highcard::log();
    highcard::kys();
    let config = Config::parse();
    let store: Arc<dyn Store> = match config.db_url.as_deref() {
        Some(url) => db(url).await?,
        None => {
            log::warn!("no database configured, settlements kept in memory");
            Arc::new(Vault::default())
        }
    };
    let casino = Arc::new(Casino::new(store, Arc::new(Realtime), config.delay()));
    Server::run(config, casino).await?;
    Ok(())
}
