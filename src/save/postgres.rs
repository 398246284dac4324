use super::store::Store;
use crate::Chips;
use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;

/// Table holding one row per registered player.
#[rustfmt::skip]
pub const PLAYERS: &str = "players";

/// Establishes a database connection.
///
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
/// The connection driver is spawned onto the current runtime.
pub async fn db(url: &str) -> anyhow::Result<Arc<Client>> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .context("database connection failed")?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .context("set client_min_messages")?;
    Ok(Arc::new(client))
}

#[async_trait::async_trait]
impl Store for Client {
    async fn update_chips(&self, name: &str, stack: Chips) -> anyhow::Result<()> {
        let rows = self
            .execute(
                const_format::concatcp!(
                    "UPDATE ",
                    PLAYERS,
                    " SET chip_count = $1::BIGINT WHERE name = $2"
                ),
                &[&stack, &name],
            )
            .await
            .with_context(|| format!("update chips for {}", name))?;
        match rows {
            0 => Err(anyhow::anyhow!("no player named {}", name)),
            _ => Ok(()),
        }
    }
}
