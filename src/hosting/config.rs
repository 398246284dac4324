use clap::Parser;
use std::time::Duration;

/// Runtime settings for the hosting binary.
/// Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "hosting", about = "Heads-up high-card matchmaking server")]
pub struct Config {
    /// Address the HTTP and WebSocket listener binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:80")]
    pub bind: String,
    /// PostgreSQL connection string. Without one, settlements stay in memory.
    #[arg(long, env = "DB_URL")]
    pub db_url: Option<String>,
    /// Pause before the next deal or exit notification, in milliseconds.
    #[arg(long, env = "DEAL_DELAY_MS", default_value_t = crate::DEAL_DELAY.as_millis() as u64)]
    pub delay_ms: u64,
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
}

impl Config {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
