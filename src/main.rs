use anyhow::Result;
use tracing::info;

use sesgo::config::AppConfig;
use sesgo::logging::configure_logging;
use sesgo::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    configure_logging();

    let config = AppConfig::from_env()?;
    info!("Starting bias analyzer with model {}", config.model);

    server::serve(config).await
}
