use eyre::{Result, eyre};
use tracing::{info, warn};

use stride_insight::client::InsightClient;
use stride_insight::config::{ENV_API_KEY, InsightConfig};

/// Diagnostics: load configuration, list models, and probe the service.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    stride_app::telemetry::init(std::env::var("STRIDE_LOG_JSON").is_ok());

    let config = InsightConfig::from_env()?;
    info!(config = ?config.summary(), "insight configuration loaded");
    if !config.has_credential() {
        return Err(eyre!("{ENV_API_KEY} is not set"));
    }

    let client = InsightClient::new(config);
    let (models, connected) =
        tokio::task::spawn_blocking(move || (client.list_models(), client.test_connection()))
            .await?;

    match models {
        Ok(models) => {
            for model in &models {
                info!(model = %model, "available model");
            }
        }
        Err(e) => warn!(error = %e, "could not list models"),
    }

    if !connected {
        return Err(eyre!("connection probe failed"));
    }
    info!("connection probe succeeded");
    Ok(())
}
