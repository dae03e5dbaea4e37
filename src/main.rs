use std::{env, path::PathBuf};

use analyzer::{AppConfig, config::ENV_CONFIG};
use anyhow::{Context, Result};
use log::info;
use web::{App, Background, Server};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os(ENV_CONFIG).map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref()).context("loading configuration")?;

    let analyzer = analyzer::open(&config).context("loading the regression model")?;
    let background = Background::load(&config.background_path)
        .context("loading the background image")?;
    let app = App::new(analyzer, background, config.download_name.clone());

    let server = Server::bind(config.addr(), app)
        .await
        .with_context(|| format!("binding {}", config.addr()))?;
    info!("serving on http://{}", server.local_addr()?);

    server.run().await?;
    Ok(())
}
