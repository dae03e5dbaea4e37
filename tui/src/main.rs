use std::{env, path::PathBuf};

use analyzer::{config::ENV_CONFIG, AppConfig};
use anyhow::{Context, Result};

mod app;
mod state;
mod ui;

fn main() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os(ENV_CONFIG).map(PathBuf::from));

    let config = AppConfig::load(config_path.as_deref()).context("failed to load configuration")?;
    let analyzer = analyzer::open(&config).context("failed to load the prediction model")?;

    app::run::run(analyzer, PathBuf::from(&config.download_name))
}
