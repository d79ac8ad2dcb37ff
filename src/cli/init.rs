//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

use starlog::config::Config;

/// Write a default config file (global location unless `path` is given)
pub fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    Config::with_defaults().save_to_file(&config_path)?;
    info!("Created configuration file: {}", config_path.display());
    println!("Configuration written to {}", config_path.display());
    Ok(())
}
