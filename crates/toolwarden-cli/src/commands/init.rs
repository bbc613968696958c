use std::path::PathBuf;

use anyhow::{bail, Result};

use toolwarden_core::config::{Config, ConfigPaths};

pub fn execute(path: Option<PathBuf>, force: bool) -> Result<()> {
    let paths = ConfigPaths::resolve()?;
    let config_path = path.unwrap_or(paths.config_path);
    if config_path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default_config().save(&config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
