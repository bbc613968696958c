use std::path::PathBuf;

use anyhow::{Context, Result};

use secret_scan::SecretScanner;
use toolwarden_core::config::{Config, ConfigPaths};

/// Post-action scan. Informational only: prints a summary and always
/// succeeds, whatever the findings.
pub fn execute(
    config_path: Option<PathBuf>,
    root: Option<PathBuf>,
    paths: Vec<PathBuf>,
) -> Result<()> {
    let resolved = ConfigPaths::resolve()?;
    let config_path = config_path.unwrap_or(resolved.config_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("load config at {}", config_path.display()))?;
    if !config.scanner.enabled {
        return Ok(());
    }

    let scanner = SecretScanner::from_config(&config.scanner).context("compile secret catalog")?;
    let result = if paths.is_empty() {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir().context("determine working directory")?,
        };
        scanner.scan_working_tree(&root)
    } else {
        scanner.scan(&paths)
    };

    println!("{}", result.summarize());
    Ok(())
}
