use std::path::PathBuf;

use anyhow::{Context, Result};

use reporting::{AuditLog, ReportStats};
use toolwarden_core::config::{Config, ConfigPaths};

pub fn execute(config_path: Option<PathBuf>, stats: bool) -> Result<()> {
    let paths = ConfigPaths::resolve()?;
    let config_path = config_path.unwrap_or(paths.config_path.clone());
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("load config at {}", config_path.display()))?;
    let output = config.to_toml_string()?;
    println!("{}", output);

    if stats {
        let log = AuditLog::new(paths.audit_log_path);
        let stats = ReportStats::from_events(&log.read_events());
        println!("{}", stats.human_summary());
    }
    Ok(())
}
