use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::commands::hook::HookVerdict;
use policy_gate::{Outcome, PolicyGate};
use toolwarden_core::config::{Config, ConfigPaths};
use toolwarden_core::types::Action;

/// Ad hoc rule testing without the hook transport. The verdict still maps
/// to the hook exit codes so scripts can assert on it.
pub fn execute(
    config_path: Option<PathBuf>,
    command: Option<String>,
    path: Option<PathBuf>,
) -> Result<HookVerdict> {
    let action = match (command, path) {
        (Some(command), None) => Action::ShellCommand { command },
        (None, Some(path)) => Action::FileWrite {
            path,
            content: None,
        },
        _ => bail!("pass exactly one of --command or --path"),
    };

    let paths = ConfigPaths::resolve()?;
    let config_path = config_path.unwrap_or(paths.config_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("load config at {}", config_path.display()))?;
    let gate = PolicyGate::from_config(&config).context("compile rule catalogs")?;

    let decision = gate.evaluate(&action);
    for warning in &decision.warnings {
        println!("warn [{}]: {}", warning.rule, warning.reason);
    }
    match decision.outcome {
        Outcome::Allow => {
            println!("allow");
            Ok(HookVerdict::Allow)
        }
        Outcome::Block => {
            let reason = decision
                .reason
                .unwrap_or_else(|| "blocked by policy".to_string());
            println!(
                "block [{}]: {reason}",
                decision.rule.as_deref().unwrap_or("unknown")
            );
            Ok(HookVerdict::Block { reason })
        }
    }
}
