use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub gates: GateConfig,
    pub rules: RuleConfig,
    pub scanner: ScannerConfig,
    pub audit: AuditConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    pub pre_command: bool,
    pub pre_write: bool,
}

/// User-supplied rule extras, appended after the built-in catalogs.
///
/// The built-in catalogs are compiled into the gate; this section is the
/// extension point for site-specific patterns. Entries are validated at
/// startup and an invalid regex aborts initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub extra_command_rules: Vec<ExtraRule>,
    #[serde(default)]
    pub extra_write_rules: Vec<ExtraRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraRule {
    pub name: String,
    pub pattern: String,
    pub reason: String,
    #[serde(default)]
    pub severity: RuleSeverity,
    #[serde(default)]
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    #[default]
    Block,
    Warn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub enabled: bool,
    /// Extensions skipped in addition to the built-in binary/generated set.
    #[serde(default)]
    pub extra_skip_extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub audit_log_path: PathBuf,
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            gates: GateConfig {
                pre_command: true,
                pre_write: true,
            },
            rules: RuleConfig::default(),
            scanner: ScannerConfig {
                enabled: true,
                extra_skip_extensions: Vec::new(),
            },
            audit: AuditConfig { enabled: true },
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("parse config TOML")?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let output = toml::to_string_pretty(self).context("render config TOML")?;
        Ok(output)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Loads the config at `path`, falling back to defaults when the file
    /// does not exist. Hooks must work out of the box on a machine that
    /// never ran `toolwarden init`; a present-but-broken config is still a
    /// loud startup error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let contents = self.to_toml_string()?;
        fs::write(path, contents).with_context(|| format!("write config at {}", path.display()))?;
        Ok(())
    }
}

impl ConfigPaths {
    pub fn resolve() -> Result<Self> {
        let project_dirs = ProjectDirs::from("io", "toolwarden", "toolwarden")
            .ok_or_else(|| anyhow::anyhow!("unable to determine project directories"))?;
        let config_dir = project_dirs.config_dir();
        let data_dir = project_dirs.data_dir();
        Ok(Self {
            config_path: config_dir.join("config.toml"),
            data_dir: data_dir.to_path_buf(),
            audit_log_path: data_dir.join("audit.jsonl"),
        })
    }
}
