mod decision;
pub mod rules;

use anyhow::Result;
use tracing::debug;

use toolwarden_core::config::Config;
use toolwarden_core::types::{Action, ActionKind};

pub use decision::{Decision, Outcome, RuleWarning};
pub use rules::{GuardRule, RuleSet, Severity};

/// Evaluates proposed actions against the fixed rule catalogs.
///
/// Built once at process start; evaluation is pure in-memory pattern
/// matching with no I/O and no retained state, so the same Action always
/// yields the same Decision.
#[derive(Debug)]
pub struct PolicyGate {
    command_rules: RuleSet,
    write_rules: RuleSet,
    pre_command_enabled: bool,
    pre_write_enabled: bool,
}

impl PolicyGate {
    /// Compiles both rule sets. A pattern that fails to compile (only
    /// possible via config extras) aborts construction.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            command_rules: RuleSet::pre_command(&config.rules.extra_command_rules)?,
            write_rules: RuleSet::pre_write(&config.rules.extra_write_rules)?,
            pre_command_enabled: config.gates.pre_command,
            pre_write_enabled: config.gates.pre_write,
        })
    }

    /// Evaluates one Action and produces exactly one Decision.
    ///
    /// Rules run in declaration order; the first matching Block rule
    /// short-circuits with its reason. Warn matches are collected and
    /// never block. An Action the relevant gate cannot inspect (disabled
    /// gate, empty payload) fails open to Allow.
    pub fn evaluate(&self, action: &Action) -> Decision {
        let (rule_set, enabled, text) = match action {
            Action::ShellCommand { command } => (
                &self.command_rules,
                self.pre_command_enabled,
                command.clone(),
            ),
            Action::FileWrite { path, .. } => (
                &self.write_rules,
                self.pre_write_enabled,
                path.to_string_lossy().into_owned(),
            ),
        };

        if !enabled {
            debug!(kind = ?action.kind(), "gate disabled, allowing");
            return Decision::allow(Vec::new());
        }
        if text.trim().is_empty() {
            debug!(kind = ?action.kind(), "no extractable input, allowing");
            return Decision::allow(Vec::new());
        }

        let mut warnings = Vec::new();
        for rule in rule_set.rules() {
            if !rule.matches(&text) {
                continue;
            }
            match rule.severity {
                Severity::Block => {
                    debug!(rule = %rule.name, "blocking");
                    return Decision::block(&rule.name, &rule.reason, warnings);
                }
                Severity::Warn => {
                    debug!(rule = %rule.name, "warning");
                    warnings.push(RuleWarning {
                        rule: rule.name.clone(),
                        reason: rule.reason.clone(),
                    });
                }
            }
        }
        Decision::allow(warnings)
    }

    pub fn rule_set(&self, kind: ActionKind) -> &RuleSet {
        match kind {
            ActionKind::ShellCommand => &self.command_rules,
            ActionKind::FileWrite => &self.write_rules,
        }
    }
}
