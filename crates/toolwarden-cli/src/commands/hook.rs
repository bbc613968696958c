//! The two pre-action hook entry points.
//!
//! Startup (config load, rule compilation) errors propagate to the caller
//! and become a plain error exit — a broken rule catalog must fail loudly,
//! not quietly disable checks. Once the gate is built, any unexpected
//! error while producing a decision fails closed: the action is blocked
//! rather than waved through.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use policy_gate::{Outcome, PolicyGate};
use reporting::{AuditEvent, AuditLog};
use toolwarden_core::config::{Config, ConfigPaths};
use toolwarden_core::hook::HookInput;
use toolwarden_core::types::ActionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    Command,
    Write,
}

impl GateKind {
    fn action_kind(self) -> ActionKind {
        match self {
            GateKind::Command => ActionKind::ShellCommand,
            GateKind::Write => ActionKind::FileWrite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookVerdict {
    Allow,
    Block { reason: String },
}

pub fn execute(config_path: Option<PathBuf>, gate_kind: GateKind) -> Result<HookVerdict> {
    let paths = ConfigPaths::resolve()?;
    let config_path = config_path.unwrap_or(paths.config_path.clone());
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("load config at {}", config_path.display()))?;
    let gate = PolicyGate::from_config(&config).context("compile rule catalogs")?;
    let audit = config
        .audit
        .enabled
        .then(|| AuditLog::new(paths.audit_log_path.clone()));

    let mut raw = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut raw) {
        // Fail closed: a decision was requested and we cannot produce one.
        return Ok(HookVerdict::Block {
            reason: format!("internal gate error reading hook input: {err}"),
        });
    }

    Ok(decide(&gate, audit.as_ref(), gate_kind, &raw))
}

/// Pure decision step, shared with tests. Malformed or irrelevant input
/// fails open; only a matching Block rule produces a Block verdict.
pub fn decide(
    gate: &PolicyGate,
    audit: Option<&AuditLog>,
    gate_kind: GateKind,
    raw: &str,
) -> HookVerdict {
    let input = match HookInput::from_json(raw) {
        Ok(input) => input,
        Err(err) => {
            debug!(%err, "unparseable hook input, allowing");
            return HookVerdict::Allow;
        }
    };

    let Some(action) = input.action() else {
        debug!("no extractable action, allowing");
        return HookVerdict::Allow;
    };
    if action.kind() != gate_kind.action_kind() {
        debug!(kind = ?action.kind(), "action kind outside this gate, allowing");
        return HookVerdict::Allow;
    }

    let decision = gate.evaluate(&action);
    for warning in &decision.warnings {
        eprintln!("toolwarden warning [{}]: {}", warning.rule, warning.reason);
    }
    if let Some(audit) = audit {
        audit.append(&AuditEvent::from_decision(
            input.session_id.clone(),
            &action,
            &decision,
        ));
    }

    match decision.outcome {
        Outcome::Allow => HookVerdict::Allow,
        Outcome::Block => HookVerdict::Block {
            reason: decision
                .reason
                .unwrap_or_else(|| "blocked by policy".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> PolicyGate {
        PolicyGate::from_config(&Config::default_config()).unwrap()
    }

    fn decide_bash(raw: &str) -> HookVerdict {
        decide(&gate(), None, GateKind::Command, raw)
    }

    #[test]
    fn test_dangerous_command_blocks() {
        let verdict =
            decide_bash(r#"{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}"#);
        match verdict {
            HookVerdict::Block { reason } => assert!(reason.contains("never allowed")),
            HookVerdict::Allow => panic!("expected block"),
        }
    }

    #[test]
    fn test_ordinary_command_allows() {
        let verdict =
            decide_bash(r#"{"tool_name":"Bash","tool_input":{"command":"cargo build"}}"#);
        assert_eq!(verdict, HookVerdict::Allow);
    }

    #[test]
    fn test_malformed_json_fails_open() {
        assert_eq!(decide_bash("not json at all"), HookVerdict::Allow);
        assert_eq!(decide_bash(""), HookVerdict::Allow);
    }

    #[test]
    fn test_unknown_tool_fails_open() {
        let verdict =
            decide_bash(r#"{"tool_name":"WebSearch","tool_input":{"query":"rm -rf /"}}"#);
        assert_eq!(verdict, HookVerdict::Allow);
    }

    #[test]
    fn test_write_action_ignored_by_command_gate() {
        let raw = r#"{"tool_name":"Write","tool_input":{"file_path":".env"}}"#;
        assert_eq!(decide_bash(raw), HookVerdict::Allow);
        match decide(&gate(), None, GateKind::Write, raw) {
            HookVerdict::Block { reason } => assert!(reason.contains(".env files")),
            HookVerdict::Allow => panic!("expected block"),
        }
    }
}
