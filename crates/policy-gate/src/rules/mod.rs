//! Guard rules and rule sets.
//!
//! A rule is a named pure predicate over one piece of action text (a shell
//! command line, or a file path). Rule sets are built once at process
//! start from the compiled-in catalogs plus any config extras, and are
//! never mutated afterwards. A pattern that fails to compile is a startup
//! configuration error, never a per-call one.

pub mod command;
pub mod file_write;

use anyhow::Result;
use regex::{Regex, RegexBuilder};

use toolwarden_core::config::{ExtraRule, RuleSeverity};
use toolwarden_core::error::ToolWardenError;
use toolwarden_core::types::ActionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Block,
    Warn,
}

impl From<RuleSeverity> for Severity {
    fn from(value: RuleSeverity) -> Self {
        match value {
            RuleSeverity::Block => Severity::Block,
            RuleSeverity::Warn => Severity::Warn,
        }
    }
}

/// Declarative source form of a rule, compiled into a [`GuardRule`].
#[derive(Debug, Clone)]
pub struct RuleSpec {
    pub name: &'static str,
    pub pattern: &'static str,
    pub reason: &'static str,
    pub case_insensitive: bool,
}

/// A single named predicate over action text.
#[derive(Debug)]
pub struct GuardRule {
    pub name: String,
    pub reason: String,
    pub severity: Severity,
    pattern: Regex,
}

impl GuardRule {
    fn compile(
        name: &str,
        pattern: &str,
        reason: &str,
        severity: Severity,
        case_insensitive: bool,
    ) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|err| ToolWardenError::InvalidPattern {
                name: name.to_string(),
                message: err.to_string(),
            })?;
        Ok(Self {
            name: name.to_string(),
            reason: reason.to_string(),
            severity,
            pattern,
        })
    }

    /// Pure, never errors. The empty string matches nothing.
    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.pattern.is_match(text)
    }
}

/// The fixed ordered rule list for one interception point.
///
/// Declaration order is significant only for which reason string wins when
/// several rules match the same action; the Allow/Block outcome itself is
/// order-independent.
#[derive(Debug)]
pub struct RuleSet {
    pub kind: ActionKind,
    rules: Vec<GuardRule>,
}

impl RuleSet {
    /// Built-in pre-command catalog plus config extras, in that order.
    pub fn pre_command(extras: &[ExtraRule]) -> Result<Self> {
        Self::compile(ActionKind::ShellCommand, command::catalog(), extras)
    }

    /// Built-in pre-write catalog plus config extras, in that order.
    pub fn pre_write(extras: &[ExtraRule]) -> Result<Self> {
        Self::compile(ActionKind::FileWrite, file_write::catalog(), extras)
    }

    fn compile(kind: ActionKind, specs: &[RuleSpec], extras: &[ExtraRule]) -> Result<Self> {
        let mut rules = Vec::with_capacity(specs.len() + extras.len());
        for spec in specs {
            rules.push(GuardRule::compile(
                spec.name,
                spec.pattern,
                spec.reason,
                Severity::Block,
                spec.case_insensitive,
            )?);
        }
        for extra in extras {
            rules.push(GuardRule::compile(
                &extra.name,
                &extra.pattern,
                &extra.reason,
                extra.severity.into(),
                extra.case_insensitive,
            )?);
        }
        Ok(Self { kind, rules })
    }

    pub fn rules(&self) -> &[GuardRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_compile() {
        let commands = RuleSet::pre_command(&[]).unwrap();
        assert_eq!(commands.kind, ActionKind::ShellCommand);
        assert!(commands.len() >= 7);

        let writes = RuleSet::pre_write(&[]).unwrap();
        assert_eq!(writes.kind, ActionKind::FileWrite);
        assert!(writes.len() >= 6);
    }

    #[test]
    fn test_extras_append_after_builtins() {
        let extra = ExtraRule {
            name: "no-sudo".to_string(),
            pattern: "^sudo ".to_string(),
            reason: "sudo is not allowed here".to_string(),
            severity: RuleSeverity::Block,
            case_insensitive: false,
        };
        let set = RuleSet::pre_command(std::slice::from_ref(&extra)).unwrap();
        let last = set.rules().last().unwrap();
        assert_eq!(last.name, "no-sudo");
        assert!(last.matches("sudo rm file"));
    }

    #[test]
    fn test_invalid_extra_pattern_is_startup_error() {
        let extra = ExtraRule {
            name: "broken".to_string(),
            pattern: "(unclosed".to_string(),
            reason: "broken".to_string(),
            severity: RuleSeverity::Block,
            case_insensitive: false,
        };
        let err = RuleSet::pre_command(std::slice::from_ref(&extra)).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_empty_input_never_matches() {
        let set = RuleSet::pre_command(&[]).unwrap();
        for rule in set.rules() {
            assert!(!rule.matches(""));
        }
    }
}
