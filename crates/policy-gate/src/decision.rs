use serde::{Deserialize, Serialize};

/// The verdict produced by evaluating one Action against one RuleSet.
///
/// Invariant: `reason` and `rule` are present iff the outcome is Block,
/// and carry the message of the first matching Block rule in declaration
/// order. Warn-severity matches never affect the outcome; they are
/// recorded in `warnings` for the caller to surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub outcome: Outcome,
    pub rule: Option<String>,
    pub reason: Option<String>,
    #[serde(default)]
    pub warnings: Vec<RuleWarning>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Allow,
    Block,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleWarning {
    pub rule: String,
    pub reason: String,
}

impl Decision {
    pub fn allow(warnings: Vec<RuleWarning>) -> Self {
        Self {
            outcome: Outcome::Allow,
            rule: None,
            reason: None,
            warnings,
        }
    }

    pub fn block(rule: &str, reason: &str, warnings: Vec<RuleWarning>) -> Self {
        Self {
            outcome: Outcome::Block,
            rule: Some(rule.to_string()),
            reason: Some(reason.to_string()),
            warnings,
        }
    }

    pub fn is_block(&self) -> bool {
        self.outcome == Outcome::Block
    }
}
