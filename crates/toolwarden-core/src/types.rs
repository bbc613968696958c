use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A proposed tool operation submitted for policy evaluation.
///
/// Actions are built once per hook invocation, consumed by a single
/// gate evaluation, and discarded. They carry no identity beyond that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Action {
    ShellCommand { command: String },
    FileWrite {
        path: PathBuf,
        content: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    ShellCommand,
    FileWrite,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ShellCommand { .. } => ActionKind::ShellCommand,
            Action::FileWrite { .. } => ActionKind::FileWrite,
        }
    }

    /// Short one-line description for audit output.
    pub fn summary(&self) -> String {
        match self {
            Action::ShellCommand { command } => format!("bash: {}", truncate(command, 200)),
            Action::FileWrite { path, .. } => format!("write: {}", path.display()),
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}
