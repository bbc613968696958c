use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::Action;

/// The host runtime's hook payload, received as JSON on stdin.
///
/// Only the fields the gates inspect are modeled; everything else in the
/// payload is ignored. Missing or unknown fields are not an error — an
/// input the gate was never designed to inspect resolves to no Action,
/// and the dispatcher treats "no Action" as Allow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_input: Option<ToolInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub file_path: Option<PathBuf>,
    #[serde(default)]
    pub content: Option<String>,
}

impl HookInput {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("parse hook input JSON")
    }

    /// Extracts the proposed Action, if the payload describes one we gate.
    ///
    /// `Bash` maps to a shell-command action; the write/edit family maps to
    /// a file-write action on the target path. Anything else has no
    /// extractable Action and fails open.
    pub fn action(&self) -> Option<Action> {
        let tool_name = self.tool_name.as_deref()?;
        let input = self.tool_input.as_ref()?;
        match tool_name {
            "Bash" => {
                let command = input.command.clone()?;
                if command.trim().is_empty() {
                    return None;
                }
                Some(Action::ShellCommand { command })
            }
            "Write" | "Edit" | "MultiEdit" | "NotebookEdit" => {
                let path = input.file_path.clone()?;
                if path.as_os_str().is_empty() {
                    return None;
                }
                Some(Action::FileWrite {
                    path,
                    content: input.content.clone(),
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_payload() {
        let raw = r#"{"session_id":"s1","tool_name":"Bash","tool_input":{"command":"ls -la"}}"#;
        let input = HookInput::from_json(raw).unwrap();
        match input.action() {
            Some(Action::ShellCommand { command }) => assert_eq!(command, "ls -la"),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_write_payload() {
        let raw = r#"{"tool_name":"Write","tool_input":{"file_path":".env","content":"X=1"}}"#;
        let input = HookInput::from_json(raw).unwrap();
        match input.action() {
            Some(Action::FileWrite { path, content }) => {
                assert_eq!(path, PathBuf::from(".env"));
                assert_eq!(content.as_deref(), Some("X=1"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_tool_has_no_action() {
        let raw = r#"{"tool_name":"WebFetch","tool_input":{"url":"https://example.com"}}"#;
        let input = HookInput::from_json(raw).unwrap();
        assert!(input.action().is_none());
    }

    #[test]
    fn test_missing_fields_have_no_action() {
        let input = HookInput::from_json(r#"{}"#).unwrap();
        assert!(input.action().is_none());

        let input = HookInput::from_json(r#"{"tool_name":"Bash"}"#).unwrap();
        assert!(input.action().is_none());

        let input =
            HookInput::from_json(r#"{"tool_name":"Bash","tool_input":{"command":"  "}}"#).unwrap();
        assert!(input.action().is_none());
    }
}
