//! Audit trail for gate decisions.
//!
//! One JSONL line per evaluated action. The append is best-effort by
//! design: the gate's verdict must never depend on whether the audit
//! write succeeded, so failures here are swallowed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use policy_gate::{Decision, Outcome};
use toolwarden_core::types::Action;

pub mod redact;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub timestamp: OffsetDateTime,
    pub session_id: Option<String>,
    pub action: String,
    pub outcome: Outcome,
    pub rule: Option<String>,
    pub reason: Option<String>,
}

impl AuditEvent {
    pub fn from_decision(session_id: Option<String>, action: &Action, decision: &Decision) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: OffsetDateTime::now_utc(),
            session_id,
            action: redact::redact_home(&action.summary()),
            outcome: decision.outcome,
            rule: decision.rule.clone(),
            reason: decision.reason.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Appends one event. Best-effort: IO failures are dropped.
    pub fn append(&self, event: &AuditEvent) {
        let Ok(line) = serde_json::to_string(event) else {
            return;
        };
        if let Some(parent) = self.path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(file, "{line}");
        }
    }

    /// Reads back all parseable events; unparseable lines are skipped.
    pub fn read_events(&self) -> Vec<AuditEvent> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        contents
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportStats {
    pub total: u32,
    pub allowed: u32,
    pub blocked: u32,
}

impl ReportStats {
    pub fn from_events(events: &[AuditEvent]) -> Self {
        let mut stats = ReportStats::default();
        for event in events {
            stats.total = stats.total.saturating_add(1);
            match event.outcome {
                Outcome::Allow => stats.allowed = stats.allowed.saturating_add(1),
                Outcome::Block => stats.blocked = stats.blocked.saturating_add(1),
            }
        }
        stats
    }

    pub fn human_summary(&self) -> String {
        if self.total == 0 {
            return "No gate decisions recorded yet.".to_string();
        }
        format!(
            "{} decision(s): {} allowed, {} blocked.",
            self.total, self.allowed, self.blocked
        )
    }
}
