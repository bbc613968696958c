//! Built-in pre-command catalog.
//!
//! Each entry is an independent pattern over the literal command line.
//! Matching is case-sensitive except the destructive-SQL rule. Order is
//! the declaration order below; it decides only which reason is reported
//! when more than one rule matches.

use super::RuleSpec;

const CATALOG: &[RuleSpec] = &[
    RuleSpec {
        name: "rm-root",
        pattern: r"\brm\s+(?:-[-a-zA-Z]*[rRf][-a-zA-Z]*\s+)+/+\s*$",
        reason: "Recursive force-delete of the filesystem root is never allowed.",
        case_insensitive: false,
    },
    RuleSpec {
        name: "rm-project-dir",
        pattern: r"\brm\s+(?:-[-a-zA-Z]*[rRf][-a-zA-Z]*\s+)+(?:\S+\s+)*\.(?:\s|$)",
        reason: "Deleting the entire project directory is not allowed. Remove specific paths instead.",
        case_insensitive: false,
    },
    RuleSpec {
        name: "git-force-push-protected",
        pattern: r"\bgit\s+push\s+(?:\S+\s+)*(?:--force|-f)\s+(?:\S+\s+)*(?:main|master)(?:\s|$)|\bgit\s+push\s+(?:\S+\s+)*(?:main|master)\s+(?:\S+\s+)*(?:--force|-f)(?:\s|$)",
        reason: "Force-pushing to main/master is not allowed. Use a feature branch.",
        case_insensitive: false,
    },
    RuleSpec {
        name: "git-reset-hard-protected",
        pattern: r"\bgit\s+reset\s+--hard\s+origin/(?:main|master)(?:\s|$)",
        reason: "Hard-resetting to origin/main or origin/master discards local work. Use a feature branch.",
        case_insensitive: false,
    },
    RuleSpec {
        name: "sql-destructive",
        pattern: r"\b(?:drop\s+(?:database|schema)|truncate(?:\s+table)?)\s+\S+",
        reason: "Destructive database statements (DROP DATABASE/SCHEMA, TRUNCATE) are not allowed.",
        case_insensitive: true,
    },
    RuleSpec {
        name: "find-delete",
        pattern: r"\bfind\b.*\s-delete\b",
        reason: "Recursive deletion via 'find ... -delete' is not allowed.",
        case_insensitive: false,
    },
    RuleSpec {
        name: "curl-pipe-shell",
        pattern: r"\b(?:curl|wget)\b[^|]*\|\s*(?:sudo\s+)?(?:bash|sh|zsh|source)\b",
        reason: "Piping downloaded content into a shell is not allowed. Download and inspect it first.",
        case_insensitive: false,
    },
];

pub fn catalog() -> &'static [RuleSpec] {
    CATALOG
}
