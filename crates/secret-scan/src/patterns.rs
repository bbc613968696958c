//! Secret-shaped pattern catalog.
//!
//! Heuristic by contract: obvious cases only. A JWT-shaped test fixture
//! is an acceptable false positive; a wrapped or obfuscated key is an
//! acceptable miss.

#[derive(Debug, Clone)]
pub struct SecretSpec {
    pub name: &'static str,
    pub pattern: &'static str,
}

const CATALOG: &[SecretSpec] = &[
    SecretSpec {
        name: "aws-access-key-id",
        pattern: r"\bAKIA[0-9A-Z]{16}\b",
    },
    SecretSpec {
        name: "google-api-key",
        pattern: r"\bAIza[0-9A-Za-z_-]{35}",
    },
    SecretSpec {
        name: "github-token",
        pattern: r"\bgh[pousr]_[A-Za-z0-9]{36,}\b|\bgithub_pat_[A-Za-z0-9_]{22,}\b",
    },
    SecretSpec {
        name: "secret-key-prefix",
        pattern: r"\bsk-ant-[A-Za-z0-9_-]{24,}|\bsk_(?:live|test)_[A-Za-z0-9]{24,}\b|\bsk-[A-Za-z0-9_-]{32,}\b",
    },
    SecretSpec {
        name: "jwt",
        pattern: r"\beyJ[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}",
    },
    SecretSpec {
        name: "private-key-pem",
        pattern: r"-----BEGIN (?:RSA |EC |DSA |OPENSSH |ENCRYPTED )?PRIVATE KEY-----",
    },
    SecretSpec {
        name: "slack-token",
        pattern: r"\bxox[baprs]-[A-Za-z0-9-]{10,}",
    },
    SecretSpec {
        name: "vault-token",
        pattern: r"\bhv[sb]\.[A-Za-z0-9_-]{24,}",
    },
    SecretSpec {
        name: "supabase-key",
        pattern: r"\bsbp_[A-Za-z0-9]{40}\b|\bsb_(?:secret|publishable)_[A-Za-z0-9_-]{20,}",
    },
    SecretSpec {
        name: "db-connection-string",
        pattern: r"\b(?:postgres(?:ql)?|mongodb(?:\+srv)?)://[^\s:/@]+:[^\s@]+@",
    },
];

pub fn catalog() -> &'static [SecretSpec] {
    CATALOG
}

/// Binary and generated extensions never worth scanning.
pub const SKIP_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "ico", "woff", "woff2", "ttf", "eot", "lock", "map",
];
