//! Built-in pre-write catalog.
//!
//! Patterns match the target path only, never file content. Credential
//! filename checks are case-insensitive so `Secrets.YAML` is still caught.

use super::RuleSpec;

const CATALOG: &[RuleSpec] = &[
    RuleSpec {
        name: "env-file",
        pattern: r"(?:^|/)\.env(?:\.[^/]+)?$",
        reason: "Writes to .env files are not allowed. They hold secrets; edit them by hand.",
        case_insensitive: false,
    },
    RuleSpec {
        name: "credential-file",
        pattern: r"(?:^|/)(?:secrets\.ya?ml|credentials\.json|[^/]*service[^/]*account[^/]*\.json)$",
        reason: "Writes to credential files are not allowed.",
        case_insensitive: true,
    },
    RuleSpec {
        name: "key-material",
        pattern: r"\.(?:pem|key|p12|pfx|jks|keystore)$",
        reason: "Writes to key or certificate files are not allowed.",
        case_insensitive: true,
    },
    RuleSpec {
        name: "terraform-state",
        pattern: r"(?:^|/)(?:terraform\.tfvars(?:\.json)?|terraform\.tfstate(?:\.backup)?|[^/]+\.tfvars(?:\.json)?)$",
        reason: "Writes to Terraform state and variable files are not allowed.",
        case_insensitive: false,
    },
    RuleSpec {
        name: "cloud-credential-dir",
        pattern: r"\.aws/credentials$|\.kube/config$|\.gcloud/",
        reason: "Writes under cloud credential directories are not allowed.",
        case_insensitive: false,
    },
    // Direct writes only. Shell commands that regenerate lock files
    // (npm install, cargo update, ...) go through the pre-command gate,
    // which deliberately has no rule for them.
    RuleSpec {
        name: "lock-file",
        pattern: r"(?:^|/)(?:package-lock\.json|pnpm-lock\.yaml|yarn\.lock|pubspec\.lock|poetry\.lock|uv\.lock)$",
        reason: "Lock files are generated. Run the package manager instead of editing them.",
        case_insensitive: false,
    },
];

pub fn catalog() -> &'static [RuleSpec] {
    CATALOG
}

#[cfg(test)]
mod tests {
    use crate::rules::RuleSet;

    fn first_blocking(path: &str) -> Option<String> {
        let set = RuleSet::pre_write(&[]).unwrap();
        set.rules()
            .iter()
            .find(|rule| rule.matches(path))
            .map(|rule| rule.name.clone())
    }

    #[test]
    fn test_env_files() {
        assert_eq!(first_blocking(".env").as_deref(), Some("env-file"));
        assert_eq!(first_blocking(".env.production").as_deref(), Some("env-file"));
        assert_eq!(first_blocking("apps/web/.env.local").as_deref(), Some("env-file"));
        assert_eq!(first_blocking("src/config/env.ts"), None);
        assert_eq!(first_blocking(".envrc"), None);
    }

    #[test]
    fn test_credential_files_case_insensitive() {
        assert_eq!(first_blocking("config/secrets.yaml").as_deref(), Some("credential-file"));
        assert_eq!(first_blocking("Secrets.YML").as_deref(), Some("credential-file"));
        assert_eq!(first_blocking("credentials.json").as_deref(), Some("credential-file"));
        assert_eq!(
            first_blocking("gcp/my-service-account-key.json").as_deref(),
            Some("credential-file")
        );
        assert_eq!(first_blocking("config/settings.json"), None);
    }

    #[test]
    fn test_key_material_extensions() {
        for path in ["server.pem", "id_rsa.key", "cert.P12", "app.pfx", "release.jks", "debug.keystore"] {
            assert_eq!(first_blocking(path).as_deref(), Some("key-material"), "{path}");
        }
        assert_eq!(first_blocking("keyboard.rs"), None);
        assert_eq!(first_blocking("monkey.txt"), None);
    }

    #[test]
    fn test_terraform_files() {
        assert_eq!(first_blocking("terraform.tfvars").as_deref(), Some("terraform-state"));
        assert_eq!(first_blocking("infra/terraform.tfstate").as_deref(), Some("terraform-state"));
        assert_eq!(
            first_blocking("terraform.tfstate.backup").as_deref(),
            Some("terraform-state")
        );
        assert_eq!(first_blocking("envs/prod.tfvars.json").as_deref(), Some("terraform-state"));
        assert_eq!(first_blocking("main.tf"), None);
    }

    #[test]
    fn test_cloud_credential_dirs() {
        assert_eq!(
            first_blocking("/home/dev/.aws/credentials").as_deref(),
            Some("cloud-credential-dir")
        );
        assert_eq!(
            first_blocking("/home/dev/.kube/config").as_deref(),
            Some("cloud-credential-dir")
        );
        assert_eq!(
            first_blocking("/home/dev/.gcloud/application_default.json").as_deref(),
            Some("cloud-credential-dir")
        );
        assert_eq!(first_blocking("/home/dev/.aws/config"), None);
    }

    #[test]
    fn test_lock_files() {
        for path in [
            "package-lock.json",
            "web/pnpm-lock.yaml",
            "yarn.lock",
            "pubspec.lock",
            "poetry.lock",
            "uv.lock",
        ] {
            assert_eq!(first_blocking(path).as_deref(), Some("lock-file"), "{path}");
        }
        assert_eq!(first_blocking("src/lock.rs"), None);
    }
}
