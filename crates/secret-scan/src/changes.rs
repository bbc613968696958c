//! Changed-file discovery via the git working tree.
//!
//! The scan runs after a batch of edits; its input is whatever differs
//! from the last known-good state. With a HEAD commit that is the diff
//! against HEAD plus untracked files; in a brand-new repository with no
//! commits it falls back to the uncommitted diff. Discovery is
//! best-effort: a missing `git` binary or a non-repository directory
//! yields an empty set, never an error.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

pub fn changed_files(repo_root: &Path) -> Vec<PathBuf> {
    // git prints paths relative to the repository top level, which is not
    // repo_root when the scan starts in a subdirectory.
    let base = toplevel(repo_root).unwrap_or_else(|| repo_root.to_path_buf());
    let mut seen = Vec::new();
    let sources: Vec<Vec<String>> = if has_head(repo_root) {
        vec![
            git_lines(repo_root, &["diff", "--name-only", "HEAD"]),
            git_lines(repo_root, &["ls-files", "--others", "--exclude-standard"]),
        ]
    } else {
        vec![
            git_lines(repo_root, &["diff", "--name-only"]),
            git_lines(repo_root, &["diff", "--name-only", "--cached"]),
            git_lines(repo_root, &["ls-files", "--others", "--exclude-standard"]),
        ]
    };

    for lines in sources {
        for line in lines {
            let path = base.join(line);
            if !seen.contains(&path) {
                seen.push(path);
            }
        }
    }
    seen
}

fn toplevel(repo_root: &Path) -> Option<PathBuf> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(PathBuf::from(text))
    }
}

fn has_head(repo_root: &Path) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["rev-parse", "--verify", "--quiet", "HEAD"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn git_lines(repo_root: &Path, args: &[&str]) -> Vec<String> {
    let output = Command::new("git").arg("-C").arg(repo_root).args(args).output();
    match output {
        Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Ok(output) => {
            debug!(?args, status = ?output.status, "git call failed, skipping source");
            Vec::new()
        }
        Err(err) => {
            debug!(?args, %err, "git unavailable, skipping source");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(args)
            .status()
            .unwrap();
        assert!(status.success(), "git {args:?} failed");
    }

    #[test]
    fn test_non_repository_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        assert!(changed_files(dir.path()).is_empty());
    }

    #[test]
    fn test_discovery_from_subdirectory_resolves_against_toplevel() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        git(&root, &["init", "-q"]);
        git(&root, &["config", "user.email", "dev@example.com"]);
        git(&root, &["config", "user.name", "dev"]);
        fs::create_dir_all(root.join("web")).unwrap();
        fs::write(root.join("web/app.js"), "console.log('hi');\n").unwrap();
        git(&root, &["add", "."]);
        git(&root, &["commit", "-qm", "initial"]);

        fs::write(
            root.join("web/app.js"),
            "const key = 'AKIA1234567890ABCDEF';\n",
        )
        .unwrap();

        // Discovery started inside web/ must still yield real paths.
        let changed = changed_files(&root.join("web"));
        assert!(changed.contains(&root.join("web/app.js")), "{changed:?}");
        assert!(
            changed.iter().all(|path| path.is_file()),
            "{changed:?}"
        );
    }
}
