use crate::steps::{GitStep, StepRunner};
use anyhow::{Context, Result};
use std::process::{Command, Output};

/// Read-only queries against the underlying repository.
///
/// Split from [`StepRunner`] so subcommands can be exercised in tests with
/// mocked repository state: preconditions must gate composition, so a dirty
/// tree or a root commit must mean no mutating step is ever run.
pub trait GitQuery {
    /// The installed git version line, e.g. `git version 2.43.0`.
    fn version(&self) -> Result<String>;

    fn is_inside_work_tree(&self) -> bool;

    /// Abort early when the current directory is not a git repository.
    fn ensure_repository(&self) -> Result<()>;

    fn is_working_tree_clean(&self) -> Result<bool>;

    fn current_branch(&self) -> Result<String>;

    /// Whether `rev` resolves to a commit with no parent.
    fn is_root_commit(&self, rev: &str) -> Result<bool>;

    /// Whether `branch` has a configured remote-tracking counterpart.
    fn has_upstream(&self, branch: &str) -> bool;

    /// The remote-tracking ref of `branch`, e.g. `origin/main`.
    fn upstream_of(&self, branch: &str) -> Option<String>;

    /// The remote `branch` is configured to push to, e.g. `origin`.
    fn remote_of(&self, branch: &str) -> Result<String>;

    /// Names of all configured remotes.
    fn remotes(&self) -> Result<Vec<String>>;
}

/// Thin client around the installed `git` executable.
///
/// All repository state is read through captured-output queries; mutating
/// steps run through [`StepRunner`] with the operator's terminal inherited,
/// so editors and interactive rebase sessions work as usual.
#[derive(Debug, Clone)]
pub struct GitClient;

impl GitClient {
    pub fn new() -> Self {
        Self
    }

    fn query(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .output()
            .context("Failed to execute git - is it installed and on your PATH?")
    }

    fn query_text(&self, args: &[&str], what: &str) -> Result<String> {
        let output = self.query(args)?;
        if !output.status.success() {
            anyhow::bail!(
                "Failed to {}: {}",
                what,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitQuery for GitClient {
    fn version(&self) -> Result<String> {
        self.query_text(&["--version"], "read the git version")
    }

    fn is_inside_work_tree(&self) -> bool {
        self.query(&["rev-parse", "--is-inside-work-tree"])
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn ensure_repository(&self) -> Result<()> {
        let output = self.query(&["rev-parse", "--is-inside-work-tree"])?;
        if !output.status.success() {
            anyhow::bail!("Not inside a Git repository");
        }
        Ok(())
    }

    fn is_working_tree_clean(&self) -> Result<bool> {
        let output = self.query(&["status", "--porcelain"])?;
        if !output.status.success() {
            anyhow::bail!(
                "Failed to read working tree status: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output.stdout.iter().all(|b| b.is_ascii_whitespace()))
    }

    fn current_branch(&self) -> Result<String> {
        self.query_text(
            &["symbolic-ref", "--short", "HEAD"],
            "resolve the current branch",
        )
    }

    fn is_root_commit(&self, rev: &str) -> Result<bool> {
        let roots = self.query_text(
            &["rev-list", "--max-parents=0", "HEAD"],
            "list root commits",
        )?;
        Ok(rev_in_list(&roots, rev))
    }

    fn has_upstream(&self, branch: &str) -> bool {
        self.upstream_of(branch).is_some()
    }

    fn upstream_of(&self, branch: &str) -> Option<String> {
        let output = self
            .query(&["rev-parse", "--abbrev-ref", &format!("{}@{{u}}", branch)])
            .ok()?;
        if output.status.success() {
            Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            None
        }
    }

    fn remote_of(&self, branch: &str) -> Result<String> {
        let remote = self.query_text(
            &["config", &format!("branch.{}.remote", branch)],
            &format!("find the remote of branch '{}'", branch),
        )?;
        if remote.is_empty() {
            anyhow::bail!("Branch '{}' has no configured remote", branch);
        }
        Ok(remote)
    }

    fn remotes(&self) -> Result<Vec<String>> {
        let listing = self.query_text(&["remote"], "list remotes")?;
        Ok(listing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl StepRunner for GitClient {
    fn run_step(&self, step: &GitStep) -> Result<()> {
        // Inherit stdio so editors and interactive rebases get the terminal.
        let status = Command::new("git")
            .args(step.args())
            .status()
            .context("Failed to execute git - is it installed and on your PATH?")?;

        if !status.success() {
            anyhow::bail!("git exited with {}", status);
        }
        Ok(())
    }
}

/// True when `rev` names one of the newline-separated full hashes in `list`.
///
/// Abbreviated revs are treated as prefixes, matching what the operator
/// would paste from `git log --oneline`.
fn rev_in_list(list: &str, rev: &str) -> bool {
    let rev = rev.trim();
    if rev.is_empty() {
        return false;
    }
    list.lines()
        .map(str::trim)
        .any(|full| full == rev || (rev.len() >= 7 && full.starts_with(rev)))
}
