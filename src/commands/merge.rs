use crate::cli::args::MergeArgs;
use crate::commands::{print_warning, Command};
use crate::config::MergeConfig;
use crate::git::GitQuery;
use crate::prompt;
use crate::steps::{run_steps, GitStep, StepRunner};
use anyhow::Result;

/// Merge command implementation: folds the range `from..HEAD` into a
/// single commit, then optionally pushes the rewritten branch.
pub struct MergeCommand {
    config: MergeConfig,
}

impl MergeCommand {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }
}

/// Steps that fold the range into one commit: move the branch pointer to
/// the parent of `from` keeping everything staged, then commit the staged
/// result with `msg`, bypassing hooks and opening the editor for review.
pub fn compose_merge(from: &str, msg: &str) -> Vec<GitStep> {
    let parent = format!("{}^", from);
    vec![
        GitStep::new(["reset", "--soft", parent.as_str()]).labeled("Reset successful"),
        GitStep::new(["commit", "--edit", "-m", msg, "--no-verify"]).labeled("Commit successful"),
    ]
}

/// The push step after a merge. Without an upstream the branch is pushed
/// with `--set-upstream`; with one, a lease-protected force push is used so
/// the rewritten history cannot clobber work the operator has not seen.
pub fn compose_push(branch: &str, has_upstream: bool) -> GitStep {
    if has_upstream {
        GitStep::new(["push", "--force-with-lease"]).labeled("Force push successful")
    } else {
        GitStep::new(["push", "--set-upstream", "origin", branch])
            .labeled("Push & upstream set successfully")
    }
}

impl Command for MergeCommand {
    type Args = MergeArgs;

    async fn execute(&self, args: MergeArgs, git: &(impl GitQuery + StepRunner)) -> Result<()> {
        git.ensure_repository()?;

        // Collect anything not supplied via flags
        let from = match args.from {
            Some(hash) => hash,
            None => prompt::required_text(
                "Enter the start commit hash:",
                "Start commit hash is required.",
            )?,
        };

        // Accepted for interface compatibility; composition always ends the
        // range at HEAD, exactly like `git reset --soft` does.
        let _to = match args.to {
            Some(hash) => hash,
            None => prompt::text_with_fallback(
                "Enter the end commit hash (leave blank for HEAD):",
                "HEAD",
            )?,
        };

        let msg = match args.msg {
            Some(message) => message,
            None => prompt::required_text(
                "Enter the new commit message:",
                "Commit message cannot be empty.",
            )?,
        };

        // Preconditions: both must pass before anything is composed
        if git.is_root_commit(&from)? {
            anyhow::bail!(
                "Cannot merge from the first (root) commit — it has no parent.\n\
                 👉 Consider using `git rebase --root` instead."
            );
        }

        if !git.is_working_tree_clean()? {
            anyhow::bail!(
                "Your working directory is not clean. \
                 Please commit, stash, or reset changes before merging."
            );
        }

        let steps = compose_merge(&from, &msg);
        let rendered: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
        println!("\n🔧 Executing:\n{}\n", rendered.join(" && "));

        run_steps(git, &steps)?;

        let auto_push = match self.config.auto_push {
            Some(choice) => choice,
            None => prompt::confirm_push()?,
        };

        if auto_push {
            let current_branch = git.current_branch()?;
            let push = compose_push(&current_branch, git.has_upstream(&current_branch));
            println!("\n🚀 Executing: {}\n", push);
            run_steps(git, std::slice::from_ref(&push))?;
        } else {
            print_warning("Please push manually using git push");
        }

        Ok(())
    }
}
