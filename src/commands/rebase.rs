use crate::cli::args::RebaseArgs;
use crate::commands::{print_info, print_success, print_warning, Command};
use crate::git::GitQuery;
use crate::steps::{run_steps, GitStep, StepRunner};
use anyhow::Result;

/// Rebase command implementation: fetches and rebases the current branch
/// onto its upstream (or an explicitly given ref).
pub struct RebaseCommand;

/// Fetch first so the rebase target is current, then rebase onto it.
pub fn compose_rebase(upstream: &str) -> Vec<GitStep> {
    vec![
        GitStep::new(["fetch"]),
        GitStep::new(["rebase", upstream]),
    ]
}

impl Command for RebaseCommand {
    type Args = RebaseArgs;

    async fn execute(&self, args: RebaseArgs, git: &(impl GitQuery + StepRunner)) -> Result<()> {
        git.ensure_repository()?;

        if !git.is_working_tree_clean()? {
            anyhow::bail!(
                "Your working directory is not clean. \
                 Please commit, stash, or reset changes before rebasing."
            );
        }

        let upstream = match args.upstream {
            Some(upstream) => upstream,
            None => {
                let branch = git.current_branch()?;
                git.upstream_of(&branch).ok_or_else(|| {
                    anyhow::anyhow!(
                        "No upstream configured for branch '{}'.\n\
                         👉 Specify one with --upstream or set it via \
                         `git branch --set-upstream-to <remote>/<branch>`",
                        branch
                    )
                })?
            }
        };

        print_info(&format!("Target upstream: {}", upstream));
        println!("🔄 Fetching and rebasing...");

        match run_steps(git, &compose_rebase(&upstream)) {
            Ok(()) => {
                print_success("Rebase successful!");
                Ok(())
            }
            Err(e) => {
                eprintln!("\n❌ Rebase encountered conflicts or failed.");
                print_warning("Please resolve conflicts manually.");
                println!("👉 After resolving:\n   1. git add <files>\n   2. git rebase --continue");
                println!("👉 To abort:\n   git rebase --abort");
                Err(e)
            }
        }
    }
}
