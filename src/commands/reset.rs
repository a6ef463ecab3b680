use crate::cli::args::ResetArgs;
use crate::commands::Command;
use crate::git::GitQuery;
use crate::prompt;
use crate::steps::{run_steps, GitStep, StepRunner};
use anyhow::Result;

/// Reset command implementation: soft-resets the current branch to its
/// remote-tracking ref, discarding unpushed commits while keeping their
/// changes staged.
pub struct ResetCommand;

pub fn compose_reset(remote_ref: &str) -> GitStep {
    GitStep::new(["reset", "--soft", remote_ref])
        .labeled("Local commits have been discarded (soft reset)")
}

impl ResetCommand {
    /// Acts on the operator's decision. Nothing mutating is composed or
    /// run unless the reset was confirmed; declining is a cancellation,
    /// not an error.
    fn finish(&self, proceed: bool, remote_ref: &str, git: &impl StepRunner) -> Result<()> {
        if !proceed {
            println!("❌ Cancelled.");
            return Ok(());
        }

        let step = compose_reset(remote_ref);
        println!("\n🧨 Running: {}", step);
        run_steps(git, std::slice::from_ref(&step))
    }
}

impl Command for ResetCommand {
    type Args = ResetArgs;

    async fn execute(&self, args: ResetArgs, git: &(impl GitQuery + StepRunner)) -> Result<()> {
        git.ensure_repository()?;

        let branch = git.current_branch()?;
        let remote = git.remote_of(&branch)?;
        let remote_ref = format!("{}/{}", remote, branch);

        let proceed = args.yes
            || prompt::confirm(
                &format!(
                    "⚠️  This will remove all local commits not pushed to {}. Proceed?",
                    remote_ref
                ),
                false,
            )?;

        self.finish(proceed, &remote_ref, git)
    }
}
