use crate::cli::args::SquashArgs;
use crate::commands::Command;
use crate::config::SquashConfig;
use crate::git::GitQuery;
use crate::steps::{run_steps, GitStep, StepRunner};
use anyhow::Result;

/// Fallback when neither `--number` nor the config supplies a count.
pub const DEFAULT_SQUASH_COUNT: u32 = 2;

/// Squash command implementation: opens an interactive rebase covering the
/// last N commits, or the whole history with `--all`.
pub struct SquashCommand {
    config: SquashConfig,
}

impl SquashCommand {
    pub fn new(config: SquashConfig) -> Self {
        Self { config }
    }
}

/// The single interactive-rewrite step. `--all` wins over any count.
pub fn compose_squash(all: bool, count: u32) -> GitStep {
    if all {
        GitStep::new(["rebase", "-i", "--root"])
    } else {
        let range = format!("HEAD~{}", count);
        GitStep::new(["rebase", "-i", range.as_str()])
    }
}

impl Command for SquashCommand {
    type Args = SquashArgs;

    fn resolve_args(&self, mut args: SquashArgs) -> SquashArgs {
        if args.number.is_none() {
            args.number = self.config.number;
        }
        args
    }

    async fn execute(&self, args: SquashArgs, git: &(impl GitQuery + StepRunner)) -> Result<()> {
        git.ensure_repository()?;

        if !git.is_working_tree_clean()? {
            anyhow::bail!(
                "Your working directory is not clean. \
                 Please commit, stash, or reset changes before squashing."
            );
        }

        // The CLI parser already rejects 0, but the config file can still
        // hand us one; never compose a command for it.
        let count = args.number.unwrap_or(DEFAULT_SQUASH_COUNT);
        anyhow::ensure!(count >= 1, "Squash count must be a positive integer");

        let step = compose_squash(args.all, count);
        println!("🧨 Running: {}", step);
        run_steps(git, std::slice::from_ref(&step))
    }
}
