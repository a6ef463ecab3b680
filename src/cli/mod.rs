pub mod args;

use crate::commands::{
    print_info, Command, DoctorCommand, MergeCommand, RebaseCommand, ResetCommand, SquashCommand,
};
use crate::config::Config;
use crate::git::GitClient;
use crate::Commands;
use anyhow::Result;
use args::{MergeArgs, RebaseArgs, ResetArgs, SquashArgs};

/// Command dispatcher that routes CLI commands to their implementations
pub struct CommandDispatcher {
    config: Config,
    git: GitClient,
}

impl CommandDispatcher {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            git: GitClient::new(),
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<()> {
        if self.config.behavior.verbose {
            print_info("Executing gitx command...");
        }

        match command {
            Commands::Merge { from, to, msg } => {
                let args = MergeArgs { from, to, msg };
                let cmd = MergeCommand::new(self.config.commands.merge.clone());
                let resolved_args = cmd.resolve_args(args);

                cmd.execute(resolved_args, &self.git).await
            }
            Commands::Squash { number, all } => {
                let args = SquashArgs { number, all };
                let cmd = SquashCommand::new(self.config.commands.squash.clone());
                let resolved_args = cmd.resolve_args(args);

                cmd.execute(resolved_args, &self.git).await
            }
            Commands::Reset { yes } => {
                let args = ResetArgs { yes };
                let cmd = ResetCommand;

                cmd.execute(args, &self.git).await
            }
            Commands::Rebase { upstream } => {
                let args = RebaseArgs { upstream };
                let cmd = RebaseCommand;

                cmd.execute(args, &self.git).await
            }
            Commands::Doctor => {
                let cmd = DoctorCommand;

                cmd.execute((), &self.git).await
            }
            Commands::Completions { .. } | Commands::Config { .. } => {
                unreachable!("Handled in main")
            }
        }
    }
}
