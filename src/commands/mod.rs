pub mod doctor;
pub mod merge;
pub mod rebase;
pub mod reset;
pub mod squash;

use crate::git::GitQuery;
use crate::steps::StepRunner;
use anyhow::Result;
use colored::Colorize;

pub use doctor::DoctorCommand;
pub use merge::MergeCommand;
pub use rebase::RebaseCommand;
pub use reset::ResetCommand;
pub use squash::SquashCommand;

/// Common interface implemented by every gitx subcommand.
pub(crate) trait Command {
    type Args;

    /// Apply config-level defaults to CLI args before execution.
    fn resolve_args(&self, args: Self::Args) -> Self::Args {
        args
    }

    /// Run the subcommand: check preconditions, prompt for anything
    /// missing, compose the git steps and execute them in order.
    async fn execute(
        &self,
        args: Self::Args,
        git: &(impl GitQuery + StepRunner),
    ) -> Result<()>;
}

/// Print success message
pub fn print_success(msg: &str) {
    println!("{}", format!("✅ {}", msg).green());
}

/// Print error message
pub fn print_error(msg: &str) {
    eprintln!("{}", format!("❌ {}", msg).red());
}

/// Print warning message
pub fn print_warning(msg: &str) {
    println!("{}", format!("⚠️  {}", msg).yellow());
}

/// Print info message
pub fn print_info(msg: &str) {
    println!("{}", format!("🔧 {}", msg).cyan());
}
