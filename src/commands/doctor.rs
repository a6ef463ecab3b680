use crate::commands::{print_error, print_success, print_warning, Command};
use crate::git::GitQuery;
use crate::steps::StepRunner;
use anyhow::Result;

/// Doctor command implementation: read-only environment diagnostics. It
/// never composes or runs a mutating git command, whatever the repository
/// state looks like.
pub struct DoctorCommand;

impl Command for DoctorCommand {
    type Args = ();

    async fn execute(&self, _args: (), git: &(impl GitQuery + StepRunner)) -> Result<()> {
        println!("🩺 Running gitx health check...\n");

        print_success(&format!("gitx version: {}", env!("CARGO_PKG_VERSION")));

        match git.version() {
            Ok(version) => print_success(&format!("Git installed: {}", version)),
            Err(_) => {
                print_error("Git not found in PATH");
                return Ok(());
            }
        }

        if git.is_inside_work_tree() {
            print_success("Inside a Git repository");
        } else {
            print_error("Not inside a Git repository");
            return Ok(());
        }

        match git.is_working_tree_clean() {
            Ok(true) => print_success("Working directory is clean"),
            Ok(false) => print_warning("Working directory has uncommitted changes"),
            Err(_) => print_warning("Failed to check working tree status"),
        }

        match git.remotes() {
            Ok(remotes) if !remotes.is_empty() => {
                print_success(&format!("Remote(s) configured: {}", remotes.join(", ")));
            }
            Ok(_) => print_warning("No Git remotes configured"),
            Err(_) => print_warning("Failed to check remotes"),
        }

        match git.current_branch() {
            Ok(branch) => println!("📍 Current branch: {}", branch),
            Err(_) => print_warning("Failed to get current branch"),
        }

        println!("\n🧩 Done.");
        Ok(())
    }
}
