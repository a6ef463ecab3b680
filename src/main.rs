mod cli;
mod commands;
mod config;
mod git;
mod prompt;
mod steps;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

#[derive(Parser)]
#[command(name = "gitx")]
#[command(version, about = "Gitx: Git workflow shortcuts over plain git", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fold a range of commits into a single commit
    Merge {
        /// Start commit hash (prompted for when absent)
        #[arg(short, long)]
        from: Option<String>,

        /// End commit hash (default is HEAD)
        #[arg(short, long)]
        to: Option<String>,

        /// New commit message (prompted for when absent)
        #[arg(short, long)]
        msg: Option<String>,
    },
    /// Squash recent commits into one
    Squash {
        /// Number of commits to squash (default 2)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        number: Option<u32>,

        /// Squash all commits from the beginning (wins over --number)
        #[arg(long)]
        all: bool,
    },
    /// Discard all local unpushed commits (soft reset to remote)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Fetch and rebase the current branch onto its upstream
    Rebase {
        /// Upstream ref to rebase onto (e.g. origin/main)
        #[arg(short, long)]
        upstream: Option<String>,
    },
    /// Check git working directory and environment
    Doctor,
    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show configuration status or generate a sample configuration
    Config {
        /// Show current configuration path and status
        #[arg(long)]
        show: bool,

        /// Generate sample configuration
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle special commands that don't need config loading
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "gitx", &mut std::io::stdout());
            return;
        }
        Commands::Config { show, init } => {
            if let Err(e) = handle_config_command(*show, *init) {
                commands::print_error(&format!("{:#}", e));
                std::process::exit(1);
            }
            return;
        }
        _ => {} // Continue with normal processing
    }

    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            commands::print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let dispatcher = cli::CommandDispatcher::new(config);
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        commands::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Handle the config command
fn handle_config_command(show: bool, init: bool) -> Result<()> {
    if init {
        let sample_config = config::Config::create_sample_config()?;
        println!("# Sample gitx configuration");
        println!("# Copy this to ~/.config/gitx/config.yaml or .gitx.yaml");
        println!();
        println!("{}", sample_config);
        return Ok(());
    }

    if show {
        println!("🔍 gitx configuration status:");
        println!();

        // Check for repo-specific config
        let repo_config_path = std::path::PathBuf::from(".gitx.yaml");
        if repo_config_path.exists() {
            println!("✅ Repository config: .gitx.yaml");
        } else {
            println!("❌ Repository config: .gitx.yaml (not found)");
        }

        // Check for user config
        if let Some(user_config_path) = config::Config::user_config_path() {
            if user_config_path.exists() {
                println!("✅ User config: {}", user_config_path.display());
            } else {
                println!("❌ User config: {} (not found)", user_config_path.display());
            }
        } else {
            println!("❌ User config: Unable to determine config directory");
        }

        println!();
        println!("💡 To create a sample config: gitx config --init > ~/.config/gitx/config.yaml");

        return Ok(());
    }

    // If no flags provided, show help
    println!("gitx config management");
    println!();
    println!("Options:");
    println!("  --show  Show current configuration status");
    println!("  --init  Generate sample configuration");
    println!();
    println!("Examples:");
    println!("  gitx config --show");
    println!("  gitx config --init > ~/.config/gitx/config.yaml");
    println!("  gitx config --init > .gitx.yaml  # Repository-specific config");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_parsing_merge_command() {
        let args = vec!["gitx", "merge", "-f", "abc123", "-m", "fix things"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Merge { from, to, msg } => {
                assert_eq!(from, Some("abc123".to_string()));
                assert_eq!(to, None);
                assert_eq!(msg, Some("fix things".to_string()));
            }
            _ => panic!("Expected merge command"),
        }
    }

    #[test]
    fn test_cli_parsing_merge_command_minimal() {
        let args = vec!["gitx", "merge"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Merge { from, to, msg } => {
                // All fields collected interactively when absent
                assert_eq!(from, None);
                assert_eq!(to, None);
                assert_eq!(msg, None);
            }
            _ => panic!("Expected merge command"),
        }
    }

    #[test]
    fn test_cli_parsing_merge_long_flags() {
        let args = vec![
            "gitx", "merge", "--from", "abc123", "--to", "def456", "--msg", "fix",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Merge { from, to, msg } => {
                assert_eq!(from, Some("abc123".to_string()));
                assert_eq!(to, Some("def456".to_string()));
                assert_eq!(msg, Some("fix".to_string()));
            }
            _ => panic!("Expected merge command"),
        }
    }

    #[test]
    fn test_cli_parsing_squash_command() {
        let args = vec!["gitx", "squash", "-n", "3"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Squash { number, all } => {
                assert_eq!(number, Some(3));
                assert!(!all);
            }
            _ => panic!("Expected squash command"),
        }
    }

    #[test]
    fn test_cli_parsing_squash_all() {
        let args = vec!["gitx", "squash", "--all"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Squash { number, all } => {
                assert_eq!(number, None);
                assert!(all);
            }
            _ => panic!("Expected squash command"),
        }
    }

    #[test]
    fn test_cli_parsing_squash_rejects_zero_count() {
        let args = vec!["gitx", "squash", "-n", "0"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_squash_rejects_non_numeric_count() {
        let args = vec!["gitx", "squash", "-n", "two"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_squash_all_with_number() {
        // Both flags are accepted together; composition lets --all win
        let args = vec!["gitx", "squash", "--all", "-n", "3"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Squash { number, all } => {
                assert_eq!(number, Some(3));
                assert!(all);
            }
            _ => panic!("Expected squash command"),
        }
    }

    #[test]
    fn test_cli_parsing_reset_command() {
        let args = vec!["gitx", "reset"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Reset { yes } => assert!(!yes),
            _ => panic!("Expected reset command"),
        }
    }

    #[test]
    fn test_cli_parsing_reset_with_yes() {
        let args = vec!["gitx", "reset", "--yes"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Reset { yes } => assert!(yes),
            _ => panic!("Expected reset command"),
        }
    }

    #[test]
    fn test_cli_parsing_rebase_command() {
        let args = vec!["gitx", "rebase", "-u", "origin/main"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Rebase { upstream } => {
                assert_eq!(upstream, Some("origin/main".to_string()));
            }
            _ => panic!("Expected rebase command"),
        }
    }

    #[test]
    fn test_cli_parsing_doctor_command() {
        let args = vec!["gitx", "doctor"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(matches!(cli.command, Commands::Doctor));
    }

    #[test]
    fn test_cli_parsing_doctor_rejects_flags() {
        let args = vec!["gitx", "doctor", "--force"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        let args = vec!["gitx", "yolo"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_version() {
        let cli = Cli::command();
        let version = cli.get_version().unwrap();
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        let name = cli.get_name();
        assert_eq!(name, "gitx");
    }
}
