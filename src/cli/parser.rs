use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sweep")]
#[command(about = "Scheduled file retention sweeper")]
#[command(
    version,
    long_about = "When run without any command, executes every configured cleaning task once, \
or on a loop when a loop delay is configured"
)]
pub struct Cli {
    /// Path to the settings file (defaults to the per-user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every configured cleaning task
    Run(RunArgs),
    /// Validate the settings file without touching any files
    Check,
    /// Write a starter settings file
    Init(InitArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Run a single pass even when a loop delay is configured
    #[arg(long)]
    pub once: bool,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing settings file without asking
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["sweep"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_run_once_flag() {
        let cli = Cli::try_parse_from(["sweep", "run", "--once"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => assert!(args.once),
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::try_parse_from(["sweep", "check", "--config", "/tmp/settings.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/settings.json")));
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn test_init_force_flag() {
        let cli = Cli::try_parse_from(["sweep", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => assert!(args.force),
            _ => panic!("expected init command"),
        }
    }
}
