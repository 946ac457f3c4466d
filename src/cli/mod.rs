pub mod commands;
pub mod parser;

pub use parser::{Cli, Commands};

use crate::utils::Result;

pub fn execute_command(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Some(Commands::Run(args)) => commands::run::execute(config_path.as_deref(), args),
        Some(Commands::Check) => commands::check::execute(config_path.as_deref()),
        Some(Commands::Init(args)) => commands::init::execute(config_path.as_deref(), args),
        Some(Commands::Completion(args)) => commands::completion::execute(args),
        None => commands::run::execute(
            config_path.as_deref(),
            parser::RunArgs { once: false },
        ),
    }
}
