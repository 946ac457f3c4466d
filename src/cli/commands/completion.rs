use crate::cli::parser::{Cli, CompletionArgs};
use crate::utils::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io;

pub fn execute(args: CompletionArgs) -> Result<()> {
    let mut command = Cli::command();
    generate(args.shell, &mut command, "sweep", &mut io::stdout());
    Ok(())
}
