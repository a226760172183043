//! Maps parsed CLI arguments onto command implementations.

use crate::cli::args::{Cli, Command};
use crate::commands::{completions, install, self_update};
use crate::error::Result;

pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Install { name } => install::run(install::InstallOptions { name: name.clone() }),
        Command::Update { check } => {
            self_update::run(self_update::SelfUpdateOptions { check: *check })
        }
        Command::Completions { shell } => completions::run(*shell),
    }
}
