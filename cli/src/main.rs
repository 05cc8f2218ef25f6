mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, validate};
use ipgate_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg);

    match commands.command {
        Commands::Validate { ranges } => {
            print::header("validating allow-list", cfg.quiet);
            validate::validate(&ranges, &cfg)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { client, ranges } => {
            print::header("checking client", cfg.quiet);
            let permitted = check::check(&client, &ranges)?;
            Ok(if permitted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
