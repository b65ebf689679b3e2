use clap::Parser;

use proteindb::cli::{Cli, Commands};
use proteindb::commands;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BuildCommon(args) => {
            commands::common::command(args);
        }
        Commands::BuildConstructs(args) => {
            commands::constructs::command(args);
        }
    }
}
