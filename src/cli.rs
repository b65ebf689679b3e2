use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the common reference tables from the source data files
    BuildCommon(commands::common::Args),
    /// Create protein records for structural constructs
    BuildConstructs(commands::constructs::Args),
}

#[derive(Parser)]
#[command(
    name = "proteindb",
    color = clap::ColorChoice::Always,
    author = "Protein DB",
    version = "1.0.0",
    about = "Batch import tools for the protein structure database",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
