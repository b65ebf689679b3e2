
use clap::Parser;
use log::error;
use std::path::PathBuf;

use crate::constructs;
use crate::settings::Settings;
use crate::store::Store;

///////////////////////////////////////////////////////////////////////////////

#[derive(Parser, Debug)]
#[command(version, about = "Reads source data and creates protein records for constructs", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "assets/config")]
    config: PathBuf,

    /// Filename to import; can be used multiple times (default: all files)
    #[arg(short, long)]
    filename: Vec<String>,

    /// Purge existing construct records before importing
    #[arg(long)]
    purge: bool,
}

///////////////////////////////////////////////////////////////////////////////

pub fn command(args: Args) {
    if let Err(e) = run(&args) {
        error!("build-constructs failed: {}", e);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(&args.config)?;
    let mut store = Store::open(&settings.database_url)?;

    let report = constructs::run(&mut store, &settings, &args.filename, args.purge);
    report.log_summary();

    Ok(())
}
