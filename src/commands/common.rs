
use clap::Parser;
use log::error;
use std::path::PathBuf;

use crate::loaders;
use crate::settings::Settings;
use crate::store::Store;

///////////////////////////////////////////////////////////////////////////////

#[derive(Parser, Debug)]
#[command(version, about = "Reads source data and creates the common reference tables", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "assets/config")]
    config: PathBuf,
}

///////////////////////////////////////////////////////////////////////////////

pub fn command(args: Args) {
    if let Err(e) = run(&args) {
        error!("build-common failed: {}", e);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(&args.config)?;
    let mut store = Store::open(&settings.database_url)?;

    let report = loaders::run_all(&mut store, &settings);
    report.log_summary();

    Ok(())
}
