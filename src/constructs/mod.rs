//! The construct import job: reads construct definition files and creates
//! the derived protein records.

pub mod builder;
pub mod definition;

use log::{error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::protein::Protein;
use crate::report::{Outcome, StageReport};
use crate::settings::Settings;
use crate::store::Store;
use builder::BuildError;
use definition::ConstructDefinition;

/// The sequence type tag that marks a protein record as a construct.
pub const CONSTRUCT_SEQUENCE_TYPE: &str = "mod";

/// Runs the construct import. Each file is one unit of work: a failure is
/// logged, recorded on the report and the job moves to the next file. With
/// `purge`, all existing constructs are deleted first, so the whole set can
/// be rebuilt from scratch.
pub fn run(
    store: &mut Store,
    settings: &Settings,
    filenames: &[String],
    purge: bool,
) -> StageReport {
    let mut report = StageReport::new("constructs");

    if purge {
        match store.purge_proteins_by_sequence_type(CONSTRUCT_SEQUENCE_TYPE) {
            Ok(count) => info!("purged {} existing constructs", count),
            Err(e) => error!("failed purging constructs: {}", e),
        }
    }

    info!("creating constructs");
    let dir = settings.constructs_dir();
    let files = match construct_files(&dir, filenames) {
        Ok(files) => files,
        Err(e) => {
            report.abort(format!("cannot list {}: {}", dir.display(), e));
            return report;
        }
    };

    for path in files {
        let key = format!("construct file {}", crate::loaders::file_key(&path));
        match build_from_file(store, settings, &path) {
            Ok(protein) => report.record(format!("construct {}", protein.entry_name), Outcome::Created),
            Err(e @ (BuildError::MissingProtein | BuildError::MissingName)) => {
                report.record(key, Outcome::Skipped(e.to_string()))
            }
            Err(e) => report.record(key, Outcome::Failed(e.to_string())),
        }
    }
    info!("completed creating constructs");
    report
}

fn build_from_file(
    store: &mut Store,
    settings: &Settings,
    path: &Path,
) -> Result<Protein, BuildError> {
    info!("reading file {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let definition: ConstructDefinition =
        serde_yaml::from_str(&contents).map_err(|source| BuildError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
    builder::build_construct(store, settings, &definition)
}

/// The definition files to process: either the explicitly named ones, or
/// every file in the constructs directory in sorted order (dotfiles are
/// ignored).
fn construct_files(dir: &Path, filenames: &[String]) -> io::Result<Vec<PathBuf>> {
    if !filenames.is_empty() {
        return Ok(filenames.iter().map(|name| dir.join(name)).collect());
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.'))
        })
        .collect();
    files.sort();
    Ok(files)
}
