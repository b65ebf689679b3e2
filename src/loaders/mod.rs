//! The reference-data loader: nine independent catalogs, each materialized
//! idempotently from its source file(s).

pub mod anomalies;
pub mod documents;
pub mod ligands;
pub mod publications;
pub mod resources;
pub mod segments;

use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::report::{JobReport, StageReport};
use crate::settings::Settings;
use crate::store::{Store, StoreError};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Required {kind} {key} not found")]
    MissingDependency { kind: &'static str, key: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The catalogs in load order. Anomalies reference protein segments and
/// numbering schemes, so those two stages must run first; the enum order is
/// the dependency order and `run_all` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Stage {
    Resources,
    Ligands,
    Documentation,
    News,
    Pages,
    Publications,
    ProteinSegments,
    NumberingSchemes,
    Anomalies,
}

impl Stage {
    fn run(self, store: &mut Store, settings: &Settings) -> Result<StageReport, LoadError> {
        match self {
            Stage::Resources => resources::load(store, settings),
            Stage::Ligands => ligands::load(store, settings),
            Stage::Documentation => documents::load_documentation(store, settings),
            Stage::News => documents::load_news(store, settings),
            Stage::Pages => documents::load_pages(store, settings),
            Stage::Publications => publications::load(store, settings),
            Stage::ProteinSegments => segments::load_segments(store, settings),
            Stage::NumberingSchemes => segments::load_numbering_schemes(store, settings),
            Stage::Anomalies => anomalies::load(store, settings),
        }
    }
}

/// Runs every catalog stage in order. A stage that cannot run at all is
/// recorded as aborted and the remaining stages still run; nothing already
/// persisted is rolled back.
pub fn run_all(store: &mut Store, settings: &Settings) -> JobReport {
    let mut job = JobReport::default();
    for stage in Stage::iter() {
        info!("loading {}", stage);
        match stage.run(store, settings) {
            Ok(report) => job.push(report),
            Err(e) => {
                let mut report = StageReport::new(stage.to_string());
                report.abort(e.to_string());
                job.push(report);
            }
        }
    }
    job
}

pub(crate) fn read_to_string(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parse_yaml_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// The YAML files of a catalog directory in sorted filename order. Dotfiles
/// and files with other extensions are ignored.
pub(crate) fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.') && n.ends_with(".yaml"))
        })
        .collect();
    files.sort();
    Ok(files)
}

pub(crate) fn file_key(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unnamed>")
        .to_string()
}
