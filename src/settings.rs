use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use dotenvy::dotenv;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid config path")]
    InvalidPath,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Runtime settings for the build commands, layered from a config file and
/// the environment (so DATABASE_URL can come from a .env file or the shell).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub data_dir: PathBuf,
    pub default_protein_state: String,
    pub default_numbering_scheme: String,
}

impl Settings {
    pub fn load(config_file: &Path) -> Result<Self, SettingsError> {
        dotenv().ok();
        let config_file = config_file.to_str().ok_or(SettingsError::InvalidPath)?;
        let settings = ConfigBuilder::<DefaultState>::default()
            .add_source(File::with_name(config_file))
            .add_source(Environment::default())
            .build()?;

        Ok(Settings {
            database_url: settings.get("database_url")?,
            data_dir: PathBuf::from(settings.get::<String>("data_dir")?),
            default_protein_state: settings.get("default_protein_state")?,
            default_numbering_scheme: settings.get("default_numbering_scheme")?,
        })
    }

    // Source file locations, fixed relative to the data directory.

    pub fn resources_file(&self) -> PathBuf {
        self.data_dir.join("common_data").join("resources.txt")
    }

    pub fn ligands_file(&self) -> PathBuf {
        self.data_dir.join("ligand_data").join("ligands.yaml")
    }

    pub fn publications_file(&self) -> PathBuf {
        self.data_dir.join("publications_data").join("publications.yaml")
    }

    pub fn documentation_dir(&self) -> PathBuf {
        self.data_dir.join("documentation")
    }

    pub fn news_dir(&self) -> PathBuf {
        self.data_dir.join("news")
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.data_dir.join("pages")
    }

    pub fn segments_file(&self) -> PathBuf {
        self.data_dir.join("protein_data").join("segments.txt")
    }

    pub fn numbering_schemes_file(&self) -> PathBuf {
        self.data_dir
            .join("residue_data")
            .join("generic_numbers")
            .join("schemes.txt")
    }

    pub fn anomalies_dir(&self) -> PathBuf {
        self.data_dir.join("structure_data").join("anomalies")
    }

    pub fn constructs_dir(&self) -> PathBuf {
        self.data_dir.join("structure_data").join("constructs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_settings_from_file() {
        std::env::remove_var("DATABASE_URL");
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "database_url = \"test.sqlite3\"").unwrap();
        writeln!(file, "data_dir = \"testdata\"").unwrap();
        writeln!(file, "default_protein_state = \"inactive\"").unwrap();
        writeln!(file, "default_numbering_scheme = \"generic\"").unwrap();

        let settings = Settings::load(&config_path).unwrap();
        assert_eq!(settings.database_url, "test.sqlite3");
        assert_eq!(
            settings.resources_file(),
            PathBuf::from("testdata/common_data/resources.txt")
        );
        assert_eq!(
            settings.constructs_dir(),
            PathBuf::from("testdata/structure_data/constructs")
        );
    }
}
