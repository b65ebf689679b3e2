//! The storage boundary. All SQL lives here: every entity gets `find_*`
//! lookups by its natural key and `get_or_create_*` operations returning
//! `(record, created)`. Get-or-create never overwrites an existing record;
//! natural-key uniqueness is enforced by the schema, not by the callers.

mod common;
mod ligand;
mod protein;
mod residue;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Error connecting to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: diesel::ConnectionError,
    },

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
}

pub struct Store {
    conn: SqliteConnection,
}

impl Store {
    /// Opens the database, enables foreign-key enforcement (the purge
    /// cascade depends on it) and applies any pending migrations.
    pub fn open(database_url: &str) -> Result<Self, StoreError> {
        let mut conn =
            SqliteConnection::establish(database_url).map_err(|source| StoreError::Connection {
                url: database_url.to_string(),
                source,
            })?;
        conn.batch_execute("PRAGMA foreign_keys = ON;")?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        Ok(Store { conn })
    }

    /// An in-memory database with the full schema, for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::open(":memory:")
    }
}
