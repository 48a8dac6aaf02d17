//! Store handle: opens the SQLite database and brings its schema up to date.

use crate::db::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "taskdeck.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database, applying any pending migrations.
    ///
    /// The file location defaults to the platform data directory and can be
    /// overridden through the configuration. Foreign keys are enabled per
    /// connection so the association-table cascades take effect.
    pub fn new() -> Result<Db> {
        let mut conn = Connection::open(Self::path()?)?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        conn.pragma_update(None, "foreign_keys", true)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    fn path() -> Result<PathBuf> {
        if let Some(db_file) = Config::read()?.db_file {
            return Ok(db_file);
        }
        DataStorage::new().get_path(DB_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))
    }
}
