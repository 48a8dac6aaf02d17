//! Configuration management for the taskdeck application.
//!
//! Settings are stored as JSON in the platform data directory. The only
//! tunable today is an optional database file override, which keeps the
//! store out of the default data directory when users want the task list
//! somewhere synchronized or shared between machines.
//!
//! `Config::init()` runs the interactive setup wizard used by the `init`
//! command; `Config::read()` falls back to defaults when no file exists so
//! a missing configuration never blocks normal operation.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Optional override for the SQLite database file location.
    ///
    /// When unset, the database lives next to the configuration file in
    /// the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_file: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration, returning defaults when no file exists.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Writes the configuration to the data directory.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        msg_print!(Message::ConfigInitHeader, true);

        let default_path = current.db_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
        let db_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(default_path)
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            db_file: if db_file.is_empty() { None } else { Some(PathBuf::from(db_file)) },
        })
    }
}
