//! Application configuration.
//!
//! Stored as pretty-printed JSON in `config.json` inside the platform data
//! directory (see [`DataStorage`]). A missing file means defaults, so the
//! tool works without running `init` first.
//!
//! ```rust,no_run
//! use todo_list::libs::config::Config;
//!
//! let config = Config::read()?;
//! let task_file = config.data_path()?;
//! println!("{}", task_file.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::task::Priority;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Task file used when `data_file` is not configured.
pub const DEFAULT_DATA_FILE_NAME: &str = "tasks.csv";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Working task file; defaults to `tasks.csv` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Category used by `add` when none is given.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Priority used by `add` when none is given.
    #[serde(default = "default_priority")]
    pub default_priority: Priority,
}

fn default_category() -> String {
    "General".to_string()
}

fn default_priority() -> Priority {
    Priority::Medium
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            default_category: default_category(),
            default_priority: default_priority(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError.to_string())?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file; `false` when there was none.
    pub fn reset() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Resolved path of the working task file.
    pub fn data_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DEFAULT_DATA_FILE_NAME)?),
        }
    }

    /// Interactive setup, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        msg_print!(Message::ConfigFileLocation(current.data_path()?.display().to_string()), true);

        let data_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataFile.to_string())
            .default(current.data_path()?.display().to_string())
            .interact_text()?;

        let default_category: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultCategory.to_string())
            .default(current.default_category.clone())
            .interact_text()?;

        let priorities: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
        let selected = Priority::ALL.iter().position(|p| *p == current.default_priority).unwrap_or(1);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .items(&priorities)
            .default(selected)
            .interact()?;

        let default_data_path = DataStorage::new().get_path(DEFAULT_DATA_FILE_NAME)?;
        let data_file = PathBuf::from(data_file);

        Ok(Config {
            data_file: if data_file == default_data_path { None } else { Some(data_file) },
            default_category,
            default_priority: Priority::ALL[selection],
        })
    }
}
