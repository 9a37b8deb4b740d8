//! Configuration management for taskheap.
//!
//! Settings live in a JSON file inside the platform-specific application data
//! directory. A missing file is not an error: every setting has a default, so
//! the application works without running `taskheap init` first.
//!
//! ## Settings
//!
//! - **default_priority**: priority used by `taskheap add` when `-p` is omitted
//! - **show_completed**: whether `taskheap list` shows completed tasks by default
//! - **validation**: the rules applied to new task drafts
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskheap::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.default_priority = 1;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::task::{PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Rules applied to task drafts before they are turned into tasks.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum title length in characters, measured after trimming.
    pub min_title_length: usize,

    /// Maximum description length in characters, measured after trimming.
    pub max_description_length: usize,

    /// Accept due dates before today.
    pub allow_past_due_dates: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            min_title_length: 3,
            max_description_length: 500,
            allow_past_due_dates: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Priority assigned to new tasks when none is given.
    pub default_priority: i64,

    /// Include completed tasks in listings unless a status filter is given.
    pub show_completed: bool,

    pub validation: ValidationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_priority: PRIORITY_MEDIUM,
            show_completed: true,
            validation: ValidationConfig::default(),
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigWizardHeader, true);

        let default_priority: i64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .default(current.default_priority)
            .validate_with(|value: &i64| -> std::result::Result<(), String> {
                if (PRIORITY_HIGH..=PRIORITY_LOW).contains(value) {
                    Ok(())
                } else {
                    Err(Message::PriorityRange.to_string())
                }
            })
            .interact_text()?;

        let show_completed = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptShowCompleted.to_string())
            .default(current.show_completed)
            .interact()?;

        let min_title_length = Input::with_theme(&theme)
            .with_prompt(Message::PromptMinTitleLength.to_string())
            .default(current.validation.min_title_length)
            .interact_text()?;

        let max_description_length = Input::with_theme(&theme)
            .with_prompt(Message::PromptMaxDescriptionLength.to_string())
            .default(current.validation.max_description_length)
            .interact_text()?;

        let allow_past_due_dates = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptAllowPastDueDates.to_string())
            .default(current.validation.allow_past_due_dates)
            .interact()?;

        Ok(Config {
            default_priority,
            show_completed,
            validation: ValidationConfig {
                min_title_length,
                max_description_length,
                allow_past_due_dates,
            },
        })
    }
}
