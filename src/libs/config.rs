//! Configuration management for the classwork application.
//!
//! Settings live in a pretty-printed `config.json` inside the per-user data
//! directory resolved by [`DataStorage`]. A missing file is not an error: the
//! application runs on defaults until `classwork init` writes one.
//!
//! ## Configuration Structure
//!
//! - **Server Config**: bind host and port of the book catalog API
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use classwork::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let server = config.server.unwrap_or_default();
//! println!("Book API address: {}", server.address());
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Socket address in `host:port` form, as accepted by `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard, prefilled with the current values.
    pub fn init() -> Result<Self> {
        // A broken config file should not block the wizard that repairs it
        let mut config = Self::read().unwrap_or_default();

        let default = config.server.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleServer);
        config.server = Some(ServerConfig {
            host: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerHost.to_string())
                .default(default.host)
                .interact_text()?,

            port: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerPort.to_string())
                .default(default.port)
                .interact_text()?,
        });

        Ok(config)
    }
}
