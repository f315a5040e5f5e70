use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod credentials;
pub mod paths;
pub mod validation;

pub use credentials::Credentials;
use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
///
/// Every field has a default, so an empty or missing config file is valid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the primary contest API (clist.by v4), without the `/contest/` suffix.
    pub api_base_url: String,
    /// Base URL of the secondary contest site (vjudge.net).
    pub secondary_base_url: String,
    /// Owner whose most recent secondary contest is offered as the bonus entry.
    pub secondary_owner: String,
    /// Hours added to primary start timestamps before they are announced.
    pub time_offset_hours: i64,
    /// First line of every announcement.
    pub greeting: String,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: constants::primary::DEFAULT_BASE_URL.to_string(),
            secondary_base_url: constants::secondary::DEFAULT_BASE_URL.to_string(),
            secondary_owner: constants::secondary::DEFAULT_OWNER.to_string(),
            time_offset_hours: constants::primary::DEFAULT_TIME_OFFSET_HOURS,
            greeting: constants::announcement::DEFAULT_GREETING.to_string(),
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    ///
    /// # Environment Variables
    /// - `CONTEST_REMINDER_API_BASE_URL` - Override primary API base URL
    /// - `CONTEST_REMINDER_SECONDARY_BASE_URL` - Override secondary site base URL
    /// - `CONTEST_REMINDER_LOG_FILE` - Override log file path
    /// - `CONTEST_REMINDER_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Notes
    /// - A missing config file means defaults; nothing is prompted because stdout
    ///   is read by whatever consumes the announcements
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from(&get_config_path()).await
    }

    /// Loads the file at `path` (or defaults if absent), applies environment
    /// overrides and validates the result.
    pub async fn load_from(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(secondary_base_url) = std::env::var(env_vars::SECONDARY_BASE_URL) {
            self.secondary_base_url = secondary_base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            &self.secondary_base_url,
            self.http_timeout_seconds,
            &self.greeting,
            &self.log_file_path,
        )
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing slashes
    /// from the base URLs so paths can be appended verbatim.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let normalized = Config {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            secondary_base_url: self.secondary_base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        };
        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Writes the current configuration in a human-readable block.
    ///
    /// Credentials are shown only if present in the environment, with the key masked.
    pub fn write_summary<W: std::io::Write>(
        &self,
        out: &mut W,
        config_path: &str,
        credentials: Option<&Credentials>,
    ) -> std::io::Result<()> {
        let rule = "────────────────────────────────────";
        writeln!(out, "\nCurrent Configuration")?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Config Location:")?;
        if Path::new(config_path).exists() {
            writeln!(out, "{config_path}")?;
        } else {
            writeln!(out, "{config_path} (not created, using defaults)")?;
        }
        writeln!(out, "{rule}")?;
        writeln!(out, "Contest API:")?;
        writeln!(out, "{}", self.api_base_url)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Secondary Source:")?;
        writeln!(out, "{} (owner: {})", self.secondary_base_url, self.secondary_owner)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Start Time Offset:")?;
        writeln!(out, "{} hours", self.time_offset_hours)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "HTTP Timeout:")?;
        writeln!(out, "{} seconds", self.http_timeout_seconds)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Credentials:")?;
        match credentials {
            Some(credentials) => writeln!(
                out,
                "{} / {}",
                credentials.username,
                credentials.masked_key()
            )?,
            None => writeln!(
                out,
                "not set ({} / {})",
                env_vars::USERNAME,
                env_vars::API_KEY
            )?,
        }
        writeln!(out, "{rule}")?;
        writeln!(out, "Log File Location:")?;
        if let Some(custom_path) = &self.log_file_path {
            writeln!(out, "{custom_path}")?;
        } else {
            writeln!(
                out,
                "{}/{}",
                get_log_dir_path(),
                constants::LOG_FILE_NAME
            )?;
            writeln!(out, "(Default location)")?;
        }
        Ok(())
    }
}
