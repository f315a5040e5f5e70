use crate::error::AppError;
use std::path::Path;

/// Validates a base URL setting.
///
/// Base URLs must carry an explicit http(s) scheme and a host; a trailing slash is
/// tolerated because callers trim it when joining paths.
pub fn validate_base_url(name: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            AppError::config_error(format!("{name} must start with http:// or https://"))
        })?;

    let host = rest.split(['/', ':']).next().unwrap_or_default();
    if host.is_empty() || (!host.contains('.') && host != "localhost" && host != "127.0.0.1") {
        return Err(AppError::config_error(format!(
            "{name} must contain a valid host name"
        )));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Both base URLs must be valid http(s) URLs
/// - HTTP timeout must be at least one second
/// - Greeting cannot be blank
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(
    api_base_url: &str,
    secondary_base_url: &str,
    http_timeout_seconds: u64,
    greeting: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_base_url("api_base_url", api_base_url)?;
    validate_base_url("secondary_base_url", secondary_base_url)?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "http_timeout_seconds must be greater than zero",
        ));
    }

    if greeting.trim().is_empty() {
        return Err(AppError::config_error("greeting cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
