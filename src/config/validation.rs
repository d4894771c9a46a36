use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Cache TTLs must be greater than zero
/// - Failure rate must be within [0, 1]
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    player_stats_ttl_seconds: u64,
    scraping_ttl_seconds: u64,
    failure_rate: f64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if player_stats_ttl_seconds == 0 {
        return Err(AppError::config_error(
            "Player stats cache TTL must be greater than zero",
        ));
    }

    if scraping_ttl_seconds == 0 {
        return Err(AppError::config_error(
            "Scraping cache TTL must be greater than zero",
        ));
    }

    if !(0.0..=1.0).contains(&failure_rate) {
        return Err(AppError::config_error(format!(
            "Failure rate must be between 0 and 1, got {failure_rate}"
        )));
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
