use crate::constants::{cache_ttl, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Freshness window for cached player statistics, in seconds.
    #[serde(default = "default_player_stats_ttl")]
    pub player_stats_ttl_seconds: u64,
    /// Freshness window for scraped news, sentiment and images, in seconds.
    #[serde(default = "default_scraping_ttl")]
    pub scraping_ttl_seconds: u64,
    /// Whether simulated backend calls sleep for their artificial latency.
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
    /// Probability in [0, 1] that a simulated backend call fails.
    #[serde(default)]
    pub failure_rate: f64,
    /// Seed for the random source. A random seed is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

fn default_player_stats_ttl() -> u64 {
    cache_ttl::PLAYER_STATS_SECONDS
}

fn default_scraping_ttl() -> u64 {
    cache_ttl::SCRAPED_DATA_SECONDS
}

fn default_simulate_latency() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            player_stats_ttl_seconds: default_player_stats_ttl(),
            scraping_ttl_seconds: default_scraping_ttl(),
            simulate_latency: default_simulate_latency(),
            failure_rate: 0.0,
            rng_seed: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the defaults.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `GRIDIRON_LOG_FILE` - Override log file path
    /// - `GRIDIRON_SEED` - Seed the random source
    /// - `GRIDIRON_FAILURE_RATE` - Inject simulated backend failures
    /// - `GRIDIRON_NO_LATENCY` - Skip simulated latency when set
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration stored at `path` without environment
    /// overrides, falling back to defaults when the file is missing.
    pub async fn load_stored(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies environment variable overrides on top of the loaded values.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(seed) = std::env::var(env_vars::SEED)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.rng_seed = Some(seed);
        }

        if let Some(rate) = std::env::var(env_vars::FAILURE_RATE)
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
        {
            self.failure_rate = rate;
        }

        if std::env::var(env_vars::NO_LATENCY).is_ok() {
            self.simulate_latency = false;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            self.player_stats_ttl_seconds,
            self.scraping_ttl_seconds,
            self.failure_rate,
            &self.log_file_path,
        )
    }

    pub fn player_stats_ttl(&self) -> Duration {
        Duration::from_secs(self.player_stats_ttl_seconds)
    }

    pub fn scraping_ttl(&self) -> Duration {
        Duration::from_secs(self.scraping_ttl_seconds)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using defaults)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Player Stats Cache TTL:");
        println!("{} seconds", config.player_stats_ttl_seconds);
        println!("────────────────────────────────────");
        println!("Scraping Cache TTL:");
        println!("{} seconds", config.scraping_ttl_seconds);
        println!("────────────────────────────────────");
        println!("Simulated Latency:");
        println!("{}", if config.simulate_latency { "on" } else { "off" });
        println!("────────────────────────────────────");
        println!("Failure Rate:");
        println!("{:.2}", config.failure_rate);
        println!("────────────────────────────────────");
        println!("Random Seed:");
        match config.rng_seed {
            Some(seed) => println!("{seed}"),
            None => println!("(random)"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy().to_string();

        let config = Config {
            log_file_path: Some("/tmp/gridiron.log".to_string()),
            player_stats_ttl_seconds: 60,
            scraping_ttl_seconds: 120,
            simulate_latency: false,
            failure_rate: 0.25,
            rng_seed: Some(42),
        };
        config.save_to_path(&config_path_str).await.unwrap();

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_config_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "rng_seed = 7\n").await.unwrap();

        let loaded = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(loaded.rng_seed, Some(7));
        assert_eq!(loaded.player_stats_ttl_seconds, cache_ttl::PLAYER_STATS_SECONDS);
        assert_eq!(loaded.scraping_ttl_seconds, cache_ttl::SCRAPED_DATA_SECONDS);
        assert!(loaded.simulate_latency);
        assert_eq!(loaded.failure_rate, 0.0);
        assert!(loaded.log_file_path.is_none());
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "player_stats_ttl_seconds = \"soon\"")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_default_ttls() {
        let config = Config::default();
        assert_eq!(config.player_stats_ttl(), Duration::from_secs(300));
        assert_eq!(config.scraping_ttl(), Duration::from_secs(900));
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var(env_vars::SEED, "1234");
            std::env::set_var(env_vars::FAILURE_RATE, "0.5");
            std::env::set_var(env_vars::NO_LATENCY, "1");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::SEED);
            std::env::remove_var(env_vars::FAILURE_RATE);
            std::env::remove_var(env_vars::NO_LATENCY);
        }

        assert_eq!(config.rng_seed, Some(1234));
        assert_eq!(config.failure_rate, 0.5);
        assert!(!config.simulate_latency);
    }

    #[test]
    #[serial]
    fn test_env_overrides_ignore_garbage() {
        unsafe {
            std::env::set_var(env_vars::SEED, "not-a-number");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::SEED);
        }

        assert_eq!(config.rng_seed, None);
    }
}
