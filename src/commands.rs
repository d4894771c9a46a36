use crate::app::App;
use crate::cli::{Args, View};
use crate::config::Config;
use crate::display;
use crate::error::AppError;
use std::io::{stderr, stdout};
use tracing::info;

/// Validates command line argument combinations and picks the view to show.
///
/// Returns an error if more than one view is requested.
pub fn validate_args(args: &Args) -> Result<View, AppError> {
    let mut views = args.requested_views();
    match views.len() {
        0 => Ok(View::Dashboard),
        1 => Ok(views.remove(0)),
        _ => Err(AppError::config_error(format!(
            "Only one view can be shown at a time, got {}",
            views.len()
        ))),
    }
}

/// Applies per-run command line overrides on top of the loaded config
pub fn apply_arg_overrides(config: &mut Config, args: &Args) {
    if let Some(seed) = args.seed {
        config.rng_seed = Some(seed);
    }
    if args.instant {
        config.simulate_latency = false;
    }
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(&Config::get_config_path(), args).await
}

/// Applies the update flags to the config file at `path` and saves it.
///
/// Environment overrides are not written back. A missing or unreadable
/// config file is replaced by defaults carrying the change.
pub async fn update_config_file(path: &str, args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored(path).await.unwrap_or_default();

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(path).await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Shows one view on stdout, followed by any notices on stderr.
pub async fn handle_view_command(args: &Args, view: &View, config: &Config) -> Result<(), AppError> {
    info!("Showing {:?}", view);
    let app = App::new(config);

    let result = app.run(view, args, &mut stdout()).await;

    let notices = app.take_notices();
    if !notices.is_empty() {
        display::write_notices(&mut stderr(), &notices)?;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::env_vars;
    use clap::Parser;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_no_view_defaults_to_dashboard() {
        let args = Args::parse_from(["gridiron_feed", "--json"]);
        assert_eq!(validate_args(&args).unwrap(), View::Dashboard);
    }

    #[test]
    fn test_single_view_selected() {
        let args = Args::parse_from(["gridiron_feed", "--sentiment", "49ers"]);
        assert_eq!(
            validate_args(&args).unwrap(),
            View::Sentiment("49ers".to_string())
        );
    }

    #[test]
    fn test_conflicting_views_rejected() {
        let args = Args::parse_from(["gridiron_feed", "--games", "--leaderboard"]);
        let err = validate_args(&args).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("Only one view"));
    }

    #[test]
    fn test_arg_overrides() {
        let mut config = Config::default();
        let args = Args::parse_from(["gridiron_feed", "--seed", "7", "--instant"]);
        apply_arg_overrides(&mut config, &args);
        assert_eq!(config.rng_seed, Some(7));
        assert!(!config.simulate_latency);

        let mut untouched = Config {
            rng_seed: Some(3),
            ..Config::default()
        };
        apply_arg_overrides(&mut untouched, &Args::parse_from(["gridiron_feed"]));
        assert_eq!(untouched.rng_seed, Some(3));
        assert!(untouched.simulate_latency);
    }

    #[tokio::test]
    #[serial]
    async fn test_config_update_keeps_env_overrides_out_of_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        let path = path.to_string_lossy().to_string();
        Config {
            rng_seed: Some(3),
            ..Config::default()
        }
        .save_to_path(&path)
        .await
        .unwrap();

        unsafe {
            std::env::set_var(env_vars::FAILURE_RATE, "1");
            std::env::set_var(env_vars::SEED, "99");
            std::env::set_var(env_vars::NO_LATENCY, "1");
        }
        let args = Args::parse_from(["gridiron_feed", "--set-log-file", "/tmp/gridiron.log"]);
        let result = update_config_file(&path, &args).await;
        unsafe {
            std::env::remove_var(env_vars::FAILURE_RATE);
            std::env::remove_var(env_vars::SEED);
            std::env::remove_var(env_vars::NO_LATENCY);
        }
        result.unwrap();

        let saved = Config::load_from_path(&path).await.unwrap();
        assert_eq!(saved.log_file_path.as_deref(), Some("/tmp/gridiron.log"));
        assert_eq!(saved.failure_rate, 0.0);
        assert_eq!(saved.rng_seed, Some(3));
        assert!(saved.simulate_latency);
    }

    #[tokio::test]
    async fn test_config_update_creates_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("fresh").join("config.toml");
        let path = path.to_string_lossy().to_string();

        let args = Args::parse_from(["gridiron_feed", "--clear-log-file"]);
        update_config_file(&path, &args).await.unwrap();
        assert_eq!(Config::load_from_path(&path).await.unwrap(), Config::default());
    }
}
