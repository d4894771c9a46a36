// src/main.rs
use clap::Parser;
use gridiron_feed::cli::{Args, is_config_operation};
use gridiron_feed::commands::{
    apply_arg_overrides, handle_config_update_command, handle_list_config_command,
    handle_view_command, validate_args,
};
use gridiron_feed::config::Config;
use gridiron_feed::error::AppError;
use gridiron_feed::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations before touching the filesystem
    let view = validate_args(&args)?;

    // Logging must not depend on a valid config, only on its log path
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);
    let (log_file_path, _guard) = setup_logging(&args, config_log_path.as_deref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    // Load config to fail early if there's an issue
    let mut config = Config::load().await?;
    apply_arg_overrides(&mut config, &args);

    handle_view_command(&args, &view, &config).await
}
