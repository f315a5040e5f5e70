use chrono::Utc;
use clap::Parser;
use contest_reminder::cli::{Args, is_config_operation};
use contest_reminder::commands::{
    Command, handle_config_update_command, handle_list_config_command, run_command,
};
use contest_reminder::config::{Config, Credentials};
use contest_reminder::data_fetcher::ContestApi;
use contest_reminder::data_fetcher::processors::DisplayZone;
use contest_reminder::error::AppError;
use contest_reminder::logging::setup_logging;
use contest_reminder::presenter::Presenter;
use std::io::{Write, stdout};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = Config::load().await;

    // Logging comes up even with a broken config so the failure is recorded
    let (log_file_path, _guard) = setup_logging(&args, config.as_ref().ok()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let mut out = stdout();

    if is_config_operation(&args) && !args.list_config {
        handle_config_update_command(&args, &Config::get_config_path(), &mut out).await?;
        return Ok(());
    }

    let config = config.inspect_err(|e| tracing::error!("Failed to load config: {e}"))?;

    if args.list_config {
        handle_list_config_command(&config, &mut out)?;
        return Ok(());
    }

    let credentials =
        Credentials::from_env().inspect_err(|e| tracing::error!("Startup failed: {e}"))?;

    let presenter = Presenter::from_config(&config, DisplayZone::Local);
    let api = ContestApi::new(config, credentials)?;

    let command = Command::from_args(&args);
    run_command(&command, &api, &presenter, &mut out, Utc::now()).await?;
    out.flush()?;

    Ok(())
}
