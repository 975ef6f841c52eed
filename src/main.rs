use clap::Parser;
use std::process::ExitCode;
use vanguard_scout::cli::{Args, is_config_command};
use vanguard_scout::commands::{
    handle_config_update_command, handle_list_config_command, handle_scout_command,
};
use vanguard_scout::config::Config;
use vanguard_scout::error::AppError;
use vanguard_scout::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<ExitCode, AppError> {
    let args = Args::parse();

    if is_config_command(&args) {
        if args.list_config {
            handle_list_config_command().await?;
        } else {
            handle_config_update_command(&args).await?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if handle_scout_command(&args, &config).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
