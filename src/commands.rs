use crate::cli::Args;
use crate::config::Config;
use crate::dashboard::{dashboard_page, error_page, export_report, output_path};
use crate::error::AppError;
use crate::pipeline::{self, ScoutRequest};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use tracing::{error, info};

const TERMINAL_TITLE: &str = "Vanguard Scout";

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await
}

/// Handles --set-log-file and --clear-log-file.
///
/// Starts from the current configuration, or defaults when it cannot be
/// loaded, and saves the result.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Combines command line flags with configured defaults.
pub fn scout_request(args: &Args, config: &Config) -> ScoutRequest {
    ScoutRequest {
        game: args.game.unwrap_or(config.default_game),
        team: args.team.trim().to_string(),
        count: args.matches.unwrap_or(config.default_match_count),
        live: args.live,
        seed: args.seed,
        provider: args.provider,
        grid_api_key: args.grid_api_key.clone(),
        llm_api_key: args.llm_api_key.clone(),
        ask_keys: args.ask_keys,
    }
}

/// Runs one scouting pass and renders the dashboard.
///
/// Returns `Ok(false)` when the run failed and the error page was shown;
/// the caller turns that into a non-zero exit status.
pub async fn handle_scout_command(args: &Args, config: &Config) -> Result<bool, AppError> {
    let request = scout_request(args, config);
    let mut stdout = stdout();
    if !args.plain {
        execute!(stdout, SetTitle(TERMINAL_TITLE))?;
    }

    match pipeline::run(&request, config).await {
        Ok(run) => {
            dashboard_page(&run.analysis, &run.report).render(&mut stdout, args.plain)?;

            if let Some(requested) = &args.output {
                let path = output_path(requested, &request.team, run.analysis.context.game);
                export_report(&path, &run.report.text).await?;
                println!("\nScouting report saved to {}", path.display());
            }
            info!("Scouting run for {} finished", request.team);
            Ok(true)
        }
        Err(failure) => {
            error!("Scouting run failed: {}", failure.error);
            error_page(failure.analysis.as_deref(), &failure.error)
                .render(&mut stdout, args.plain)?;
            Ok(false)
        }
    }
}
