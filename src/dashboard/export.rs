//! Markdown export of the scouting report.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::data_fetcher::models::Game;
use crate::error::AppError;

/// `scouting_report_<team>_<LoL|VALORANT>.md`, with path separators in the
/// team name replaced.
pub fn default_file_name(team: &str, game: Game) -> String {
    let suffix = match game {
        Game::LeagueOfLegends => "LoL",
        Game::Valorant => "VALORANT",
    };
    let team: String = team
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();
    format!("scouting_report_{team}_{suffix}.md")
}

/// Where `--output` writes: the given path, or the default name in the
/// current directory when the flag had no value.
pub fn output_path(requested: &str, team: &str, game: Game) -> PathBuf {
    if requested.trim().is_empty() {
        PathBuf::from(default_file_name(team, game))
    } else {
        PathBuf::from(requested)
    }
}

/// Writes the report text as-is.
pub async fn export_report(path: &Path, report: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, report).await?;
    info!("Scouting report written to {}", path.display());
    Ok(())
}
