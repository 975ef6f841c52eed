use crate::data_fetcher::models::Game;
use crate::report::LlmProvider;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

fn parse_match_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("match count must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(format!("invalid match count '{value}': {e}")),
    }
}

/// True when the invocation only manages configuration and should not scout.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Vanguard Scout - Moneyball for Esports
///
/// Analyzes a League of Legends or VALORANT team's recent matches and prints
/// a scouting dashboard with a game plan to beat them.
///
/// Statistics come from mock data by default. With --live they are fetched
/// from GRID; if that fails the dashboard says so and falls back to mock data.
///
/// API keys are looked up in order: secrets.toml in the config directory,
/// environment variables (GRID_API_KEY, OPENAI_API_KEY, GOOGLE_API_KEY,
/// OPENROUTER_API_KEY), then the key flags or --ask-keys prompts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    /// Game to scout: lol or valorant. Defaults to the configured game.
    #[arg(short = 'g', long = "game", help_heading = "Scouting")]
    pub game: Option<Game>,

    /// Team name or GRID team id (e.g. 83 or TeamID:83).
    #[arg(short = 't', long = "team", help_heading = "Scouting", default_value = crate::constants::DEFAULT_TEAM)]
    pub team: String,

    /// Number of recent matches to analyze. Defaults to the configured count.
    #[arg(short = 'm', long = "matches", help_heading = "Scouting", value_parser = parse_match_count)]
    pub matches: Option<usize>,

    /// Fetch statistics from GRID instead of generating mock data.
    #[arg(long = "live", help_heading = "Scouting")]
    pub live: bool,

    /// Seed for the mock data generator, for reproducible dashboards.
    #[arg(long = "seed", help_heading = "Scouting")]
    pub seed: Option<u64>,

    /// Report writer: mock (offline template), openai, gemini or openrouter.
    #[arg(short = 'p', long = "provider", help_heading = "Report", default_value = "mock")]
    pub provider: LlmProvider,

    /// Write the scouting report as Markdown. Without a value the file is
    /// named scouting_report_<team>_<game>.md in the current directory.
    #[arg(
        short = 'o',
        long = "output",
        help_heading = "Report",
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub output: Option<String>,

    /// GRID API key, used when no other source provides one.
    #[arg(long = "grid-api-key", help_heading = "Credentials", value_name = "KEY")]
    pub grid_api_key: Option<String>,

    /// API key for the selected report provider, used when no other source provides one.
    #[arg(long = "llm-api-key", help_heading = "Credentials", value_name = "KEY")]
    pub llm_api_key: Option<String>,

    /// Prompt for any key that is still missing after the other sources.
    #[arg(long = "ask-keys", help_heading = "Credentials")]
    pub ask_keys: bool,

    /// Plain output without colours.
    #[arg(long = "plain", help_heading = "Display Options")]
    pub plain: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror logs to the terminal in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["vanguard_scout"]);
        assert_eq!(args.team, "83");
        assert_eq!(args.game, None);
        assert_eq!(args.matches, None);
        assert_eq!(args.provider, LlmProvider::Mock);
        assert!(!args.live);
        assert!(args.output.is_none());
        assert!(!is_config_command(&args));
    }

    #[test]
    fn test_scouting_flags() {
        let args = Args::parse_from([
            "vanguard_scout",
            "--game",
            "valorant",
            "--team",
            "Sentinels",
            "--matches",
            "15",
            "--live",
            "--provider",
            "openrouter",
            "--seed",
            "7",
            "--output",
        ]);
        assert_eq!(args.game, Some(Game::Valorant));
        assert_eq!(args.team, "Sentinels");
        assert_eq!(args.matches, Some(15));
        assert!(args.live);
        assert_eq!(args.provider, LlmProvider::OpenRouter);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output.as_deref(), Some(""));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Args::try_parse_from(["vanguard_scout", "--matches", "0"]).is_err());
        assert!(Args::try_parse_from(["vanguard_scout", "--game", "dota"]).is_err());
        assert!(Args::try_parse_from(["vanguard_scout", "--provider", "claude"]).is_err());
    }

    #[test]
    fn test_config_commands() {
        let args = Args::parse_from(["vanguard_scout", "--list-config"]);
        assert!(is_config_command(&args));
        let args = Args::parse_from(["vanguard_scout", "--clear-log-file"]);
        assert!(is_config_command(&args));
    }
}
