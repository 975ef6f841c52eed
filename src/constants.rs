//! Application-wide constants and configuration values
//!
//! Endpoints, title identifiers, analysis thresholds and mock generator
//! tuning live here so the rest of the crate never carries magic numbers.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Default number of matches analysed per run
pub const DEFAULT_MATCH_COUNT: usize = 10;

/// Default team identifier (GRID team id used in the original demos)
pub const DEFAULT_TEAM: &str = "83";

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "vanguard_scout";

/// Default log file name
pub const LOG_FILE_NAME: &str = "vanguard_scout.log";

/// Remote endpoints
pub mod endpoints {
    /// GRID Central Data feed (teams, tournaments)
    pub const GRID_CENTRAL_DATA_URL: &str = "https://api-op.grid.gg/central-data/graphql";

    /// GRID Statistics feed (aggregated team statistics)
    pub const GRID_STATS_FEED_URL: &str = "https://api-op.grid.gg/statistics-feed/graphql";

    /// OpenAI API base
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

    /// Google Generative Language API base
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// OpenRouter API base
    pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
}

/// Model selectors sent to each LLM provider
pub mod models {
    pub const OPENAI_MODEL: &str = "gpt-4-turbo-preview";
    pub const OPENAI_TEMPERATURE: f64 = 0.7;
    pub const GEMINI_MODEL: &str = "gemini-pro";
    pub const OPENROUTER_MODEL: &str = "google/gemma-3-27b-it:free";
}

/// GRID numeric title identifiers
pub mod titles {
    pub const LEAGUE_OF_LEGENDS: u32 = 22;
    pub const VALORANT: u32 = 29;
}

/// Credential keys. The same names are used in `secrets.toml` and the process environment.
pub mod credential_keys {
    pub const GRID: &str = "GRID_API_KEY";
    pub const OPENAI: &str = "OPENAI_API_KEY";
    pub const GEMINI: &str = "GOOGLE_API_KEY";
    pub const OPENROUTER: &str = "OPENROUTER_API_KEY";
}

/// Environment variables overriding config file values
pub mod env_vars {
    /// Statistics feed URL override
    pub const STATS_URL: &str = "VANGUARD_STATS_URL";

    /// Central data feed URL override
    pub const CENTRAL_DATA_URL: &str = "VANGUARD_CENTRAL_DATA_URL";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "VANGUARD_HTTP_TIMEOUT";

    /// Log file path override
    pub const LOG_FILE: &str = "VANGUARD_LOG_FILE";
}

/// Analysis tuning
pub mod analysis {
    /// Number of most recent matches in the rolling window
    pub const ROLLING_WINDOW: usize = 10;

    /// Loadout value below which a round counts as an eco round
    pub const ECO_LOADOUT_MAX: u32 = 2000;

    /// Loadout value from which a round counts as a full buy
    pub const FULL_BUY_LOADOUT_MIN: u32 = 3500;

    /// Gold snapshot windows in seconds (inclusive bounds)
    pub const GOLD_WINDOW_10: (u32, u32) = (9 * 60, 11 * 60);
    pub const GOLD_WINDOW_15: (u32, u32) = (14 * 60, 16 * 60);
    pub const GOLD_WINDOW_20: (u32, u32) = (19 * 60, 21 * 60);
}

/// Good / bad thresholds used both for strengths & weaknesses and stat card colours.
/// Each pair is `(good, bad)`; percentages are on the 0-100 scale.
pub mod thresholds {
    pub const WIN_RATE: (f64, f64) = (60.0, 40.0);
    pub const FIRST_DRAGON: (f64, f64) = (60.0, 40.0);
    pub const GOLD_AT_15: (f64, f64) = (500.0, -500.0);
    pub const ROUND_WIN_RATE: (f64, f64) = (55.0, 45.0);
    pub const FIRST_BLOOD: (f64, f64) = (55.0, 45.0);
    pub const ECO_CONVERSION: (f64, f64) = (20.0, 10.0);
}

/// Mock data generation
pub mod mock {
    /// Probability that a generated match is a win
    pub const DEFAULT_BASE_WIN_RATE: f64 = 0.7;

    /// Summoner's Rift coordinate extent
    pub const LOL_MAP_SIZE: i32 = 14820;

    /// Days between consecutive generated matches
    pub const LOL_MATCH_SPACING_DAYS: i64 = 3;
    pub const VALORANT_MATCH_SPACING_DAYS: i64 = 2;

    pub const DRAGON_TYPES: [&str; 5] = ["Cloud", "Infernal", "Ocean", "Mountain", "Elder"];

    pub const VALORANT_MAPS: [&str; 7] = [
        "Ascent", "Bind", "Haven", "Split", "Icebox", "Breeze", "Fracture",
    ];
}

/// Dashboard layout
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Width of the rendered dashboard in columns
    pub const PAGE_WIDTH: usize = 78;

    /// Widest bar drawn by the chart helpers
    pub const BAR_WIDTH: usize = 40;

    /// Jungle heat grid size in cells
    pub const HEATMAP_COLS: usize = 32;
    pub const HEATMAP_ROWS: usize = 8;

    /// Most recent matches drawn on the objective timeline
    pub const TIMELINE_MATCHES: usize = 5;
}
