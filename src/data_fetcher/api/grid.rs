//! GRID Central Data and Statistics Feed client

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use super::fetch_utils::post_graphql;
use crate::data_fetcher::models::Game;
use crate::error::AppError;

const TEAM_ID_PREFIX: &str = "TeamID:";

/// Win percentage assumed when the feed reports no winning games entry
pub const DEFAULT_WIN_PERCENTAGE: f64 = 50.0;

const SEARCH_TEAM_QUERY: &str = r#"
query SearchTeam($titleId: Int!) {
  teams(titleId: $titleId, first: 100) {
    id
    name
  }
}
"#;

const TEAM_STATISTICS_QUERY: &str = r#"
query TeamStatisticsForLastThreeMonths($teamId: ID!) {
  teamStatistics(teamId: $teamId, filter: { timeWindow: LAST_3_MONTHS }) {
    id
    aggregationSeriesIds
    series {
      count
      kills { sum min max avg }
    }
    game {
      count
      kills { sum min max avg }
      deaths { sum avg }
      wins {
        value
        count
        percentage
        streak { min max current }
      }
    }
    segment {
      type
      count
      deaths { sum min max avg }
    }
  }
}
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct TeamsData {
    #[serde(default)]
    teams: Vec<TeamRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Aggregate {
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Streak {
    pub min: u32,
    pub max: u32,
    pub current: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WinStatistic {
    pub value: bool,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub streak: Streak,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeriesStatistics {
    pub count: u32,
    pub kills: Aggregate,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameStatistics {
    pub count: u32,
    pub kills: Aggregate,
    pub deaths: Aggregate,
    pub wins: Vec<WinStatistic>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SegmentStatistics {
    #[serde(rename = "type")]
    pub segment_type: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub deaths: Aggregate,
}

/// Aggregated statistics for one team over the last three months
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatistics {
    pub id: String,
    #[serde(default)]
    pub aggregation_series_ids: Vec<String>,
    #[serde(default)]
    pub series: SeriesStatistics,
    #[serde(default)]
    pub game: GameStatistics,
    #[serde(default)]
    pub segment: Vec<SegmentStatistics>,
}

impl TeamStatistics {
    /// Percentage (0-100) of games won, from the `wins` entry whose value is `true`
    pub fn win_percentage(&self) -> f64 {
        self.game
            .wins
            .iter()
            .find(|w| w.value)
            .map(|w| w.percentage)
            .unwrap_or(DEFAULT_WIN_PERCENTAGE)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamStatisticsData {
    team_statistics: Option<TeamStatistics>,
}

/// Returns the numeric team id when the identifier is one (`"83"` or `"TeamID:83"`).
pub fn parse_team_id(identifier: &str) -> Option<&str> {
    let trimmed = identifier.trim();
    let candidate = trimmed.strip_prefix(TEAM_ID_PREFIX).unwrap_or(trimmed).trim();
    (!candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_digit())).then_some(candidate)
}

/// Client for the two GRID GraphQL endpoints
#[derive(Debug, Clone)]
pub struct GridClient {
    client: Client,
    stats_url: String,
    central_data_url: String,
    api_key: String,
}

impl GridClient {
    pub fn new(
        client: Client,
        stats_url: impl Into<String>,
        central_data_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            stats_url: stats_url.into(),
            central_data_url: central_data_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Turns a team identifier into a GRID team id.
    ///
    /// Numeric identifiers are used as-is; anything else is matched
    /// case-insensitively as a substring of the first 100 team names of
    /// the game's title.
    #[instrument(skip(self))]
    pub async fn resolve_team_id(&self, game: Game, identifier: &str) -> Result<String, AppError> {
        if let Some(id) = parse_team_id(identifier) {
            return Ok(id.to_string());
        }

        let data: TeamsData = post_graphql(
            &self.client,
            &self.central_data_url,
            &self.api_key,
            SEARCH_TEAM_QUERY,
            json!({ "titleId": game.title_id() }),
        )
        .await?;

        let needle = identifier.trim().to_lowercase();
        match data
            .teams
            .iter()
            .find(|team| team.name.to_lowercase().contains(&needle))
        {
            Some(team) => {
                info!("Resolved team '{}' to {} (ID: {})", identifier, team.name, team.id);
                Ok(team.id.clone())
            }
            None => {
                warn!(
                    "Team '{}' not found among {} {} teams",
                    identifier,
                    data.teams.len(),
                    game
                );
                Err(AppError::team_not_found(
                    identifier,
                    game.display_name(),
                    data.teams.len(),
                ))
            }
        }
    }

    /// Fetches last-three-months statistics for a team id.
    ///
    /// A missing statistics object or zero recorded games is
    /// [`AppError::ApiNoData`].
    #[instrument(skip(self))]
    pub async fn fetch_team_statistics(&self, team_id: &str) -> Result<TeamStatistics, AppError> {
        let data: TeamStatisticsData = post_graphql(
            &self.client,
            &self.stats_url,
            &self.api_key,
            TEAM_STATISTICS_QUERY,
            json!({ "teamId": team_id }),
        )
        .await?;

        let stats = data.team_statistics.ok_or_else(|| {
            AppError::api_no_data(format!("No statistics for team {team_id}"), &self.stats_url)
        })?;

        if stats.game.count == 0 {
            return Err(AppError::api_no_data(
                format!("Team {team_id} has no games in the last three months"),
                &self.stats_url,
            ));
        }

        info!(
            "Stats: {} series, {} games, {:.1}% win rate",
            stats.series.count,
            stats.game.count,
            stats.win_percentage()
        );
        Ok(stats)
    }
}
