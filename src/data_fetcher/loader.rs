//! Match loading with live/mock source selection and mock fallback

use std::fmt;
use std::future::Future;

use tracing::{info, instrument, warn};

use super::api::GridClient;
use super::mock::MockGenerator;
use super::models::{Game, MatchRecord};
use crate::constants::credential_keys;
use crate::error::AppError;

/// What to load: `count` most recent matches of `team` in `game`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub game: Game,
    pub team: String,
    pub count: usize,
}

impl LoadRequest {
    pub fn new(game: Game, team: impl Into<String>, count: usize) -> Self {
        Self {
            game,
            team: team.into(),
            count,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.count == 0 {
            return Err(AppError::invalid_request("match count must be positive"));
        }
        if self.team.trim().is_empty() {
            return Err(AppError::invalid_request("team identifier must not be empty"));
        }
        Ok(())
    }
}

/// Where the loaded records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    /// Mock data was requested
    Mock,
    /// GRID statistics with generated match details
    Live,
    /// GRID was requested but failed; mock data was substituted
    Fallback { reason: String },
}

impl DataOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DataOrigin::Fallback { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataOrigin::Mock => "Mock data",
            DataOrigin::Live => "GRID live statistics",
            DataOrigin::Fallback { .. } => "Mock data (GRID unavailable)",
        }
    }
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::Fallback { reason } => write!(f, "{}: {}", self.label(), reason),
            _ => f.write_str(self.label()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Team name as it should be displayed
    pub team_name: String,
    pub records: Vec<MatchRecord>,
    pub origin: DataOrigin,
}

/// A producer of match records.
pub trait MatchSource {
    /// Origin reported when this source succeeds
    fn origin(&self) -> DataOrigin;

    fn fetch(
        &mut self,
        request: &LoadRequest,
    ) -> impl Future<Output = Result<Vec<MatchRecord>, AppError>> + Send;
}

/// Synthetic records straight from a [`MockGenerator`].
pub struct MockSource {
    generator: MockGenerator,
}

impl MockSource {
    pub fn new(generator: MockGenerator) -> Self {
        Self { generator }
    }
}

impl MatchSource for MockSource {
    fn origin(&self) -> DataOrigin {
        DataOrigin::Mock
    }

    async fn fetch(&mut self, request: &LoadRequest) -> Result<Vec<MatchRecord>, AppError> {
        Ok(self
            .generator
            .generate(request.game, &request.team, request.count))
    }
}

/// GRID statistics feed. The feed only provides aggregates, so the real win
/// percentage is imposed on generated match details.
pub struct GridSource {
    grid: Option<GridClient>,
    generator: MockGenerator,
}

impl GridSource {
    /// `grid` is `None` when no GRID credential could be resolved.
    pub fn new(grid: Option<GridClient>, generator: MockGenerator) -> Self {
        Self { grid, generator }
    }
}

impl MatchSource for GridSource {
    fn origin(&self) -> DataOrigin {
        DataOrigin::Live
    }

    async fn fetch(&mut self, request: &LoadRequest) -> Result<Vec<MatchRecord>, AppError> {
        let grid = self
            .grid
            .as_ref()
            .ok_or_else(|| AppError::missing_credential(credential_keys::GRID))?;

        let team_id = grid.resolve_team_id(request.game, &request.team).await?;
        let stats = grid.fetch_team_statistics(&team_id).await?;

        let win_percentage = stats.win_percentage().clamp(0.0, 100.0);
        let wins = (request.count as f64 * win_percentage / 100.0).floor() as usize;
        info!(
            "Imposing real {:.1}% win rate: {} wins in {} matches",
            win_percentage, wins, request.count
        );

        let outcomes = self.generator.outcomes_with_wins(request.count, wins);
        let team_name = format!("Team {team_id}");
        Ok(self
            .generator
            .generate_with_outcomes(request.game, &team_name, &outcomes))
    }
}

/// Loads `request.count` records from `source`.
///
/// Precondition violations are returned as [`AppError::InvalidRequest`].
/// A source failure classified by [`AppError::is_fallback_eligible`], or a
/// source returning the wrong number of records, is replaced by records
/// from `fallback` and reported as [`DataOrigin::Fallback`]. Other errors
/// propagate.
#[instrument(skip(source, fallback))]
pub async fn load<S: MatchSource>(
    request: &LoadRequest,
    source: &mut S,
    fallback: &mut MockGenerator,
) -> Result<LoadOutcome, AppError> {
    request.validate()?;

    let reason = match source.fetch(request).await {
        Ok(records) if records.len() == request.count => {
            let origin = source.origin();
            info!("Loaded {} records ({})", records.len(), origin);
            return Ok(outcome(request, records, origin));
        }
        Ok(records) => format!(
            "source returned {} records, expected {}",
            records.len(),
            request.count
        ),
        Err(e) if e.is_fallback_eligible() => e.to_string(),
        Err(e) => return Err(e),
    };

    warn!("Falling back to mock data: {reason}");
    let records = fallback.generate(request.game, &request.team, request.count);
    Ok(outcome(request, records, DataOrigin::Fallback { reason }))
}

fn outcome(request: &LoadRequest, records: Vec<MatchRecord>, origin: DataOrigin) -> LoadOutcome {
    let team_name = records
        .first()
        .map(|r| r.team.clone())
        .unwrap_or_else(|| request.team.clone());
    LoadOutcome {
        team_name,
        records,
        origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FailingSource(fn() -> AppError);

    impl MatchSource for FailingSource {
        fn origin(&self) -> DataOrigin {
            DataOrigin::Live
        }

        async fn fetch(&mut self, _request: &LoadRequest) -> Result<Vec<MatchRecord>, AppError> {
            Err((self.0)())
        }
    }

    struct ShortSource;

    impl MatchSource for ShortSource {
        fn origin(&self) -> DataOrigin {
            DataOrigin::Live
        }

        async fn fetch(&mut self, request: &LoadRequest) -> Result<Vec<MatchRecord>, AppError> {
            Ok(MockGenerator::new(Some(1), 0.5).generate(request.game, &request.team, 2))
        }
    }

    fn fallback() -> MockGenerator {
        MockGenerator::new(Some(99), 0.7)
    }

    fn grid_source(server: &MockServer) -> GridSource {
        let grid = GridClient::new(
            create_test_http_client(),
            format!("{}/statistics-feed/graphql", server.uri()),
            format!("{}/central-data/graphql", server.uri()),
            "grid-key",
        );
        GridSource::new(Some(grid), MockGenerator::new(Some(3), 0.7))
    }

    #[tokio::test]
    async fn test_rejects_zero_count_and_empty_team() {
        let mut source = MockSource::new(MockGenerator::new(Some(1), 0.7));

        let zero = LoadRequest::new(Game::LeagueOfLegends, "83", 0);
        assert!(matches!(
            load(&zero, &mut source, &mut fallback()).await,
            Err(AppError::InvalidRequest(_))
        ));

        let blank = LoadRequest::new(Game::LeagueOfLegends, "   ", 5);
        assert!(matches!(
            load(&blank, &mut source, &mut fallback()).await,
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_source() {
        let request = LoadRequest::new(Game::Valorant, "Sentinels", 7);
        let mut source = MockSource::new(MockGenerator::new(Some(1), 0.7));

        let outcome = load(&request, &mut source, &mut fallback()).await.unwrap();
        assert_eq!(outcome.records.len(), 7);
        assert_eq!(outcome.origin, DataOrigin::Mock);
        assert_eq!(outcome.team_name, "Sentinels");
    }

    #[tokio::test]
    async fn test_failing_source_falls_back_with_exact_count() {
        let request = LoadRequest::new(Game::LeagueOfLegends, "83", 12);
        let mut source = FailingSource(|| AppError::network_timeout("https://grid.example"));

        let outcome = load(&request, &mut source, &mut fallback()).await.unwrap();
        assert_eq!(outcome.records.len(), 12);
        assert!(outcome.origin.is_fallback());
        assert!(outcome.records.iter().all(|r| r.game() == Game::LeagueOfLegends));
    }

    #[tokio::test]
    async fn test_wrong_record_count_falls_back() {
        let request = LoadRequest::new(Game::Valorant, "83", 5);
        let outcome = load(&request, &mut ShortSource, &mut fallback()).await.unwrap();
        assert_eq!(outcome.records.len(), 5);
        assert!(outcome.origin.is_fallback());
    }

    #[tokio::test]
    async fn test_non_source_errors_propagate() {
        let request = LoadRequest::new(Game::Valorant, "83", 5);
        let mut source = FailingSource(|| AppError::config_error("broken"));
        assert!(matches!(
            load(&request, &mut source, &mut fallback()).await,
            Err(AppError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_grid_without_credential_falls_back() {
        let request = LoadRequest::new(Game::LeagueOfLegends, "83", 4);
        let mut source = GridSource::new(None, MockGenerator::new(Some(2), 0.7));

        let outcome = load(&request, &mut source, &mut fallback()).await.unwrap();
        match outcome.origin {
            DataOrigin::Fallback { reason } => assert!(reason.contains("GRID_API_KEY")),
            other => panic!("Expected fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_grid_server_error_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/statistics-feed/graphql"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let request = LoadRequest::new(Game::LeagueOfLegends, "83", 10);
        let outcome = load(&request, &mut grid_source(&server), &mut fallback())
            .await
            .unwrap();
        assert_eq!(outcome.records.len(), 10);
        assert!(outcome.origin.is_fallback());
        assert_eq!(outcome.team_name, "83");
    }

    #[tokio::test]
    async fn test_grid_live_imposes_win_percentage() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/statistics-feed/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "teamStatistics": {
                    "id": "83",
                    "series": { "count": 5 },
                    "game": {
                        "count": 12,
                        "wins": [
                            { "value": false, "count": 4, "percentage": 33.3 },
                            { "value": true, "count": 8, "percentage": 66.7 }
                        ]
                    }
                } }
            })))
            .mount(&server)
            .await;

        let request = LoadRequest::new(Game::Valorant, "TeamID:83", 9);
        let outcome = load(&request, &mut grid_source(&server), &mut fallback())
            .await
            .unwrap();

        assert_eq!(outcome.origin, DataOrigin::Live);
        assert_eq!(outcome.team_name, "Team 83");
        assert_eq!(outcome.records.len(), 9);
        // floor(9 * 66.7 / 100) = 6
        assert_eq!(outcome.records.iter().filter(|r| r.won).count(), 6);
    }
}
