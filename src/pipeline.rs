//! One scouting run: load matches, analyze them, ask for a report.

use std::path::Path;

use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::analysis::{self, TeamStatsSummary};
use crate::config::Config;
use crate::config::user_prompts::prompt_for_credential;
use crate::constants::credential_keys;
use crate::credentials::{CredentialChain, ManualSource};
use crate::data_fetcher::api::{GridClient, create_http_client_with_timeout};
use crate::data_fetcher::models::Game;
use crate::data_fetcher::{
    GridSource, LoadOutcome, LoadRequest, MatchSource, MockGenerator, MockSource, load,
};
use crate::error::AppError;
use crate::report::{self, LlmProvider, ProviderClient, ReportContext, ScoutingReport, TextGenerator};

/// Everything a run needs from the command line.
#[derive(Debug, Clone)]
pub struct ScoutRequest {
    pub game: Game,
    pub team: String,
    pub count: usize,
    pub live: bool,
    pub seed: Option<u64>,
    pub provider: LlmProvider,
    pub grid_api_key: Option<String>,
    pub llm_api_key: Option<String>,
    /// Prompt on stdin for keys no source provides
    pub ask_keys: bool,
}

impl ScoutRequest {
    pub fn load_request(&self) -> LoadRequest {
        LoadRequest::new(self.game, self.team.clone(), self.count)
    }
}

/// Result of the data and analysis steps. Always available, even when
/// report generation fails afterwards.
#[derive(Debug, Clone)]
pub struct ScoutAnalysis {
    pub outcome: LoadOutcome,
    pub summary: TeamStatsSummary,
    pub context: ReportContext,
}

#[derive(Debug, Clone)]
pub struct ScoutRun {
    pub analysis: ScoutAnalysis,
    pub report: ScoutingReport,
}

/// A failed run. `analysis` is present when only the report step failed.
#[derive(Debug)]
pub struct ScoutFailure {
    pub analysis: Option<Box<ScoutAnalysis>>,
    pub error: AppError,
}

impl From<AppError> for ScoutFailure {
    fn from(error: AppError) -> Self {
        Self {
            analysis: None,
            error,
        }
    }
}

/// Loads and analyzes. Statistics failures fall back to mock data inside
/// [`load`]; only precondition errors surface here.
pub async fn analyze_team<S: MatchSource>(
    request: &LoadRequest,
    source: &mut S,
    fallback: &mut MockGenerator,
) -> Result<ScoutAnalysis, AppError> {
    let outcome = load(request, source, fallback).await?;
    let summary = analysis::analyze(&outcome.records);
    let context = ReportContext::new(request.game, &summary)?;
    Ok(ScoutAnalysis {
        outcome,
        summary,
        context,
    })
}

/// Full run against caller-provided source and generator.
///
/// On a report failure the analysis is returned next to the error so the
/// dashboard can still explain what was scouted.
pub async fn run_with<S: MatchSource, G: TextGenerator>(
    request: &LoadRequest,
    source: &mut S,
    fallback: &mut MockGenerator,
    generator: &G,
) -> Result<ScoutRun, ScoutFailure> {
    let analysis = analyze_team(request, source, fallback).await?;
    match report::generate(&analysis.context, generator).await {
        Ok(report) => Ok(ScoutRun { analysis, report }),
        Err(error) => Err(ScoutFailure {
            analysis: Some(Box::new(analysis)),
            error,
        }),
    }
}

/// Resolves `key` through the chain, prompting as a last resort when asked to.
async fn resolve_key(
    chain: &CredentialChain,
    key: &str,
    ask: bool,
) -> Result<Option<String>, AppError> {
    if let Some(credential) = chain.resolve(key) {
        info!("{key} found in {}", credential.source);
        return Ok(Some(credential.value));
    }
    if ask {
        return prompt_for_credential(key).await;
    }
    Ok(None)
}

/// Credential chain for a run: secret store, environment, then the key flags.
pub async fn credential_chain(
    request: &ScoutRequest,
    secrets_path: &Path,
) -> CredentialChain {
    let mut manual = ManualSource::new().with(credential_keys::GRID, request.grid_api_key.clone());
    if let (Some(key), Some(value)) = (request.provider.credential_key(), &request.llm_api_key) {
        manual.insert(key, value.clone());
    }
    CredentialChain::standard(secrets_path, manual).await
}

/// Builds the configured generator, resolving its key when it needs one.
pub async fn provider_client(
    request: &ScoutRequest,
    config: &Config,
    chain: &CredentialChain,
    http: Client,
) -> Result<ProviderClient, AppError> {
    let api_key = match request.provider.credential_key() {
        Some(key) => resolve_key(chain, key, request.ask_keys).await?,
        None => None,
    };
    ProviderClient::new(request.provider, config, http, api_key)
}

/// Runs the whole pipeline with the configured collaborators.
#[instrument(skip_all, fields(game = %request.game, team = %request.team, live = request.live))]
pub async fn run(request: &ScoutRequest, config: &Config) -> Result<ScoutRun, ScoutFailure> {
    let http = create_http_client_with_timeout(config.http_timeout_seconds)
        .map_err(AppError::ApiFetch)?;
    let chain = credential_chain(request, Path::new(&Config::get_secrets_path())).await;

    let mut fallback = MockGenerator::new(request.seed, config.mock_base_win_rate);
    let load_request = request.load_request();

    // A missing report key is reported before any data is loaded
    let generator = provider_client(request, config, &chain, http.clone()).await?;

    if request.live {
        let grid = resolve_key(&chain, credential_keys::GRID, request.ask_keys)
            .await?
            .map(|key| {
                GridClient::new(
                    http.clone(),
                    config.stats_feed_url.clone(),
                    config.central_data_url.clone(),
                    key,
                )
            });
        if grid.is_none() {
            warn!("No {} available; live data will fall back to mock", credential_keys::GRID);
        }
        let mut source = GridSource::new(
            grid,
            MockGenerator::new(request.seed, config.mock_base_win_rate),
        );
        run_with(&load_request, &mut source, &mut fallback, &generator).await
    } else {
        let mut source =
            MockSource::new(MockGenerator::new(request.seed, config.mock_base_win_rate));
        run_with(&load_request, &mut source, &mut fallback, &generator).await
    }
}
