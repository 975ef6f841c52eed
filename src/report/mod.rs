//! Scouting report generation through a text generator

pub mod offline;
pub mod prompt;
pub mod providers;

use serde::Serialize;
use tracing::{error, info, instrument};

use crate::analysis::TeamStatsSummary;
use crate::data_fetcher::models::Game;
use crate::error::AppError;

pub use offline::OfflineScout;
pub use providers::{LlmProvider, ProviderClient, TextGenerator};

/// Everything the report agent knows about the scouted team.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub game: Game,
    pub team_name: String,
    pub matches_analyzed: usize,
    /// Fraction of matches won, in [0, 1]
    pub win_rate: f64,
    /// Pretty-printed JSON of the summary, embedded in prompts
    pub digest: String,
    pub summary: TeamStatsSummary,
}

impl ReportContext {
    /// `game` is used when the summary has none (no matches).
    pub fn new(game: Game, summary: &TeamStatsSummary) -> Result<Self, AppError> {
        Ok(Self {
            game: summary.game.unwrap_or(game),
            team_name: summary.team_name.clone(),
            matches_analyzed: summary.matches_analyzed,
            win_rate: summary.win_rate,
            digest: serde_json::to_string_pretty(summary)?,
            summary: summary.clone(),
        })
    }
}

/// A prompt and the context it was built from
#[derive(Debug, Clone, Copy)]
pub struct ScoutPrompt<'a> {
    pub text: &'a str,
    pub context: &'a ReportContext,
}

/// Provider output, displayed as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoutingReport {
    pub text: String,
    pub provider: String,
}

/// Builds the game prompt and asks `generator` for one report.
///
/// Any failure, including empty output, is
/// [`AppError::GenerationFailed`]. There is no retry and no fallback to
/// another generator.
#[instrument(skip_all, fields(provider = generator.provider_name(), team = %context.team_name))]
pub async fn generate<G: TextGenerator>(
    context: &ReportContext,
    generator: &G,
) -> Result<ScoutingReport, AppError> {
    let provider = generator.provider_name();
    let text = prompt::build_prompt(context);
    info!("Requesting scouting report ({} prompt bytes)", text.len());

    let output = generator
        .generate(&ScoutPrompt {
            text: &text,
            context,
        })
        .await
        .map_err(|e| {
            error!("Report generation failed: {e}");
            match e {
                AppError::GenerationFailed { .. } => e,
                other => AppError::generation_failed(provider, other.to_string()),
            }
        })?;

    if output.trim().is_empty() {
        error!("{provider} returned an empty report");
        return Err(AppError::generation_failed(provider, "empty response"));
    }

    Ok(ScoutingReport {
        text: output,
        provider: provider.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::testing_utils::TestDataBuilder;

    struct EchoGenerator;

    impl TextGenerator for EchoGenerator {
        fn provider_name(&self) -> &'static str {
            "Echo"
        }

        async fn generate(&self, prompt: &ScoutPrompt<'_>) -> Result<String, AppError> {
            Ok(prompt.text.to_string())
        }
    }

    struct FailingGenerator(fn() -> AppError);

    impl TextGenerator for FailingGenerator {
        fn provider_name(&self) -> &'static str {
            "Failing"
        }

        async fn generate(&self, _prompt: &ScoutPrompt<'_>) -> Result<String, AppError> {
            Err((self.0)())
        }
    }

    struct BlankGenerator;

    impl TextGenerator for BlankGenerator {
        fn provider_name(&self) -> &'static str {
            "Blank"
        }

        async fn generate(&self, _prompt: &ScoutPrompt<'_>) -> Result<String, AppError> {
            Ok("  \n".to_string())
        }
    }

    fn lol_context() -> ReportContext {
        let summary = analyze(&TestDataBuilder::lol_series("83", &[true, true, false]));
        ReportContext::new(Game::LeagueOfLegends, &summary).unwrap()
    }

    #[test]
    fn test_context_from_summary() {
        let context = lol_context();
        assert_eq!(context.game, Game::LeagueOfLegends);
        assert_eq!(context.team_name, "83");
        assert_eq!(context.matches_analyzed, 3);
        assert!(context.digest.contains("\"win_rate\""));
    }

    #[test]
    fn test_context_from_empty_summary_keeps_requested_game() {
        let context = ReportContext::new(Game::Valorant, &analyze(&[])).unwrap();
        assert_eq!(context.game, Game::Valorant);
        assert_eq!(context.matches_analyzed, 0);
    }

    #[tokio::test]
    async fn test_echo_report_mentions_team_and_game() {
        let report = generate(&lol_context(), &EchoGenerator).await.unwrap();
        assert_eq!(report.provider, "Echo");
        assert!(report.text.contains("83"));
        assert!(report.text.contains("League of Legends"));
    }

    #[tokio::test]
    async fn test_failures_become_generation_failed() {
        let generator = FailingGenerator(|| AppError::network_timeout("https://llm.example"));
        match generate(&lol_context(), &generator).await {
            Err(AppError::GenerationFailed { provider, message }) => {
                assert_eq!(provider, "Failing");
                assert!(message.contains("timeout"));
            }
            other => panic!("Expected GenerationFailed, got {other:?}"),
        }

        let generator = FailingGenerator(|| AppError::generation_failed("Upstream", "quota"));
        match generate(&lol_context(), &generator).await {
            Err(AppError::GenerationFailed { provider, .. }) => assert_eq!(provider, "Upstream"),
            other => panic!("Expected GenerationFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_output_is_failure() {
        assert!(matches!(
            generate(&lol_context(), &BlankGenerator).await,
            Err(AppError::GenerationFailed { .. })
        ));
    }
}
