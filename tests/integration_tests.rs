use vanguard_scout::{
    analysis::analyze,
    data_fetcher::{DataOrigin, LoadRequest, MockGenerator, MockSource, load, models::Game},
    error::AppError,
    pipeline::run_with,
    report::{OfflineScout, ReportContext, ScoutPrompt, TextGenerator, generate},
};

/// Returns the prompt unchanged
struct EchoGenerator;

impl TextGenerator for EchoGenerator {
    fn provider_name(&self) -> &'static str {
        "Echo"
    }

    async fn generate(&self, prompt: &ScoutPrompt<'_>) -> Result<String, AppError> {
        Ok(prompt.text.to_string())
    }
}

/// Mock load of 20 matches for team "83", analysis and an echoed report
#[tokio::test]
async fn test_mock_scouting_scenario() {
    let request = LoadRequest::new(Game::LeagueOfLegends, "83", 20);
    let mut source = MockSource::new(MockGenerator::new(Some(42), 0.7));
    let mut fallback = MockGenerator::new(Some(43), 0.7);

    let outcome = load(&request, &mut source, &mut fallback).await.unwrap();
    assert_eq!(outcome.records.len(), 20);
    assert_eq!(outcome.origin, DataOrigin::Mock);

    let summary = analyze(&outcome.records);
    assert!((0.0..=1.0).contains(&summary.win_rate));
    let wins = outcome.records.iter().filter(|r| r.won).count();
    assert_eq!(summary.win_rate, wins as f64 / 20.0);
    assert_eq!(summary.rolling.trend.len(), 10);

    let context = ReportContext::new(request.game, &summary).unwrap();
    let report = generate(&context, &EchoGenerator).await.unwrap();
    assert!(!report.text.is_empty());
    assert!(report.text.contains("83"));
    assert!(report.text.contains("League of Legends"));
}

#[tokio::test]
async fn test_valorant_scenario_with_offline_scout() {
    let request = LoadRequest::new(Game::Valorant, "83", 15);
    let mut source = MockSource::new(MockGenerator::new(Some(5), 0.5));
    let mut fallback = MockGenerator::new(Some(6), 0.5);

    let run = run_with(&request, &mut source, &mut fallback, &OfflineScout)
        .await
        .unwrap();

    assert_eq!(run.analysis.summary.matches_analyzed, 15);
    assert_eq!(run.report.provider, "Offline scout");
    assert!(run.report.text.contains("SCOUTING REPORT: 83"));
    assert!(run.report.text.contains("Site Attack Tendencies"));
}

#[test]
fn test_short_history_uses_all_matches() {
    let records = MockGenerator::new(Some(9), 0.7).generate(Game::Valorant, "83", 3);
    let summary = analyze(&records);
    assert_eq!(summary.rolling.trend.len(), 3);
    assert_eq!(summary.rolling.average, summary.win_rate);
}

#[test]
fn test_empty_history() {
    let summary = analyze(&[]);
    assert_eq!(summary.win_rate, 0.0);
    assert!(summary.strengths.is_empty());
    assert!(summary.weaknesses.is_empty());
}

#[tokio::test]
async fn test_invalid_requests_are_rejected() {
    let mut source = MockSource::new(MockGenerator::new(Some(1), 0.7));
    let mut fallback = MockGenerator::new(Some(2), 0.7);

    for request in [
        LoadRequest::new(Game::LeagueOfLegends, "83", 0),
        LoadRequest::new(Game::LeagueOfLegends, "", 10),
    ] {
        assert!(matches!(
            load(&request, &mut source, &mut fallback).await,
            Err(AppError::InvalidRequest(_))
        ));
    }
}
