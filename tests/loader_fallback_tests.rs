use serde_json::json;
use vanguard_scout::{
    data_fetcher::{
        DataOrigin, GridSource, LoadRequest, MockGenerator, load,
        api::{GridClient, create_http_client_with_timeout},
        models::Game,
    },
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn grid_source(server: &MockServer) -> GridSource {
    let client = GridClient::new(
        create_http_client_with_timeout(5).unwrap(),
        format!("{}/statistics-feed/graphql", server.uri()),
        format!("{}/central-data/graphql", server.uri()),
        "grid-key",
    );
    GridSource::new(Some(client), MockGenerator::new(Some(1), 0.7))
}

#[tokio::test]
async fn test_unavailable_feed_falls_back_to_mock() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let request = LoadRequest::new(Game::LeagueOfLegends, "83", 12);
    let outcome = load(&request, &mut grid_source(&server), &mut MockGenerator::new(Some(2), 0.7))
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 12);
    assert!(outcome.origin.is_fallback());
    assert_eq!(outcome.team_name, "83");
}

#[tokio::test]
async fn test_missing_credential_falls_back_to_mock() {
    let mut source = GridSource::new(None, MockGenerator::new(Some(1), 0.7));
    let request = LoadRequest::new(Game::Valorant, "Sentinels", 7);

    let outcome = load(&request, &mut source, &mut MockGenerator::new(Some(2), 0.7))
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 7);
    match outcome.origin {
        DataOrigin::Fallback { reason } => assert!(reason.contains("GRID_API_KEY")),
        other => panic!("Expected fallback, got {other:?}"),
    }
}

#[tokio::test]
async fn test_team_lookup_then_statistics() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/central-data/graphql"))
        .and(header("x-api-key", "grid-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "teams": [
                { "id": "47", "name": "Fnatic" },
                { "id": "83", "name": "Cloud9" }
            ] }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/statistics-feed/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "teamStatistics": {
                "id": "83",
                "series": { "count": 4 },
                "game": {
                    "count": 10,
                    "wins": [
                        { "value": true, "count": 3, "percentage": 30.0 },
                        { "value": false, "count": 7, "percentage": 70.0 }
                    ]
                }
            } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = LoadRequest::new(Game::LeagueOfLegends, "cloud9", 10);
    let outcome = load(&request, &mut grid_source(&server), &mut MockGenerator::new(Some(2), 0.7))
        .await
        .unwrap();

    assert_eq!(outcome.origin, DataOrigin::Live);
    assert_eq!(outcome.team_name, "Team 83");
    assert_eq!(outcome.records.iter().filter(|r| r.won).count(), 3);
}

#[tokio::test]
async fn test_unknown_team_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/central-data/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "teams": [{ "id": "47", "name": "Fnatic" }] }
        })))
        .mount(&server)
        .await;

    let request = LoadRequest::new(Game::Valorant, "Nobody", 5);
    let outcome = load(&request, &mut grid_source(&server), &mut MockGenerator::new(Some(2), 0.7))
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 5);
    assert!(outcome.origin.is_fallback());
}
