use clap::Parser;
use gbif_api::{GbifClient, OccurrenceQuery};
use gbif_occurrences::{lookup, run, Config, OccurrencesError, NO_RESULTS};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_gbif(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/occurrence/search"))
        .and(query_param("scientificName", "Puma concolor"))
        .and(query_param("country", "UY"))
        .and(query_param("limit", "10"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_puma_concolor_prints_two_row_table() {
    let server = mock_gbif(ResponseTemplate::new(200).set_body_json(json!({
        "results": [
            {"key": 1, "scientificName": "Puma concolor"},
            {"key": 2, "scientificName": "Puma concolor"}
        ]
    })))
    .await;

    let client = GbifClient::with_base_url(&server.uri());
    let output = run(&client, &OccurrenceQuery::new("Puma concolor")).await;

    let header = output.lines().find(|l| l.contains("key")).unwrap();
    assert!(header.contains("scientificName"));
    assert_eq!(output.matches("Puma concolor").count(), 2);
    assert!(output.ends_with("[2 rows x 2 columns]"));
}

#[tokio::test]
async fn test_service_unavailable_prints_error_line() {
    let server =
        mock_gbif(ResponseTemplate::new(503).set_body_string("Service Unavailable")).await;

    let client = GbifClient::with_base_url(&server.uri());
    let output = run(&client, &OccurrenceQuery::new("Puma concolor")).await;

    assert_eq!(
        output,
        "Error: Failed to fetch data: 503 - Service Unavailable"
    );
}

#[tokio::test]
async fn test_lookup_propagates_request_failure() {
    let server = mock_gbif(ResponseTemplate::new(500).set_body_string("boom")).await;

    let client = GbifClient::with_base_url(&server.uri());
    let err = lookup(&client, &OccurrenceQuery::new("Puma concolor"))
        .await
        .unwrap_err();

    assert!(matches!(err, OccurrencesError::Gbif(_)));
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Failed to fetch data: 500 - boom");
}

#[tokio::test]
async fn test_payload_without_results_prints_notice() {
    let server = mock_gbif(ResponseTemplate::new(200).set_body_json(json!({
        "offset": 0,
        "limit": 10,
        "endOfRecords": true,
        "count": 0
    })))
    .await;

    let client = GbifClient::with_base_url(&server.uri());
    let output = run(&client, &OccurrenceQuery::new("Puma concolor")).await;

    assert_eq!(output, NO_RESULTS);
}

#[tokio::test]
async fn test_truncated_page_still_prints_only_first_page() {
    let records: Vec<_> = (0..10)
        .map(|i| json!({"key": i, "scientificName": "Puma concolor"}))
        .collect();
    let server = mock_gbif(ResponseTemplate::new(200).set_body_json(json!({
        "offset": 0,
        "limit": 10,
        "endOfRecords": false,
        "count": 1500,
        "results": records
    })))
    .await;

    let client = GbifClient::with_base_url(&server.uri());
    let output = run(&client, &OccurrenceQuery::new("Puma concolor")).await;

    assert!(output.ends_with("[10 rows x 2 columns]"));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_transport_failure_prints_error_line() {
    // Nothing listens on the discard port
    let client = GbifClient::with_base_url("http://127.0.0.1:9");
    let output = run(&client, &OccurrenceQuery::new("Puma concolor")).await;

    assert!(output.starts_with("Error: GBIF HTTP error:"));
}

#[tokio::test]
async fn test_config_client_targets_api_url() {
    let server = mock_gbif(ResponseTemplate::new(200).set_body_json(json!({
        "results": [{"key": 7}]
    })))
    .await;

    let api_url = server.uri();
    let config =
        Config::try_parse_from(["gbif-occurrences", "--api-url", api_url.as_str()]).unwrap();
    let output = run(&config.client(), &config.query()).await;

    assert!(output.ends_with("[1 rows x 1 columns]"));
}
