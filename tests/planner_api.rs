//! End-to-end tests for `POST /api/planner` against mocked providers.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use travel_planner::{PlannerConfig, PlannerService, web};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, api_key: Option<&str>) -> PlannerConfig {
    let mut config = PlannerConfig::default();
    config.geocoding.base_url = server.uri();
    config.forecast.base_url = server.uri();
    config.places.base_url = server.uri();
    config.places.api_key = api_key.map(String::from);
    config
}

async fn post_planner(config: &PlannerConfig, body: Body) -> (StatusCode, Value) {
    let service = Arc::new(PlannerService::from_config(config).unwrap());
    let app = web::app(service, &config.server);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/planner")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn post_json(config: &PlannerConfig, body: Value) -> (StatusCode, Value) {
    post_planner(config, Body::from(body.to_string())).await
}

fn paris_request() -> Value {
    json!({
        "location": "Paris",
        "start_time": "2024-06-01 00:00:00",
        "end_time": "2024-06-01 03:00:00"
    })
}

async fn mount_geocoding(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, codes: Value) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hourly": {
                "time": ["2024-06-01T00:00", "2024-06-01T01:00"],
                "weather_code": codes
            }
        })))
        .mount(server)
        .await;
}

async fn mount_places(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn paris_geocoding() -> Value {
    json!({"results": [{"name": "Paris", "latitude": 48.85, "longitude": 2.35}]})
}

fn eiffel_places() -> Value {
    json!({"results": [{"name": "Eiffel Tower"}], "status": "OK"})
}

#[tokio::test]
async fn test_paris_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Paris"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_geocoding()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "48.85"))
        .and(query_param("longitude", "2.35"))
        .and(query_param("timezone", "Asia/Kolkata"))
        .and(query_param("start_hour", "2024-06-01T00:00"))
        .and(query_param("end_hour", "2024-06-01T03:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hourly": {"time": ["2024-06-01T00:00", "2024-06-01T01:00"], "weather_code": [0, 3]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("location", "48.85,2.35"))
        .and(query_param("radius", "1500"))
        .and(query_param("type", "tourist_attraction"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(eiffel_places()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, Some("test-key"));
    let (status, body) = post_json(&config, paris_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "weather_forecast": [
                {"time": "2024-06-01T00:00", "weather_condition": "Clear sky"},
                {"time": "2024-06-01T01:00", "weather_condition": "Overcast"}
            ],
            "point_of_interest": ["Eiffel Tower"]
        })
    );
}

#[tokio::test]
async fn test_equal_times_rejected_without_upstream_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, Some("test-key"));
    let (status, body) = post_json(
        &config,
        json!({
            "location": "Paris",
            "start_time": "2024-06-01 03:00:00",
            "end_time": "2024-06-01 03:00:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": ["Start time must be less than end time"]}));
}

#[tokio::test]
async fn test_missing_fields_rejected_without_upstream_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, Some("test-key"));
    let (status, body) = post_json(&config, json!({"location": "Paris"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"errors": [
            "start_time: This field is required.",
            "end_time: This field is required."
        ]})
    );
}

#[tokio::test]
async fn test_bad_date_format_rejected() {
    let server = MockServer::start().await;
    let config = config_for(&server, Some("test-key"));

    let (status, body) = post_json(
        &config,
        json!({
            "location": "Paris",
            "start_time": "2024-06-01T00:00:00",
            "end_time": "2024-06-01 03:00:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"errors": ["Incorrect date format, should be YYYY-MM-DD HH:MM:SS"]})
    );
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let server = MockServer::start().await;
    let config = config_for(&server, Some("test-key"));

    let (status, body) = post_planner(&config, Body::from("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": ["Request body must be a JSON object"]}));
}

#[tokio::test]
async fn test_unknown_weather_code_still_succeeds() {
    let server = MockServer::start().await;
    mount_geocoding(&server, paris_geocoding()).await;
    mount_forecast(&server, json!([0, 102])).await;
    mount_places(&server, eiffel_places()).await;

    let config = config_for(&server, Some("test-key"));
    let (status, body) = post_json(&config, paris_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weather_forecast"][0]["weather_condition"], "Clear sky");
    assert_eq!(body["weather_forecast"][1]["weather_condition"], "Unknown code");
    assert_eq!(body["point_of_interest"], json!(["Eiffel Tower"]));
}

#[tokio::test]
async fn test_empty_geocoding_is_internal_error() {
    let server = MockServer::start().await;
    mount_geocoding(&server, json!({"generationtime_ms": 0.3})).await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, Some("test-key"));
    let (status, body) = post_json(&config, paris_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_places_denied_hides_provider_message() {
    let server = MockServer::start().await;
    mount_geocoding(&server, paris_geocoding()).await;
    mount_forecast(&server, json!([0, 3])).await;
    mount_places(
        &server,
        json!({
            "error_message": "The provided API key is invalid.",
            "results": [],
            "status": "REQUEST_DENIED"
        }),
    )
    .await;

    let config = config_for(&server, Some("bad-key"));
    let (status, body) = post_json(&config, paris_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_missing_places_key_is_internal_error() {
    let server = MockServer::start().await;
    mount_geocoding(&server, paris_geocoding()).await;
    mount_forecast(&server, json!([0, 3])).await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(eiffel_places()))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, None);
    let (status, body) = post_json(&config, paris_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_forecast_outage_returns_no_partial_result() {
    let server = MockServer::start().await;
    mount_geocoding(&server, paris_geocoding()).await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(eiffel_places()))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, Some("test-key"));
    let (status, body) = post_json(&config, paris_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_mismatched_forecast_arrays_are_internal_error() {
    let server = MockServer::start().await;
    mount_geocoding(&server, paris_geocoding()).await;
    mount_forecast(&server, json!([0])).await;
    mount_places(&server, eiffel_places()).await;

    let config = config_for(&server, Some("test-key"));
    let (status, _) = post_json(&config, paris_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_request_past_deadline_is_internal_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(paris_geocoding())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = config_for(&server, Some("test-key"));
    config.server.request_timeout_seconds = 1;

    let started = std::time::Instant::now();
    let (status, body) = post_json(&config, paris_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
    assert!(started.elapsed() < std::time::Duration::from_secs(3));
}

#[tokio::test]
async fn test_oversized_body_rejected_without_upstream_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = config_for(&server, Some("test-key"));
    config.server.body_limit_bytes = 256;

    let request = json!({
        "location": "P".repeat(1024),
        "start_time": "2024-06-01 00:00:00",
        "end_time": "2024-06-01 03:00:00"
    });
    let (status, body) = post_json(&config, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": ["Request body is too large"]}));
}
