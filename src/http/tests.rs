//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(format!("{}/", server.uri()))
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, "http://www.omdbapi.com/");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("omdb-search/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://api.example.com/");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("s", "stem")
        .query("page", "2")
        .header("X-Request-Id", "abc123")
        .timeout(Duration::from_secs(10));

    assert_eq!(config.param("s"), Some("stem"));
    assert_eq!(config.param("page"), Some("2"));
    assert_eq!(config.param("i"), None);
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_request_config_query_string_keeps_order() {
    let config = RequestConfig::new()
        .query("s", "star wars")
        .query("page", "3");
    assert_eq!(config.query_string(), "s=star+wars&page=3");
}

#[test]
fn test_http_client_rejects_bad_base_url() {
    let config = HttpClientConfig::builder().base_url("not a url").build();
    let err = HttpClient::with_config(config).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "stem"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Search": [],
            "totalResults": "0",
            "Response": "True"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .get_json(&RequestConfig::new().query("s", "stem").query("page", "2"))
        .await
        .unwrap();

    assert_eq!(body["totalResults"], "0");
}

#[tokio::test]
async fn test_http_client_applies_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("apikey", "secret123"))
        .and(query_param("i", "tt0111161"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Title": "The Shawshank Redemption"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .build();
    let client = HttpClient::with_auth(config, AuthConfig::api_key("secret123")).unwrap();

    let body = client
        .fetch(&RequestConfig::new().query("i", "tt0111161"))
        .await
        .unwrap();
    assert_eq!(body["Title"], "The Shawshank Redemption");
}

#[tokio::test]
async fn test_http_client_default_and_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("X-Custom", "value"))
        .and(header("X-Request-Id", "req-456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .header("X-Custom", "value")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    client
        .get_json(&RequestConfig::new().header("X-Request-Id", "req-456"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_http_client_401_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"Response":"False","Error":"No API key provided."}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_json(&RequestConfig::new()).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("No API key provided."));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_500_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_json(&RequestConfig::new()).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_http_client_invalid_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_json(&RequestConfig::new()).await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json(&RequestConfig::new().timeout(Duration::from_millis(50)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_http_client_connection_refused() {
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.get_json(&RequestConfig::new()).await.unwrap_err();
    assert!(err.is_transport());
}
