//! Integration tests for the HTTP client layer against a mock server.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orb_api::clients::{HttpError, HttpMethod, HttpRequest, RestClient};
use orb_api::{ApiKey, BaseUrl, OrbConfig};

fn config_for(server: &MockServer) -> OrbConfig {
    OrbConfig::builder()
        .api_key(ApiKey::new("sk_test_123").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn sends_bearer_authorization_and_json_accept_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices/inv_1"))
        .and(header("Authorization", "Bearer sk_test_123"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "inv_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let response = client.get("invoices/inv_1", None).await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.body["id"], "inv_1");
}

#[tokio::test]
async fn non_retryable_error_surfaces_immediately() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices/inv_404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"status": 404, "title": "Not found"}))
                .insert_header("x-request-id", "req-abc"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let error = client.get("invoices/inv_404", None).await.unwrap_err();

    match error {
        orb_api::RestError::Http(HttpError::Response(response)) => {
            assert_eq!(response.code, 404);
            assert!(response.message.contains("Not found"));
            assert_eq!(response.error_reference.as_deref(), Some("req-abc"));
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limited_request_retries_and_succeeds() {
    let server = MockServer::start().await;

    // First attempt is rate limited, second succeeds.
    Mock::given(method("GET"))
        .and(path("/v1/invoices"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"title": "Rate limited"}))
                .insert_header("retry-after", "0"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = OrbConfig::builder()
        .api_key(ApiKey::new("sk_test_123").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .max_tries(2)
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    let response = client.get("invoices", None).await.unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn exhausted_retries_report_max_retries_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"title": "Rate limited"}))
                .insert_header("retry-after", "0"),
        )
        .expect(2)
        .mount(&server)
        .await;

    let config = OrbConfig::builder()
        .api_key(ApiKey::new("sk_test_123").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .max_tries(2)
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    let error = client.get("invoices", None).await.unwrap_err();
    match error {
        orb_api::RestError::Http(HttpError::MaxRetries(max_retries)) => {
            assert_eq!(max_retries.code, 429);
            assert_eq!(max_retries.tries, 2);
        }
        other => panic!("expected retry exhaustion, got {other:?}"),
    }
}

#[tokio::test]
async fn raw_request_round_trips_through_http_client() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/invoices"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "inv_2"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let request = HttpRequest::builder(HttpMethod::Post, "invoices")
        .body(serde_json::json!({"currency": "USD"}))
        .body_type(orb_api::DataType::Json)
        .build()
        .unwrap();

    let response = client.http_client().request(request).await.unwrap();
    assert_eq!(response.code, 201);
}
