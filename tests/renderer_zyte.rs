//! ZyteRenderer against a mock extract API.

use tokenpress::renderer::zyte::ZyteRenderer;
use tokenpress::renderer::HtmlRenderer;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn renderer_for(server: &MockServer, api_key: Option<&str>) -> ZyteRenderer {
    ZyteRenderer::with_endpoint(
        api_key.map(str::to_string),
        format!("{}/v1/extract", server.uri()),
    )
}

#[tokio::test]
async fn returns_rendered_html_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/extract"))
        // Basic auth: "test-key" as username, empty password.
        .and(header("authorization", "Basic dGVzdC1rZXk6"))
        .and(body_partial_json(serde_json::json!({
            "url": "https://cointelegraph.com/tags/bitcoin",
            "browserHtml": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://cointelegraph.com/tags/bitcoin",
            "browserHtml": "<html><body>rendered</body></html>",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let renderer = renderer_for(&server, Some("test-key"));
    let html = renderer
        .rendered_html("https://cointelegraph.com/tags/bitcoin")
        .await;

    assert_eq!(html.as_deref(), Some("<html><body>rendered</body></html>"));
}

#[tokio::test]
async fn missing_credential_makes_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let renderer = renderer_for(&server, None);
    assert!(renderer.rendered_html("https://example.com").await.is_none());
}

#[tokio::test]
async fn non_200_status_is_a_soft_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/extract"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
        .mount(&server)
        .await;

    let renderer = renderer_for(&server, Some("test-key"));
    assert!(renderer.rendered_html("https://example.com").await.is_none());
}

#[tokio::test]
async fn response_without_browser_html_is_a_soft_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://example.com",
        })))
        .mount(&server)
        .await;

    let renderer = renderer_for(&server, Some("test-key"));
    assert!(renderer.rendered_html("https://example.com").await.is_none());
}

#[tokio::test]
async fn non_json_response_is_a_soft_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>not json"))
        .mount(&server)
        .await;

    let renderer = renderer_for(&server, Some("test-key"));
    assert!(renderer.rendered_html("https://example.com").await.is_none());
}
