//! Zyte extract API client.
//!
//! One POST per page: `{"url": <url>, "browserHtml": true}` with HTTP
//! Basic auth, the API key as username and an empty password. The
//! response carries the browser-executed HTML in `browserHtml`.

use super::HtmlRenderer;
use crate::error::RenderError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Default endpoint of the Zyte extract API.
pub const ZYTE_ENDPOINT: &str = "https://api.zyte.com/v1/extract";

/// Fixed budget for one render round-trip. Browser rendering is slow.
const RENDER_TIMEOUT: Duration = Duration::from_secs(60);

/// The subset of the extract response this client cares about.
#[derive(Deserialize)]
struct ExtractResponse {
    #[serde(rename = "browserHtml")]
    browser_html: Option<String>,
}

/// Renderer backed by the Zyte extract API.
pub struct ZyteRenderer {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl ZyteRenderer {
    /// Create a renderer with an explicit credential.
    ///
    /// `None` is accepted so a misconfigured process still serves
    /// requests; every render then fails soft with a logged
    /// configuration error and no network call.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, ZYTE_ENDPOINT)
    }

    /// Point the client at a different endpoint. Tests use a mock server.
    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(RENDER_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            endpoint: endpoint.into(),
        }
    }

    async fn try_render(&self, url: &str) -> Result<String, RenderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(RenderError::MissingCredential)?;

        let resp = self
            .client
            .post(&self.endpoint)
            .basic_auth(api_key, Some(""))
            .json(&json!({ "url": url, "browserHtml": true }))
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            return Err(RenderError::Status { status, body });
        }

        let extract: ExtractResponse = resp.json().await?;
        extract.browser_html.ok_or(RenderError::MissingBrowserHtml)
    }
}

#[async_trait]
impl HtmlRenderer for ZyteRenderer {
    async fn rendered_html(&self, url: &str) -> Option<String> {
        debug!(url, "fetching rendered page");

        match self.try_render(url).await {
            Ok(html) => Some(html),
            Err(e @ RenderError::MissingCredential) => {
                error!("{e}");
                None
            }
            Err(e) => {
                warn!(url, "render failed: {e}");
                None
            }
        }
    }
}
