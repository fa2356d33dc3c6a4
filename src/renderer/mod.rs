//! Renderer abstraction for browser-based page rendering.
//!
//! Defines the `HtmlRenderer` trait that abstracts over the rendering
//! backend (currently the Zyte extract API). Tests substitute canned
//! fakes at this seam.

pub mod zyte;

use async_trait::async_trait;

/// A service that turns a URL into fully rendered HTML.
#[async_trait]
pub trait HtmlRenderer: Send + Sync {
    /// Fetch the rendered (JavaScript-executed) HTML for a URL.
    ///
    /// Returns `None` on any failure: missing credential, transport
    /// error, non-200 status, or a response without rendered HTML.
    /// Failures are logged where they occur and never bubble past this
    /// seam. No retries, no caching.
    async fn rendered_html(&self, url: &str) -> Option<String>;
}
