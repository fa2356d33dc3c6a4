//! Error taxonomy for the news pipeline.
//!
//! Renderer failures are logged where they happen and collapse to `None`
//! at the [`crate::renderer::HtmlRenderer`] seam; the scraper turns that
//! into an empty headline list. Request validation failures become a 400
//! at the HTTP boundary, and a panicking scrape task becomes a 500 —
//! nothing in between surfaces to callers as an error value.

use thiserror::Error;

/// Failures while fetching rendered HTML from the extract API.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No API credential configured. Checked before any network I/O.
    #[error("renderer credential is not configured (set ZYTE_API_KEY)")]
    MissingCredential,

    /// Transport-level failure: timeout, DNS, connection reset, or an
    /// unreadable response body.
    #[error("render request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The renderer answered with a non-200 status.
    #[error("renderer returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 200 response without the `browserHtml` field.
    #[error("renderer response is missing the 'browserHtml' field")]
    MissingBrowserHtml,
}
