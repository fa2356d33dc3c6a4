//! CoinTelegraph headline scraping.
//!
//! One linear pipeline per request: token name → tag slug → rendered tag
//! page → top headline elements. Renderer failures degrade to an empty
//! list; a page with fewer matching elements simply yields fewer
//! headlines.

pub mod aliases;

use crate::renderer::HtmlRenderer;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// News source origin; tag listings live under `/tags/<slug>`.
pub const SOURCE_ORIGIN: &str = "https://cointelegraph.com";

/// Human-readable source label used in API responses.
pub const SOURCE_NAME: &str = "CoinTelegraph";

/// CSS class CoinTelegraph puts on headline titles in tag listings.
const HEADLINE_SELECTOR: &str = ".post-card-inline__title";

/// Tag pages list dozens of articles; only the freshest few matter.
const MAX_HEADLINES: usize = 3;

/// A single extracted news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    /// Absolute article URL, or `"#"` when the title had no enclosing link.
    pub url: String,
}

/// Scrapes token news through an [`HtmlRenderer`].
#[derive(Clone)]
pub struct NewsScraper {
    renderer: Arc<dyn HtmlRenderer>,
    origin: String,
}

impl NewsScraper {
    pub fn new(renderer: Arc<dyn HtmlRenderer>) -> Self {
        Self::with_origin(renderer, SOURCE_ORIGIN)
    }

    /// Override the source origin. Tests point it at canned fixtures.
    pub fn with_origin(renderer: Arc<dyn HtmlRenderer>, origin: impl Into<String>) -> Self {
        Self {
            renderer,
            origin: origin.into(),
        }
    }

    /// Fetch up to three headlines for a token, newest first as listed
    /// on the tag page.
    ///
    /// Never fails: an unreachable renderer, a non-200 answer, or a page
    /// without matching elements all yield an empty or shortened list.
    pub async fn scrape(&self, token_name: &str) -> Vec<Headline> {
        let term = aliases::search_term(token_name);
        let url = format!("{}/tags/{}", self.origin, term);
        info!(token = token_name, term = %term, "scraping news");

        let Some(html) = self.renderer.rendered_html(&url).await else {
            return Vec::new();
        };

        let headlines = extract_headlines(&html, &self.origin);
        debug!(count = headlines.len(), "extracted headlines");
        headlines
    }
}

/// Pull headline titles and links out of a rendered tag page.
///
/// Keeps the first [`MAX_HEADLINES`] title elements in document order.
/// The article link is the nearest ancestor `<a>`; its `href` is
/// prefixed with the source origin. Titles without an enclosing anchor
/// get the `"#"` placeholder.
fn extract_headlines(html: &str, origin: &str) -> Vec<Headline> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(HEADLINE_SELECTOR).unwrap();

    document
        .select(&selector)
        .take(MAX_HEADLINES)
        .map(|element| {
            let title = element.text().collect::<String>().trim().to_string();

            let url = element
                .ancestors()
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "a")
                .and_then(|a| a.value().attr("href"))
                .map(|href| format!("{origin}{href}"))
                .unwrap_or_else(|| "#".to_string());

            Headline { title, url }
        })
        .collect()
}
