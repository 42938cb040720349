//! HTTP article fetcher.
//!
//! Downloads the page with `reqwest` and extracts the article with `scraper`.
//! Pages are not rendered, so sites that build their article body with
//! JavaScript need a browser-backed [`PageFetcher`] instead.

use crate::error::{MetricsError, Result};
use crate::models::FetchedPage;
use crate::scrapers::PageFetcher;
use crate::utils::normalize_whitespace;
use itertools::Itertools;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Selectors collected from the body container, in output order.
static BODY_PART_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["p", "ol li", "ul li", "h2"]
        .iter()
        .map(|s| Selector::parse(s).expect("static selector is valid"))
        .collect()
});

/// An ordered list of CSS selectors; the first one that matches wins.
#[derive(Debug, Clone)]
pub struct SelectorChain {
    sources: Vec<String>,
    selectors: Vec<Selector>,
}

impl SelectorChain {
    pub fn parse(sources: &[String]) -> Result<Self> {
        if sources.is_empty() {
            return Err(MetricsError::Config("selector list is empty".to_string()));
        }
        let selectors = sources
            .iter()
            .map(|s| Selector::parse(s).map_err(|_| MetricsError::InvalidSelector(s.clone())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            sources: sources.to_vec(),
            selectors,
        })
    }

    /// First element matched by the earliest selector that matches anything.
    pub fn first_match<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| document.select(selector).next())
    }

    /// Text of the first element, across the whole chain, whose text is not blank.
    ///
    /// An empty match for an early selector falls through to later ones.
    pub fn first_text(&self, document: &Html) -> Option<String> {
        self.selectors.iter().find_map(|selector| {
            document
                .select(selector)
                .map(element_text)
                .find(|text| !text.is_empty())
        })
    }

    fn missing(&self, what: &'static str) -> MetricsError {
        MetricsError::MissingElement {
            what,
            selectors: self.sources.join(", "),
        }
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

/// Extract the title and body text from a parsed page.
pub fn extract_page(
    document: &Html,
    title: &SelectorChain,
    body: &SelectorChain,
) -> Result<FetchedPage> {
    let title_text = title
        .first_text(document)
        .ok_or_else(|| title.missing("title"))?;

    let container = body.first_match(document).ok_or_else(|| body.missing("body"))?;

    let text = BODY_PART_SELECTORS
        .iter()
        .flat_map(|selector| container.select(selector))
        .map(element_text)
        .filter(|t| !t.is_empty())
        .join(" ");

    Ok(FetchedPage {
        title: title_text,
        text,
    })
}

/// Fetches pages over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    title: SelectorChain,
    body: SelectorChain,
}

impl HttpFetcher {
    /// Build a fetcher. Invalid selectors are rejected here rather than per page.
    pub fn new(
        title_selectors: &[String],
        body_selectors: &[String],
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            title: SelectorChain::parse(title_selectors)?,
            body: SelectorChain::parse(body_selectors)?,
        })
    }
}

/// Accept only absolute http(s) URLs.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| MetricsError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(MetricsError::InvalidUrl(format!(
            "{url}: unsupported scheme `{other}`"
        ))),
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let parsed = validate_url(url)?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MetricsError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        debug!(bytes = body.len(), "Downloaded page");

        let document = Html::parse_document(&body);
        let page = extract_page(&document, &self.title, &self.body)?;
        info!(
            title_chars = page.title.len(),
            text_chars = page.text.len(),
            "Extracted article"
        );
        Ok(page)
    }
}
