use std::time::Duration;

use async_trait::async_trait;
use nr_core::{ContentExtractor, Error, ExtractionResult, Result};
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, warn};
use url::Url;

use crate::extract::extract_from_html;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Request timeout. `None` leaves it to the transport default.
    pub timeout: Option<Duration>,
}

/// Fetches article pages over HTTP and extracts their readable content.
#[derive(Debug, Clone)]
pub struct HttpExtractor {
    client: reqwest::Client,
}

impl HttpExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Single GET followed by a parse of the body. Errors are returned as-is;
    /// [`ContentExtractor::extract`] is the lossy wrapper around this.
    pub async fn try_extract(&self, url: &str) -> Result<ExtractionResult> {
        let url = parse_url(url)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let html = response.text().await?;
        extract_from_html(&html)
    }
}

#[async_trait]
impl ContentExtractor for HttpExtractor {
    async fn extract(&self, url: &str) -> Option<ExtractionResult> {
        match self.try_extract(url).await {
            Ok(result) => {
                debug!(
                    url,
                    paragraphs = result.paragraphs().count(),
                    title = ?result.title,
                    "📰 Extracted article content"
                );
                Some(result)
            }
            Err(Error::Status(status)) => {
                debug!(url, status, "Article fetch returned a non-success status");
                None
            }
            Err(e) => {
                warn!(url, error = %e, "⚠️ Article extraction failed");
                None
            }
        }
    }
}

pub fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::InvalidUrl(format!("unsupported scheme {}", scheme))),
    }
}
