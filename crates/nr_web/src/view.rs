use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use nr_core::{ArticleReference, ExtractionResult};
use regex::Regex;

lazy_static! {
    /// Feed snippets are cut off with a marker such as ` [+1234 chars]`.
    static ref TRUNCATION_MARKER: Regex = Regex::new(r"\s*\[\+\d+\s*chars\]$").unwrap();
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\n+").unwrap();
}

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_SOURCE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedDate {
    /// Value as supplied, used for the `datetime` attribute.
    pub raw: String,
    pub display: String,
}

/// Everything the reading page shows, after the caller's metadata and the
/// extraction result have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub title: String,
    pub hero_image: Option<String>,
    pub source: String,
    pub published: Option<PublishedDate>,
    /// Caller description, only shown when nothing was extracted.
    pub lede: Option<String>,
    pub paragraphs: Vec<String>,
    pub original_url: Option<String>,
}

impl ArticleView {
    pub fn build(reference: &ArticleReference, extracted: Option<&ExtractionResult>) -> Self {
        let scraped_text = extracted
            .map(|result| result.text.as_str())
            .filter(|text| !text.is_empty());

        let title = extracted
            .and_then(|result| result.title.as_deref())
            .filter(|title| !title.is_empty())
            .or(reference.title())
            .unwrap_or(UNTITLED)
            .to_string();

        let hero_image = reference
            .url_to_image()
            .or_else(|| extracted.and_then(|result| result.image.as_deref()))
            .filter(|image| !image.is_empty())
            .map(str::to_string);

        let body = match scraped_text {
            Some(text) => text.to_string(),
            None => reference.content().map(strip_truncation_marker).unwrap_or_default(),
        };

        let lede = match scraped_text {
            Some(_) => None,
            None => reference.description().map(str::to_string),
        };

        Self {
            title,
            hero_image,
            source: reference.source().unwrap_or(UNKNOWN_SOURCE).to_string(),
            published: reference.published_at().map(|raw| PublishedDate {
                raw: raw.to_string(),
                display: format_published(raw),
            }),
            lede,
            paragraphs: split_paragraphs(&body),
            original_url: reference.url().map(str::to_string),
        }
    }

    pub fn has_body(&self) -> bool {
        self.lede.is_some() || !self.paragraphs.is_empty()
    }
}

pub fn strip_truncation_marker(content: &str) -> String {
    TRUNCATION_MARKER.replace(content, "").into_owned()
}

fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Short US-style date (`3/1/2024`). Dates keep the offset they were written
/// in rather than being shifted to server local time.
pub fn format_published(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.date_naive())
        .or_else(|_| DateTime::parse_from_rfc2822(raw).map(|date| date.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| "Invalid Date".to_string())
}
