use serde::Deserialize;

/// Article metadata handed to the reading page by the caller, usually a
/// news-listing feed. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleReference {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub source: Option<String>,
    pub content: Option<String>,
}

impl ArticleReference {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }

    pub fn url_to_image(&self) -> Option<&str> {
        non_empty(&self.url_to_image)
    }

    pub fn published_at(&self) -> Option<&str> {
        non_empty(&self.published_at)
    }

    pub fn source(&self) -> Option<&str> {
        non_empty(&self.source)
    }

    pub fn content(&self) -> Option<&str> {
        non_empty(&self.content)
    }
}

/// Empty strings count as "not provided".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// What the extractor derived from a fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Paragraph texts joined by a blank line.
    pub text: String,
    pub title: Option<String>,
    pub image: Option<String>,
}

impl ExtractionResult {
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text.split("\n\n").filter(|p| !p.is_empty())
    }
}
