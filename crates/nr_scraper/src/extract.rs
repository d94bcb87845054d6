use nr_core::{Error, ExtractionResult, Result};
use scraper::{ElementRef, Html, Selector};

/// Elements that never hold article text.
pub const STRIPPED_ELEMENTS: &str =
    "script,noscript,style,header,footer,nav,aside,form,iframe,svg";

/// Containers commonly used for article bodies, tried in order when the page
/// has no `<article>` element.
pub const CONTAINER_SELECTORS: &[&str] = &[
    ".article-content",
    ".post-content",
    ".entry-content",
    ".story-content",
    ".content",
    "#content",
    "#main",
    "[role=main]",
];

/// Derives the readable text, title and lead image of an HTML page.
///
/// Chrome elements are dropped first, then paragraphs are collected from the
/// first `<article>`, the first match of [`CONTAINER_SELECTORS`], or `<body>`,
/// whichever is found first.
pub fn extract_from_html(html: &str) -> Result<ExtractionResult> {
    let mut document = Html::parse_document(html);
    strip_chrome(&mut document)?;

    let root = document.root_element();
    let container = find_container(root)?;

    let paragraph = selector("p")?;
    let text = container
        .select(&paragraph)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    let title = match meta_content(root, "meta[property='og:title']")? {
        Some(title) => Some(title),
        None => element_text(root, "title")?,
    };

    let image = match meta_content(root, "meta[property='og:image']")? {
        Some(image) => Some(image),
        None => meta_content(root, "meta[name='twitter:image']")?,
    };

    Ok(ExtractionResult { text, title, image })
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("Invalid selector {}: {}", css, e)))
}

fn strip_chrome(document: &mut Html) -> Result<()> {
    let chrome = selector(STRIPPED_ELEMENTS)?;
    let ids: Vec<_> = document
        .root_element()
        .select(&chrome)
        .map(|el| el.id())
        .collect();

    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
    Ok(())
}

fn find_container(root: ElementRef<'_>) -> Result<ElementRef<'_>> {
    if let Some(article) = root.select(&selector("article")?).next() {
        return Ok(article);
    }

    for css in CONTAINER_SELECTORS {
        if let Some(container) = root.select(&selector(css)?).next() {
            return Ok(container);
        }
    }

    Ok(root.select(&selector("body")?).next().unwrap_or(root))
}

/// Trimmed `content` attribute of the first element matching `css`.
fn meta_content(root: ElementRef<'_>, css: &str) -> Result<Option<String>> {
    Ok(root
        .select(&selector(css)?)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty()))
}

/// Text of every element matching `css`, concatenated and trimmed.
fn element_text(root: ElementRef<'_>, css: &str) -> Result<Option<String>> {
    let text = root
        .select(&selector(css)?)
        .flat_map(|el| el.text())
        .collect::<String>();
    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}
