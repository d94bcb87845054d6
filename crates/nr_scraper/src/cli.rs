use clap::Args;
use nr_core::{ContentExtractor, ExtractionResult, Result};
use std::io::Write;

#[derive(Args, Clone, Debug)]
pub struct FetchArgs {
    /// Article URL to fetch and extract
    pub url: String,
}

/// Runs the extractor once and prints what it found to `out`.
pub async fn handle_command(
    args: FetchArgs,
    extractor: &dyn ContentExtractor,
    out: &mut dyn Write,
) -> Result<()> {
    match extractor.extract(&args.url).await {
        Some(result) => print_result(&result, out)?,
        None => writeln!(out, "❌ No content could be extracted from {}", args.url)?,
    }
    Ok(())
}

fn print_result(result: &ExtractionResult, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "📰 {}", result.title.as_deref().unwrap_or("(no title)"))?;
    if let Some(image) = &result.image {
        writeln!(out, "🖼️ {}", image)?;
    }
    writeln!(out, "📑 {} paragraphs", result.paragraphs().count())?;
    writeln!(out)?;
    writeln!(out, "{}", result.text)?;
    Ok(())
}
