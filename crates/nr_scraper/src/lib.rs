pub mod cli;
pub mod client;
pub mod extract;
pub mod logging;

pub use client::{ExtractorConfig, HttpExtractor};
pub use extract::extract_from_html;

pub use cli::{handle_command, FetchArgs};

pub mod prelude {
    pub use super::client::{ExtractorConfig, HttpExtractor};
    pub use nr_core::{ContentExtractor, ExtractionResult, Error, Result};
}
