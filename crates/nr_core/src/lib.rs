pub mod error;
pub mod extractor;
pub mod types;

pub use error::{Error, Result};
pub use extractor::ContentExtractor;
pub use types::{ArticleReference, ExtractionResult};
