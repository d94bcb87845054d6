use std::sync::Arc;
use nr_core::ContentExtractor;

pub struct AppState {
    pub extractor: Arc<dyn ContentExtractor>,
}
