use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use nr_core::ArticleReference;
use tracing::debug;
use crate::view::ArticleView;
use crate::{templates, AppState};

pub async fn article_page(
    State(state): State<Arc<AppState>>,
    Query(reference): Query<ArticleReference>,
) -> impl IntoResponse {
    let extracted = match reference.url() {
        Some(url) => state.extractor.extract(url).await,
        None => None,
    };
    debug!(
        url = reference.url(),
        extracted = extracted.is_some(),
        "Rendering article page"
    );

    let view = ArticleView::build(&reference, extracted.as_ref());
    Html(templates::render_article(&view))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(templates::render_not_found()))
}
