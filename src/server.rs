use crate::i18n::Language;
use crate::site::RenderedSite;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    languages: Vec<Language>,
}

/// Build the application router serving the pre-rendered pages.
pub fn router(site: Arc<RenderedSite>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/:lang", get(language_page))
        .route("/:lang/", get(language_page))
        .layer(TraceLayer::new_for_http())
        .with_state(site)
}

async fn index(State(site): State<Arc<RenderedSite>>) -> Html<String> {
    Html(site.default_page().to_string())
}

async fn language_page(
    State(site): State<Arc<RenderedSite>>,
    Path(code): Path<String>,
) -> Response {
    match code.parse::<Language>() {
        Ok(language) => Html(site.page(language).to_string()).into_response(),
        Err(e) => {
            debug!("{}", e);
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        languages: Language::ALL.to_vec(),
    })
}
