use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{middleware::RequestId, panel::render};

use super::{page, AppState};

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Host page with the container rendered from the current state
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::host_page(&state.panel.render().await))
}

/// Trigger: runs one fetch cycle and returns the resulting container HTML
///
/// Always 200; retrieval failures are part of the rendered content.
pub async fn trigger_fetch(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Html<String> {
    tracing::info!(%request_id, "Recommendations requested");
    let panel_state = state.panel.fetch_recommendations().await;
    tracing::info!(
        %request_id,
        state = panel_state.label(),
        cards = panel_state.cards().len(),
        "Panel rendered"
    );
    Html(render(&panel_state))
}

/// Current container HTML without triggering a fetch
pub async fn container(State(state): State<AppState>) -> Html<String> {
    Html(state.panel.render().await)
}
