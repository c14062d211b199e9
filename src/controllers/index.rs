use std::sync::Arc;
use axum::extract::State;
use axum::response::Response;

use crate::AppState;


pub async fn get_index(State(state): State<Arc<AppState>>) -> Response {
    super::render_page(&state.registry, "Home", "index", &serde_json::json!({}))
}
