pub mod index;
pub mod profile;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use handlebars::Handlebars;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::AppState;


#[derive(Debug, Serialize)]
pub struct TemplateViewModel {
    pub title: String,
    pub body: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/profile", get(profile::get_profile))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Renders `name` inside the page layout, falling back to the 500 page.
pub fn render_page<T: Serialize>(
    registry: &Handlebars<'_>,
    title: &str,
    name: &str,
    data: &T,
) -> Response {
    let page = registry.render(name, data).and_then(|body| {
        let layout = TemplateViewModel { title: title.into(), body };
        registry.render("template", &layout)
    });

    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::error!("Failed to render {}: {}", name, e);
            get_error_page(registry, StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}

pub fn get_error_page(registry: &Handlebars<'_>, status: StatusCode) -> (StatusCode, Html<String>) {
    let page = registry.render("errors/500", &serde_json::json!({})).and_then(|body| {
        let layout = TemplateViewModel { title: status.to_string(), body };
        registry.render("template", &layout)
    });

    match page {
        Ok(html) => (status, Html(html)),
        Err(e) => {
            log::error!("Failed to render error page: {}", e);
            (status, Html(status.to_string()))
        }
    }
}
