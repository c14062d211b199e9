use std::sync::Arc;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::mappers::profile_mapper;
use crate::screens::input_screen::InputScreen;
use crate::screens::profile_screen::ProfileScreen;
use crate::AppState;


#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    user: Option<String>,
}

/// Runs one profile screen per request. If the client goes away the handler
/// future is dropped, which drops the screen and cancels its fetch.
#[axum_macros::debug_handler]
pub async fn get_profile(query: Query<ProfileQuery>, State(state): State<Arc<AppState>>) -> Response {
    let mut input = InputScreen::new();
    input.edit(query.0.user.as_deref().unwrap_or_default());
    let Some(username) = input.proceed() else {
        return Redirect::to("/").into_response();
    };

    let mut screen = ProfileScreen::new(username);
    screen.activate(state.github_user_service.clone());
    screen.settled().await;

    let vm = profile_mapper::to_view_model(screen.username(), &screen.outcome());
    let title = screen.username().to_string();
    super::render_page(&state.registry, &title, "profile", &vm)
}
