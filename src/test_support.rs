//! In-process stand-in for the GitHub REST endpoints used by the fetcher.

use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

pub const MINIMAL_PROFILE: &str = r#"{
    "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
    "followers": 0,
    "following": 0
}"#;

pub const OCTOCAT_PROFILE: &str = r#"{
    "login": "octocat",
    "id": 583231,
    "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
    "name": "The Octocat",
    "company": "@github",
    "blog": "https://github.blog",
    "location": "San Francisco",
    "bio": null,
    "public_repos": 8,
    "followers": 21000,
    "following": 9
}"#;

pub const OCTOCAT_REPOS: &str = r#"[
    {
        "id": 1300192,
        "name": "Spoon-Knife",
        "description": "This repo is for demonstration purposes only.",
        "visibility": "public",
        "language": "HTML",
        "clone_url": "https://github.com/octocat/Spoon-Knife.git"
    },
    {
        "id": 1296269,
        "name": "Hello-World",
        "description": "My first repository on GitHub!",
        "visibility": "public",
        "language": null,
        "clone_url": "https://github.com/octocat/Hello-World.git"
    },
    {
        "id": 20978623,
        "name": "linguist",
        "description": null,
        "language": "Ruby",
        "clone_url": "https://github.com/octocat/linguist.git"
    }
]"#;

#[derive(Debug, Clone)]
pub struct MockRoute {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl MockRoute {
    pub fn json(status: StatusCode, body: &str) -> Self {
        MockRoute {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn ok(body: &str) -> Self {
        MockRoute::json(StatusCode::OK, body)
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub struct MockGitHub {
    pub base: String,
    pub profile_hits: Arc<AtomicUsize>,
    pub repos_hits: Arc<AtomicUsize>,
}

struct MockState {
    profile: MockRoute,
    repos: MockRoute,
    profile_hits: Arc<AtomicUsize>,
    repos_hits: Arc<AtomicUsize>,
}

pub async fn spawn_mock_github(profile: MockRoute, repos: MockRoute) -> MockGitHub {
    let profile_hits = Arc::new(AtomicUsize::new(0));
    let repos_hits = Arc::new(AtomicUsize::new(0));
    let state = Arc::new(MockState {
        profile,
        repos,
        profile_hits: profile_hits.clone(),
        repos_hits: repos_hits.clone(),
    });

    let app = Router::new()
        .route("/users/:username", get(profile_handler))
        .route("/users/:username/repos", get(repos_handler))
        .with_state(state);

    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);

    MockGitHub {
        base: format!("http://{}", addr),
        profile_hits,
        repos_hits,
    }
}

/// A base URL on which nothing is listening.
pub fn closed_port_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind to ephemeral port");
    let addr = listener.local_addr().expect("port");
    drop(listener);
    format!("http://{}", addr)
}

async fn profile_handler(
    Path(_username): Path<String>,
    State(state): State<Arc<MockState>>,
) -> Response {
    state.profile_hits.fetch_add(1, Ordering::SeqCst);
    respond(&state.profile).await
}

async fn repos_handler(
    Path(_username): Path<String>,
    State(state): State<Arc<MockState>>,
) -> Response {
    state.repos_hits.fetch_add(1, Ordering::SeqCst);
    respond(&state.repos).await
}

async fn respond(route: &MockRoute) -> Response {
    if !route.delay.is_zero() {
        tokio::time::sleep(route.delay).await;
    }
    (
        route.status,
        [(header::CONTENT_TYPE, "application/json")],
        route.body.clone(),
    )
        .into_response()
}
