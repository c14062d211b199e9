use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::FetchError;
use crate::models::fetch_outcome::FetchOutcome;
use crate::models::github_repository::Repository;
use crate::models::github_user::UserProfile;
use crate::models::username::Username;


pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const PROFILE_ENDPOINT: &str = "/users/{username}";
const REPOSITORIES_ENDPOINT: &str = "/users/{username}/repos";
const USER_AGENT_VALUE: &str = concat!("smol-github-profile/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// How the profile and repository requests are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStrategy {
    /// Profile first; the repository request is skipped if it fails.
    #[default]
    Sequential,
    /// Both requests in flight at once. Any failure still fails the fetch.
    Parallel,
}

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub api_base: String,
    pub strategy: FetchStrategy,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        FetcherConfig {
            api_base: DEFAULT_API_BASE.into(),
            strategy: FetchStrategy::default(),
        }
    }
}

pub struct GitHubUserService {
    pub client: Client,
    pub config: FetcherConfig,
}

impl GitHubUserService {
    pub fn new(client: Client, config: FetcherConfig) -> Self {
        GitHubUserService { client, config }
    }

    /// Resolves a username into a terminal outcome. Every error is folded
    /// into `FetchOutcome::Failed`; this never returns `Loading`.
    pub async fn fetch_profile(&self, username: &Username) -> FetchOutcome {
        log::info!("Fetching GitHub profile, username: {}!", username);
        let result = match self.config.strategy {
            FetchStrategy::Sequential => self.fetch_sequential(username).await,
            FetchStrategy::Parallel => {
                tokio::try_join!(self.get_user(username), self.get_repositories(username))
            }
        };

        match &result {
            Ok((_, repositories)) => log::info!(
                "Fetched GitHub profile, username: {}, repositories: {}!",
                username,
                repositories.len()
            ),
            Err(e) => log::error!("Failed to fetch GitHub profile, username: {}: {}", username, e),
        }
        result.into()
    }

    async fn fetch_sequential(
        &self,
        username: &Username,
    ) -> Result<(UserProfile, Vec<Repository>), FetchError> {
        let profile = self.get_user(username).await?;
        let repositories = self.get_repositories(username).await?;
        Ok((profile, repositories))
    }

    pub async fn get_user(&self, username: &Username) -> Result<UserProfile, FetchError> {
        let url = self.endpoint(PROFILE_ENDPOINT, username)?;
        self.get_json(url).await
    }

    pub async fn get_repositories(&self, username: &Username) -> Result<Vec<Repository>, FetchError> {
        let url = self.endpoint(REPOSITORIES_ENDPOINT, username)?;
        self.get_json(url).await
    }

    /// Interpolates the percent-encoded username into an endpoint template.
    pub fn endpoint(&self, template: &str, username: &Username) -> Result<Url, FetchError> {
        // Dot segments would be resolved away and hit a different endpoint.
        if matches!(username.as_str(), "." | "..") {
            log::error!("Refusing to build endpoint for username: {}", username);
            return Err(FetchError::InvalidUrl);
        }

        let path = template.replace("{username}", &urlencoding::encode(username.as_str()));
        let raw = format!("{}{}", self.config.api_base.trim_end_matches('/'), path);
        let url = Url::parse(&raw).map_err(|e| {
            log::error!("Failed to build endpoint {}: {}", raw, e);
            FetchError::InvalidUrl
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            log::error!("Unsupported endpoint scheme: {}", url);
            return Err(FetchError::InvalidUrl);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        log::info!("Making request to {}...", url);

        let response = self.client.get(url.clone())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|e| {
                log::error!("Request to {} failed: {:?}", url, e);
                if e.is_builder() {
                    FetchError::Unexpected
                } else {
                    FetchError::InvalidResponse
                }
            })?;

        if !response.status().is_success() {
            log::error!("{} answered {}", url, response.status());
            return Err(FetchError::InvalidResponse);
        }

        let contents = response.text().await.map_err(|e| {
            log::error!("Failed to read body of {}: {:?}", url, e);
            FetchError::InvalidResponse
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            log::error!("Failed to decode body of {}: {}", url, e);
            FetchError::InvalidData
        })
    }
}
