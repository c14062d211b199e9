use serde::Serialize;

use crate::models::fetch_outcome::FetchOutcome;
use crate::models::github_repository::Repository;
use crate::models::github_user::UserProfile;
use crate::models::username::Username;

pub const NO_BIO: &str = "No bio available.";
pub const NO_LOCATION: &str = "Worldwide";
pub const DEFAULT_VISIBILITY: &str = "Public";
pub const UNKNOWN_LANGUAGE: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description";
pub const NO_REPOSITORIES: &str = "No repositories available.";


#[derive(Debug, Clone, Serialize)]
pub struct ProfileViewModel {
    pub username: String,
    pub is_loading: bool,
    pub is_failed: bool,
    pub is_succeeded: bool,
    pub error_message: Option<&'static str>,
    pub profile: Option<ProfileHeader>,
    pub repositories: Vec<RepositoryRow>,
    pub has_repositories: bool,
    pub no_repositories_message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileHeader {
    pub avatar_url: String,
    pub name: String,
    pub bio: String,
    pub location: String,
    pub followers: u64,
    pub following: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryRow {
    pub id: u64,
    pub name: String,
    pub visibility: String,
    pub language: String,
    pub description: String,
    pub link: String,
}

/// Applies the display fallbacks. `username` stands in for a missing name.
pub fn to_view_model(username: &Username, outcome: &FetchOutcome) -> ProfileViewModel {
    let mut vm = ProfileViewModel {
        username: username.to_string(),
        is_loading: false,
        is_failed: false,
        is_succeeded: false,
        error_message: None,
        profile: None,
        repositories: vec![],
        has_repositories: false,
        no_repositories_message: NO_REPOSITORIES,
    };

    match outcome {
        FetchOutcome::Loading => vm.is_loading = true,
        FetchOutcome::Failed(e) => {
            vm.is_failed = true;
            vm.error_message = Some(e.user_message());
        }
        FetchOutcome::Succeeded { profile, repositories } => {
            vm.is_succeeded = true;
            vm.profile = Some(to_header(username, profile));
            vm.repositories = repositories.iter().map(to_row).collect();
            vm.has_repositories = !vm.repositories.is_empty();
        }
    }
    vm
}

fn to_header(username: &Username, profile: &UserProfile) -> ProfileHeader {
    let profile_clone = profile.clone();
    ProfileHeader {
        avatar_url: profile_clone.avatar_url,
        name: profile_clone.name.unwrap_or_else(|| username.to_string()),
        bio: profile_clone.bio.unwrap_or_else(|| NO_BIO.into()),
        location: profile_clone.location.unwrap_or_else(|| NO_LOCATION.into()),
        followers: profile_clone.followers,
        following: profile_clone.following,
    }
}

fn to_row(repository: &Repository) -> RepositoryRow {
    let repository_clone = repository.clone();
    RepositoryRow {
        id: repository_clone.id,
        name: repository_clone.name,
        visibility: repository_clone.visibility.unwrap_or_else(|| DEFAULT_VISIBILITY.into()),
        language: repository_clone.language.unwrap_or_else(|| UNKNOWN_LANGUAGE.into()),
        description: repository_clone.description.unwrap_or_else(|| NO_DESCRIPTION.into()),
        link: repository_clone.clone_url,
    }
}
