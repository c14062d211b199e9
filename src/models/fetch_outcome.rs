use crate::errors::FetchError;
use crate::models::github_repository::Repository;
use crate::models::github_user::UserProfile;

/// Lifecycle of one profile fetch. Moves from `Loading` to a terminal
/// variant exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchOutcome {
    #[default]
    Loading,
    Failed(FetchError),
    Succeeded {
        profile: UserProfile,
        repositories: Vec<Repository>,
    },
}

impl FetchOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchOutcome::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }
}

impl From<Result<(UserProfile, Vec<Repository>), FetchError>> for FetchOutcome {
    fn from(result: Result<(UserProfile, Vec<Repository>), FetchError>) -> Self {
        match result {
            Ok((profile, repositories)) => FetchOutcome::Succeeded { profile, repositories },
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}
