pub mod fetch_outcome;
pub mod github_repository;
pub mod github_user;
pub mod username;
