use thiserror::Error;

/// Why a profile fetch ended in `Failed`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid URL")]
    InvalidUrl,
    #[error("invalid response")]
    InvalidResponse,
    #[error("invalid data")]
    InvalidData,
    #[error("unexpected error")]
    Unexpected,
}

impl FetchError {
    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl => "Invalid URL: the profile address could not be built.",
            FetchError::InvalidResponse => "Invalid response: GitHub did not return this profile.",
            FetchError::InvalidData => "Invalid data: the profile could not be read.",
            FetchError::Unexpected => "Unexpected error while loading the profile.",
        }
    }
}
