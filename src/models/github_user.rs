use serde::{Deserialize, Serialize};

/// Public profile returned by `GET /users/{username}`.
///
/// Optional keys stay `None` when GitHub omits them or sends `null`; display
/// fallbacks are applied by the profile mapper, not here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub followers: u64,
    pub following: u64,
}
