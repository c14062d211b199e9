use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// One entry of `GET /users/{username}/repos`, kept in API order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Kept exactly as GitHub sent it; only checked for well-formedness.
    #[serde(deserialize_with = "well_formed_url")]
    pub clone_url: String,
}

fn well_formed_url<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Url::parse(&raw).map_err(serde::de::Error::custom)?;
    Ok(raw)
}
