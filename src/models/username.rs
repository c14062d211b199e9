use std::fmt;

use crate::validators::{self, USERNAME_BLACKLIST};


/// A GitHub login with every space removed. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn sanitize(raw: &str) -> Option<Username> {
        let stripped = validators::strip_blacklisted(raw, USERNAME_BLACKLIST);
        if stripped.is_empty() {
            return None;
        }
        Some(Username(stripped))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
