
/// Characters that can never appear in a GitHub login.
pub const USERNAME_BLACKLIST: &str = " ";

// Drops every blacklisted char, keeping the rest in order.
pub fn strip_blacklisted(value: &str, blacklist: &str) -> String {
    value.chars()
        .filter(|char| !blacklist.contains(*char))
        .collect()
}
