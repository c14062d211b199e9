use crate::models::username::Username;
use crate::validators::{self, USERNAME_BLACKLIST};


/// Username entry. Owns its buffer; nothing here touches the network.
#[derive(Debug, Default)]
pub struct InputScreen {
    buffer: String,
}

impl InputScreen {
    pub fn new() -> Self {
        InputScreen::default()
    }

    /// Replaces the buffer with `text`, minus any spaces.
    pub fn edit(&mut self, text: &str) {
        self.buffer = validators::strip_blacklisted(text, USERNAME_BLACKLIST);
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn can_proceed(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Hands the current buffer over to the profile screen, or does nothing
    /// while the buffer is empty.
    pub fn proceed(&self) -> Option<Username> {
        if !self.can_proceed() {
            return None;
        }
        Username::sanitize(&self.buffer)
    }
}
