use serde::{Deserialize, Serialize};

/// A titled block of text bounded by one `##` header and the next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Header text with surrounding whitespace removed
    pub title: String,
    /// Normalized body, excluding the header line
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
