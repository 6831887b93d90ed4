use serde::{Deserialize, Serialize};

/// A saved page: a menu label paired with the URL it reopens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub label: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}
