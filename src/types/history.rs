use serde::{Deserialize, Serialize};

/// One entry of a view's navigation history, oldest first.
///
/// History is owned by the engine; the shell reads it on demand and never
/// stores it anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub title: String,
    pub url: String,
}
