use std::fmt;

// === DownloadError ===

/// Errors related to download request resolution.
///
/// Everything else the shell guards (tab indices, back/forward availability,
/// closing the last tab) is a silent no-op rather than an error.
#[derive(Debug)]
pub enum DownloadError {
    /// No request with the given ID is tracked.
    NotFound(String),
    /// The request already reached a terminal state; outcomes are final.
    AlreadyResolved(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::NotFound(id) => write!(f, "Download request not found: {}", id),
            DownloadError::AlreadyResolved(id) => {
                write!(f, "Download request already resolved: {}", id)
            }
        }
    }
}

impl std::error::Error for DownloadError {}
