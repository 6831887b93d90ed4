use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Lifecycle of a single download request.
///
/// `Confirmed` and `Cancelled` are both terminal; a cancelled download can
/// only be re-triggered from the page itself, which produces a fresh request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadState {
    /// The engine announced the download; no destination chosen yet.
    Requested,
    /// The user picked a destination and the transfer may proceed.
    Confirmed { path: PathBuf },
    /// The prompt was dismissed; the transfer is aborted.
    Cancelled,
}

/// What the shell answers the engine with for one download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadDecision {
    Accept(PathBuf),
    Cancel,
}

/// A download request as tracked by the coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub id: String,
    pub file_name: String,
    pub default_path: PathBuf,
    pub state: DownloadState,
}

impl DownloadRecord {
    /// True once the request reached a terminal state.
    pub fn is_resolved(&self) -> bool {
        !matches!(self.state, DownloadState::Requested)
    }
}
