//! Download coordinator for Duskbrowser.
//!
//! When the engine announces a download, the coordinator records it, asks a
//! `SavePrompt` for a destination, and answers with accept-or-cancel. The
//! transfer itself is the engine's business; the shell tracks nothing past
//! the decision. Per request: `Requested -> Confirmed(path) | Cancelled`,
//! both terminal.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::types::download::{DownloadDecision, DownloadRecord, DownloadState};
use crate::types::errors::DownloadError;

/// Chooses a destination for one download, or declines it.
///
/// The GUI implements this with a native save dialog, which deliberately
/// blocks the UI thread; tests script it.
pub trait SavePrompt {
    /// `None` means the prompt was dismissed and the download is cancelled.
    fn choose_destination(&mut self, default_path: &Path, file_name: &str) -> Option<PathBuf>;
}

/// Trait defining download coordination operations.
pub trait DownloadCoordinatorTrait {
    /// Records an engine download request. Returns the request's ID.
    fn request(&mut self, file_name: &str, default_path: &Path) -> String;
    /// Runs the prompt for a pending request and applies the outcome.
    fn resolve(
        &mut self,
        id: &str,
        prompt: &mut dyn SavePrompt,
    ) -> Result<DownloadDecision, DownloadError>;
    fn confirm(&mut self, id: &str, path: &Path) -> Result<(), DownloadError>;
    fn cancel(&mut self, id: &str) -> Result<(), DownloadError>;
    fn get(&self, id: &str) -> Option<&DownloadRecord>;
    fn list(&self) -> Vec<&DownloadRecord>;
}

/// In-memory download request tracker.
#[derive(Debug, Default)]
pub struct DownloadCoordinator {
    requests: Vec<DownloadRecord>,
}

impl DownloadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_index(&self, id: &str) -> Result<usize, DownloadError> {
        self.requests
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DownloadError::NotFound(id.to_string()))
    }

    fn find_pending(&mut self, id: &str) -> Result<&mut DownloadRecord, DownloadError> {
        let idx = self.find_index(id)?;
        let record = &mut self.requests[idx];
        if record.is_resolved() {
            return Err(DownloadError::AlreadyResolved(id.to_string()));
        }
        Ok(record)
    }
}

impl DownloadCoordinatorTrait for DownloadCoordinator {
    fn request(&mut self, file_name: &str, default_path: &Path) -> String {
        let id = Uuid::new_v4().to_string();
        self.requests.push(DownloadRecord {
            id: id.clone(),
            file_name: file_name.to_string(),
            default_path: default_path.to_path_buf(),
            state: DownloadState::Requested,
        });
        id
    }

    fn resolve(
        &mut self,
        id: &str,
        prompt: &mut dyn SavePrompt,
    ) -> Result<DownloadDecision, DownloadError> {
        let (default_path, file_name) = {
            let record = self.find_pending(id)?;
            (record.default_path.clone(), record.file_name.clone())
        };
        match prompt.choose_destination(&default_path, &file_name) {
            Some(path) => {
                self.confirm(id, &path)?;
                Ok(DownloadDecision::Accept(path))
            }
            None => {
                self.cancel(id)?;
                Ok(DownloadDecision::Cancel)
            }
        }
    }

    fn confirm(&mut self, id: &str, path: &Path) -> Result<(), DownloadError> {
        let record = self.find_pending(id)?;
        record.state = DownloadState::Confirmed {
            path: path.to_path_buf(),
        };
        Ok(())
    }

    fn cancel(&mut self, id: &str) -> Result<(), DownloadError> {
        let record = self.find_pending(id)?;
        record.state = DownloadState::Cancelled;
        Ok(())
    }

    fn get(&self, id: &str) -> Option<&DownloadRecord> {
        self.requests.iter().find(|r| r.id == id)
    }

    fn list(&self) -> Vec<&DownloadRecord> {
        self.requests.iter().collect()
    }
}
