//! Unit tests for the download coordinator state machine:
//! `Requested -> Confirmed(path) | Cancelled`, both terminal.

use std::path::{Path, PathBuf};

use duskbrowser::managers::download_coordinator::{
    DownloadCoordinator, DownloadCoordinatorTrait, SavePrompt,
};
use duskbrowser::types::download::{DownloadDecision, DownloadState};
use duskbrowser::types::errors::DownloadError;

/// A prompt that answers with a pre-chosen destination (or dismissal) and
/// records what it was asked.
struct ScriptedPrompt {
    answer: Option<PathBuf>,
    asked: Vec<(PathBuf, String)>,
}

impl ScriptedPrompt {
    fn accepting(path: PathBuf) -> Self {
        Self { answer: Some(path), asked: Vec::new() }
    }

    fn dismissing() -> Self {
        Self { answer: None, asked: Vec::new() }
    }
}

impl SavePrompt for ScriptedPrompt {
    fn choose_destination(&mut self, default_path: &Path, file_name: &str) -> Option<PathBuf> {
        self.asked.push((default_path.to_path_buf(), file_name.to_string()));
        self.answer.clone()
    }
}

#[test]
fn test_request_starts_in_requested_state() {
    let mut dl = DownloadCoordinator::new();
    let id = dl.request("file.zip", Path::new("/downloads/file.zip"));

    let record = dl.get(&id).unwrap();
    assert_eq!(record.state, DownloadState::Requested);
    assert_eq!(record.file_name, "file.zip");
    assert!(!record.is_resolved());
}

#[test]
fn test_request_ids_are_unique() {
    let mut dl = DownloadCoordinator::new();
    let a = dl.request("a.zip", Path::new("/downloads/a.zip"));
    let b = dl.request("b.zip", Path::new("/downloads/b.zip"));
    assert_ne!(a, b);
    assert_eq!(dl.list().len(), 2);
}

#[test]
fn test_accepted_prompt_confirms_with_chosen_path() {
    let dir = tempfile::tempdir().unwrap();
    let chosen = dir.path().join("saved.zip");

    let mut dl = DownloadCoordinator::new();
    let id = dl.request("file.zip", &dir.path().join("file.zip"));

    let mut prompt = ScriptedPrompt::accepting(chosen.clone());
    let decision = dl.resolve(&id, &mut prompt).unwrap();

    assert_eq!(decision, DownloadDecision::Accept(chosen.clone()));
    assert_eq!(dl.get(&id).unwrap().state, DownloadState::Confirmed { path: chosen });
    // The prompt saw the engine's suggestion.
    assert_eq!(prompt.asked.len(), 1);
    assert_eq!(prompt.asked[0].1, "file.zip");
}

#[test]
fn test_dismissed_prompt_cancels() {
    let mut dl = DownloadCoordinator::new();
    let id = dl.request("file.zip", Path::new("/downloads/file.zip"));

    let decision = dl.resolve(&id, &mut ScriptedPrompt::dismissing()).unwrap();
    assert_eq!(decision, DownloadDecision::Cancel);
    assert_eq!(dl.get(&id).unwrap().state, DownloadState::Cancelled);
}

#[test]
fn test_cancelled_is_terminal() {
    let mut dl = DownloadCoordinator::new();
    let id = dl.request("file.zip", Path::new("/downloads/file.zip"));
    dl.cancel(&id).unwrap();

    // Neither a second resolution nor a late confirm may revive it.
    assert!(matches!(
        dl.resolve(&id, &mut ScriptedPrompt::dismissing()),
        Err(DownloadError::AlreadyResolved(_))
    ));
    assert!(matches!(
        dl.confirm(&id, Path::new("/tmp/late.zip")),
        Err(DownloadError::AlreadyResolved(_))
    ));
    assert_eq!(dl.get(&id).unwrap().state, DownloadState::Cancelled);
}

#[test]
fn test_confirmed_is_terminal() {
    let mut dl = DownloadCoordinator::new();
    let id = dl.request("file.zip", Path::new("/downloads/file.zip"));
    dl.confirm(&id, Path::new("/tmp/file.zip")).unwrap();

    assert!(matches!(
        dl.cancel(&id),
        Err(DownloadError::AlreadyResolved(_))
    ));
}

#[test]
fn test_unknown_id_is_not_found() {
    let mut dl = DownloadCoordinator::new();
    assert!(matches!(
        dl.cancel("no-such-id"),
        Err(DownloadError::NotFound(_))
    ));
    assert!(dl.get("no-such-id").is_none());
}

#[test]
fn test_requests_tracked_independently() {
    let mut dl = DownloadCoordinator::new();
    let a = dl.request("a.zip", Path::new("/downloads/a.zip"));
    let b = dl.request("b.zip", Path::new("/downloads/b.zip"));

    dl.confirm(&a, Path::new("/tmp/a.zip")).unwrap();
    dl.cancel(&b).unwrap();

    assert!(matches!(dl.get(&a).unwrap().state, DownloadState::Confirmed { .. }));
    assert_eq!(dl.get(&b).unwrap().state, DownloadState::Cancelled);
}
