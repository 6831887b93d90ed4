//! App context for Duskbrowser.
//!
//! One explicit struct holding every shell component; constructors receive
//! it (or pieces of it) instead of reaching for ambient singletons.

use crate::config;
use crate::engine::Engine;
use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::download_coordinator::DownloadCoordinator;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::types::theme::Theme;

/// Central application struct: tab container, bookmarks, download
/// coordinator, and the fixed theme.
///
/// Dropping the `App` tears down every tab and its engine view transitively;
/// nothing is persisted, so there is no explicit shutdown step.
pub struct App {
    pub tabs: TabManager,
    pub bookmarks: BookmarkStore,
    pub downloads: DownloadCoordinator,
    pub theme: Theme,
}

impl App {
    /// Creates the shell context on top of the given engine binding.
    ///
    /// The bookmark store starts with the fixed seed entries; no tab is
    /// opened until `startup`.
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            tabs: TabManager::new(engine),
            bookmarks: BookmarkStore::seeded(config::SEED_BOOKMARKS),
            downloads: DownloadCoordinator::new(),
            theme: Theme::dark(),
        }
    }

    /// Startup sequence: open the initial tab at the landing page.
    pub fn startup(&mut self) {
        if self.tabs.count() == 0 {
            self.tabs.open(config::DEFAULT_URL);
        }
    }
}
