//! Engine binding layer.
//!
//! The embedded browser engine is external to this crate: page rendering,
//! networking, script execution, and download transfers all happen behind
//! these traits. The shell only issues fire-and-forget commands and reads
//! state the binding already caches.

pub mod scripted;

use crate::types::history::HistoryItem;

/// Factory for engine views, one per tab.
pub trait Engine {
    /// Creates a fresh view already loading `initial_url`.
    fn create_view(&mut self, initial_url: &str) -> Box<dyn EngineView>;
}

/// Handle to one engine-rendered page.
///
/// Commands (`load`, `reload`, `go_back`, `go_forward`) are fire-and-forget;
/// reads (`current_url`, `title`, `can_go_back`, `can_go_forward`,
/// `history_items`) return the binding's cached state without blocking.
/// Dropping the view tears the page down, cancelling any in-flight work.
pub trait EngineView {
    fn load(&mut self, url: &str);
    fn reload(&mut self);

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn go_back(&mut self);
    fn go_forward(&mut self);

    fn current_url(&self) -> &str;
    fn title(&self) -> &str;

    /// The view's navigation history, oldest first.
    fn history_items(&self) -> Vec<HistoryItem>;

    /// Delivery point for the engine's url-changed notification.
    ///
    /// The binding redelivers navigations (redirects, link clicks, title
    /// updates) on the UI thread through this call so subsequent reads stay
    /// current.
    fn note_url_changed(&mut self, url: &str, title: &str);
}
