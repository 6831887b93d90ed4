//! Navigation toolbar for Duskbrowser.
//!
//! The toolbar itself is stateless: every control becomes a `ToolbarEvent`
//! dispatched through [`dispatch`], which forwards to the active tab's
//! engine view and reports what was forwarded. The GUI mirrors the result
//! onto the WebView; tests assert on it directly.

use crate::managers::tab_manager::{TabManager, TabManagerTrait};

/// A toolbar control firing, or a bookmark-menu activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarEvent {
    Back,
    Forward,
    Reload,
    NewTab,
    /// Raw URL-bar text, submitted.
    SubmitUrl(String),
    /// A bookmark entry was activated; the URL is stored as-is.
    OpenBookmark(String),
    OpenDevTools,
}

/// The engine call a dispatched event resulted in, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Forwarded {
    /// Nothing was forwarded (guard failed or input was empty).
    None,
    WentBack,
    WentForward,
    Reloaded,
    /// The active view was told to load this (already normalized) URL.
    Loaded(String),
    /// A new tab was opened at this index.
    Opened(usize),
    /// Dev tools were requested for the displayed page.
    DevToolsRequested,
}

/// Forwards one toolbar event to the tab container and the active view.
pub fn dispatch(tabs: &mut TabManager, event: ToolbarEvent) -> Forwarded {
    match event {
        ToolbarEvent::Back => match tabs.active_mut() {
            Some(tab) if tab.view.can_go_back() => {
                tab.view.go_back();
                Forwarded::WentBack
            }
            _ => Forwarded::None,
        },

        ToolbarEvent::Forward => match tabs.active_mut() {
            Some(tab) if tab.view.can_go_forward() => {
                tab.view.go_forward();
                Forwarded::WentForward
            }
            _ => Forwarded::None,
        },

        ToolbarEvent::Reload => match tabs.active_mut() {
            Some(tab) => {
                tab.view.reload();
                Forwarded::Reloaded
            }
            None => Forwarded::None,
        },

        ToolbarEvent::NewTab => Forwarded::Opened(tabs.open("")),

        ToolbarEvent::SubmitUrl(input) => {
            let Some(url) = normalize_url(&input) else {
                return Forwarded::None;
            };
            match tabs.active_mut() {
                Some(tab) => {
                    tab.view.load(&url);
                    tab.display_title.clear();
                    Forwarded::Loaded(url)
                }
                None => Forwarded::None,
            }
        }

        ToolbarEvent::OpenBookmark(url) => Forwarded::Opened(tabs.open(&url)),

        ToolbarEvent::OpenDevTools => {
            if tabs.active().is_some() {
                Forwarded::DevToolsRequested
            } else {
                Forwarded::None
            }
        }
    }
}

/// Applies the scheme rule to URL-bar input.
///
/// `http://`, `https://`, and `file://` pass through unchanged; anything
/// else gets the default scheme prepended. Returns `None` for blank input.
/// There is no further validation; a malformed URL is the engine's to
/// absorb.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("file://")
    {
        return Some(trimmed.to_string());
    }
    Some(format!("{}{}", crate::config::DEFAULT_SCHEME, trimmed))
}

/// The active tab's URL and label, for republishing to the URL bar and tab
/// strip whenever the active tab changes.
pub fn active_location(tabs: &TabManager) -> Option<(String, String)> {
    tabs.active()
        .map(|tab| (tab.view.current_url().to_string(), tab.label().to_string()))
}
