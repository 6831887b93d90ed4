//! Deterministic in-process engine binding.
//!
//! `ScriptedView` keeps a real back/forward stack per view and answers every
//! read from it. The console demo runs the whole shell on top of it, the
//! test suite drives managers with it, and the GUI uses it as the synchronous
//! state cache behind the WebView.

use crate::engine::{Engine, EngineView};
use crate::types::history::HistoryItem;

/// Engine whose views track navigation in memory and render nothing.
#[derive(Debug, Default)]
pub struct ScriptedEngine;

impl ScriptedEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for ScriptedEngine {
    fn create_view(&mut self, initial_url: &str) -> Box<dyn EngineView> {
        Box::new(ScriptedView::new(initial_url))
    }
}

/// One scripted page: a visit stack and a cursor into it.
///
/// Invariant: `entries` is never empty and `cursor < entries.len()`.
#[derive(Debug)]
pub struct ScriptedView {
    entries: Vec<HistoryItem>,
    cursor: usize,
}

impl ScriptedView {
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![HistoryItem {
                title: String::new(),
                url: initial_url.to_string(),
            }],
            cursor: 0,
        }
    }

    fn push_entry(&mut self, url: &str, title: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryItem {
            title: title.to_string(),
            url: url.to_string(),
        });
        self.cursor = self.entries.len() - 1;
    }
}

impl EngineView for ScriptedView {
    /// A commanded load discards forward entries and becomes the new tip,
    /// like a real engine's location change.
    fn load(&mut self, url: &str) {
        self.push_entry(url, "");
    }

    fn reload(&mut self) {
        // The current entry stays the tip; nothing cached changes.
    }

    fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    fn go_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn go_forward(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    fn current_url(&self) -> &str {
        &self.entries[self.cursor].url
    }

    fn title(&self) -> &str {
        &self.entries[self.cursor].title
    }

    fn history_items(&self) -> Vec<HistoryItem> {
        self.entries.clone()
    }

    fn note_url_changed(&mut self, url: &str, title: &str) {
        if self.entries[self.cursor].url == url {
            // Same location, fresher title.
            self.entries[self.cursor].title = title.to_string();
        } else {
            // Engine-initiated navigation (link click, redirect).
            self.push_entry(url, title);
        }
    }
}
