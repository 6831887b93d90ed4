//! Tab container for Duskbrowser.
//!
//! An ordered sequence of tabs, each owning one engine view, plus the
//! active index. The container never reaches zero tabs once the first one
//! is open: closing the last tab is ignored.

use crate::config;
use crate::engine::{Engine, EngineView};

/// One open page: an engine view paired with the label shown on its tab.
pub struct Tab {
    pub view: Box<dyn EngineView>,
    pub display_title: String,
}

impl Tab {
    /// Label for the tab strip: the page title once known, the URL until then.
    pub fn label(&self) -> &str {
        if self.display_title.is_empty() {
            self.view.current_url()
        } else {
            &self.display_title
        }
    }
}

/// Trait defining the tab container interface.
pub trait TabManagerTrait {
    /// Opens a new tab loading `url` (the landing page when empty), appends
    /// it, and makes it active. Returns the new tab's index.
    fn open(&mut self, url: &str) -> usize;
    /// Closes the tab at `index`, dropping its engine view. Ignored when
    /// `index` is out of range or the container holds only one tab.
    fn close(&mut self, index: usize);
    fn active(&self) -> Option<&Tab>;
    fn active_mut(&mut self) -> Option<&mut Tab>;
    fn active_index(&self) -> usize;
    /// Makes the tab at `index` active. Out-of-range is ignored.
    fn set_active(&mut self, index: usize);
    fn get(&self, index: usize) -> Option<&Tab>;
    fn all(&self) -> Vec<&Tab>;
    fn count(&self) -> usize;
    /// Refreshes the active tab's label from its view's title.
    fn sync_active_title(&mut self);
}

/// In-memory tab container addressing tabs by index.
pub struct TabManager {
    engine: Box<dyn Engine>,
    tabs: Vec<Tab>,
    active: usize,
}

impl TabManager {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            engine,
            tabs: Vec::new(),
            active: 0,
        }
    }
}

impl TabManagerTrait for TabManager {
    fn open(&mut self, url: &str) -> usize {
        let url = if url.is_empty() { config::DEFAULT_URL } else { url };
        let view = self.engine.create_view(url);
        self.tabs.push(Tab {
            view,
            display_title: String::new(),
        });
        self.active = self.tabs.len() - 1;
        self.active
    }

    fn close(&mut self, index: usize) {
        if index >= self.tabs.len() || self.tabs.len() == 1 {
            return;
        }
        self.tabs.remove(index);
        // Keep the active index on the same tab where possible, otherwise
        // the nearest following tab, otherwise the new last tab.
        if self.active >= self.tabs.len() {
            self.active = self.tabs.len() - 1;
        } else if self.active > index {
            self.active -= 1;
        }
    }

    fn active(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    fn active_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.get_mut(self.active)
    }

    fn active_index(&self) -> usize {
        self.active
    }

    fn set_active(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    fn all(&self) -> Vec<&Tab> {
        self.tabs.iter().collect()
    }

    fn count(&self) -> usize {
        self.tabs.len()
    }

    fn sync_active_title(&mut self) {
        if let Some(tab) = self.tabs.get_mut(self.active) {
            tab.display_title = tab.view.title().to_string();
        }
    }
}
