//! Fixed application constants.
//!
//! The shell carries no persisted or runtime-editable configuration; the
//! landing page, window geometry, and seed bookmarks are compile-time fixed.

/// Landing page for the initial tab and every empty New Tab.
pub const DEFAULT_URL: &str = "https://google.com";

/// Scheme prepended to URL-bar input that carries no recognized scheme.
pub const DEFAULT_SCHEME: &str = "http://";

pub const WINDOW_TITLE: &str = "Dusk Browser";
pub const WINDOW_WIDTH: f64 = 1200.0;
pub const WINDOW_HEIGHT: f64 = 800.0;

/// Bookmarks present at startup, in menu order.
pub const SEED_BOOKMARKS: &[(&str, &str)] = &[
    ("Google", "https://google.com"),
    ("YouTube", "https://youtube.com"),
];
