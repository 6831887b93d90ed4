//! Duskbrowser UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The browser chrome (toolbar, tab strip, bookmarks menu) is HTML/CSS/JS
//! injected into every page via an initialization script; it talks back to
//! Rust over wry IPC. Native dialogs handle downloads, PDF picking, and the
//! history box.

pub mod webview_app;
