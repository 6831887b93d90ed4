//! Duskbrowser — a minimal tabbed web browser shell with a static dark theme.
//!
//! Entry point: opens the WebView window and runs the event loop. When built
//! without the `gui` feature, runs a console walkthrough of the shell over
//! the scripted engine instead.

#[cfg(feature = "gui")]
fn main() {
    duskbrowser::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("Duskbrowser v{} demo mode (no gui feature)", env!("CARGO_PKG_VERSION"));
    println!();

    demo_tabs();
    demo_toolbar();
    demo_bookmarks();
    demo_history();
    demo_downloads();

    println!("All shell components demonstrated.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("--- {} ---", name);
}

#[cfg(not(feature = "gui"))]
fn demo_app() -> duskbrowser::app::App {
    use duskbrowser::engine::scripted::ScriptedEngine;
    let mut app = duskbrowser::app::App::new(Box::new(ScriptedEngine::new()));
    app.startup();
    app
}

#[cfg(not(feature = "gui"))]
fn demo_tabs() {
    use duskbrowser::managers::tab_manager::TabManagerTrait;
    section("Tab container");

    let mut app = demo_app();
    println!("  startup: {} tab at {}", app.tabs.count(), app.tabs.active().unwrap().view.current_url());

    app.tabs.open("https://example.com");
    println!("  open: {} tabs, active index {}", app.tabs.count(), app.tabs.active_index());

    app.tabs.close(0);
    println!("  close(0): {} tab left, active = {}", app.tabs.count(), app.tabs.active().unwrap().view.current_url());

    app.tabs.close(0);
    println!("  close last tab ignored: {} tab", app.tabs.count());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_toolbar() {
    use duskbrowser::managers::tab_manager::TabManagerTrait;
    use duskbrowser::toolbar::{self, Forwarded, ToolbarEvent};
    section("Navigation toolbar");

    let mut app = demo_app();

    let fwd = toolbar::dispatch(&mut app.tabs, ToolbarEvent::SubmitUrl("example.com".into()));
    println!("  submit 'example.com' -> {:?}", fwd);

    let fwd = toolbar::dispatch(&mut app.tabs, ToolbarEvent::Back);
    println!("  back -> {:?}", fwd);
    assert_eq!(fwd, Forwarded::WentBack);

    let fwd = toolbar::dispatch(&mut app.tabs, ToolbarEvent::Back);
    println!("  back again (history exhausted) -> {:?}", fwd);
    assert_eq!(fwd, Forwarded::None);

    let fwd = toolbar::dispatch(&mut app.tabs, ToolbarEvent::NewTab);
    println!("  new tab -> {:?}, count = {}", fwd, app.tabs.count());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_bookmarks() {
    use duskbrowser::managers::bookmark_store::BookmarkStoreTrait;
    section("Bookmarks store");

    let mut app = demo_app();
    println!("  seeded with {} entries", app.bookmarks.len());

    app.bookmarks.add("Example", "https://example.com");
    for bm in app.bookmarks.list() {
        println!("  {} -> {}", bm.label, bm.url);
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_history() {
    use duskbrowser::managers::tab_manager::TabManagerTrait;
    use duskbrowser::toolbar::{self, ToolbarEvent};
    section("Per-tab history");

    let mut app = demo_app();
    toolbar::dispatch(&mut app.tabs, ToolbarEvent::SubmitUrl("rust-lang.org".into()));
    toolbar::dispatch(&mut app.tabs, ToolbarEvent::SubmitUrl("crates.io".into()));

    for item in app.tabs.active().unwrap().view.history_items() {
        println!("  {}", item.url);
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_downloads() {
    use std::path::{Path, PathBuf};

    use duskbrowser::managers::download_coordinator::{DownloadCoordinatorTrait, SavePrompt};
    section("Download coordinator");

    struct ScriptedPrompt(Option<PathBuf>);
    impl SavePrompt for ScriptedPrompt {
        fn choose_destination(&mut self, _default_path: &Path, _file_name: &str) -> Option<PathBuf> {
            self.0.take()
        }
    }

    let mut app = demo_app();

    let id = app.downloads.request("report.pdf", Path::new("/tmp/report.pdf"));
    let decision = app
        .downloads
        .resolve(&id, &mut ScriptedPrompt(Some(PathBuf::from("/tmp/saved.pdf"))))
        .unwrap();
    println!("  accepted prompt -> {:?}", decision);

    let id = app.downloads.request("video.mp4", Path::new("/tmp/video.mp4"));
    let decision = app.downloads.resolve(&id, &mut ScriptedPrompt(None)).unwrap();
    println!("  dismissed prompt -> {:?}", decision);

    println!("  cancelled is terminal: {:?}", app.downloads.cancel(&id).unwrap_err());
    println!();
}
