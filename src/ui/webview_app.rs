//! WebView-based browser shell using `wry` + `tao`.
//!
//! Architecture:
//! - One WebView renders pages; `with_initialization_script` injects the
//!   toolbar chrome on every document.
//! - The tab container's scripted views are the binding's synchronous state
//!   cache (URL, title, back/forward stack per tab); every command the
//!   toolbar forwards is mirrored onto the WebView here.
//! - IPC from JS -> Rust via `window.ipc.postMessage`; chrome state is
//!   pushed back with `evaluate_script`.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::config;
use crate::engine::scripted::ScriptedEngine;
use crate::managers::bookmark_store::BookmarkStoreTrait;
use crate::managers::download_coordinator::{DownloadCoordinatorTrait, SavePrompt};
use crate::managers::tab_manager::TabManagerTrait;
use crate::toolbar::{self, Forwarded, ToolbarEvent};
use crate::types::theme::Theme;

#[derive(Debug)]
enum UserEvent {
    /// Navigate the WebView (the active view's cache is already updated).
    LoadUrl(String),
    EvalScript(String),
    /// The WebView started a navigation (redirect, link click, commanded load).
    UrlChanged(String),
    TitleChanged(String),
    ShowHistory,
    OpenPdf,
    OpenDevTools,
}

struct BrowserState {
    app: App,
}

const TOOLBAR_JS: &str = include_str!("../../resources/ui/toolbar.js");

/// The per-document script: theme variables first, then the toolbar chrome.
fn init_script(theme: &Theme) -> String {
    let vars: String = theme
        .css_variables()
        .iter()
        .map(|(name, value)| format!("{}:{};", name, value))
        .collect();
    format!("window.__DUSK_CSS_VARS=':root{{{}}}';\n{}", vars, TOOLBAR_JS)
}

/// JS pushing the full chrome state (tab strip, URL bar, bookmarks menu).
fn chrome_update(state: &BrowserState) -> String {
    let tabs: Vec<serde_json::Value> = state
        .app
        .tabs
        .all()
        .iter()
        .map(|t| serde_json::json!({"title": t.label(), "url": t.view.current_url()}))
        .collect();
    let bookmarks: Vec<serde_json::Value> = state
        .app
        .bookmarks
        .list()
        .iter()
        .map(|b| serde_json::json!({"label": b.label, "url": b.url}))
        .collect();
    let (url, _label) = toolbar::active_location(&state.app.tabs).unwrap_or_default();
    let payload = serde_json::json!({
        "tabs": tabs,
        "active": state.app.tabs.active_index(),
        "url": url,
        "bookmarks": bookmarks,
    });
    format!("if(window.__dusk_sync)__dusk_sync({})", payload)
}

fn load_active(state: &BrowserState) -> Option<UserEvent> {
    state
        .app
        .tabs
        .active()
        .map(|t| UserEvent::LoadUrl(t.view.current_url().to_string()))
}

/// Maps a forwarded engine call onto the shared WebView.
///
/// Back and Forward load the view cache's new current URL instead of
/// driving the WebView's own history, which interleaves every tab.
fn mirror(state: &BrowserState, forwarded: Forwarded) -> Option<UserEvent> {
    match forwarded {
        Forwarded::WentBack | Forwarded::WentForward | Forwarded::Opened(_) => load_active(state),
        Forwarded::Loaded(url) => Some(UserEvent::LoadUrl(url)),
        Forwarded::Reloaded => Some(UserEvent::EvalScript("location.reload()".into())),
        Forwarded::DevToolsRequested => Some(UserEvent::OpenDevTools),
        Forwarded::None => None,
    }
}

// ─── IPC handler ───

fn handle_ipc(state: &mut BrowserState, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => {
            // The chrome just loaded on a page; push current state.
            Some(UserEvent::EvalScript(chrome_update(state)))
        }

        "back" => {
            let fwd = toolbar::dispatch(&mut state.app.tabs, ToolbarEvent::Back);
            mirror(state, fwd)
        }

        "forward" => {
            let fwd = toolbar::dispatch(&mut state.app.tabs, ToolbarEvent::Forward);
            mirror(state, fwd)
        }

        "reload" => {
            let fwd = toolbar::dispatch(&mut state.app.tabs, ToolbarEvent::Reload);
            mirror(state, fwd)
        }

        "navigate" => {
            let input = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let fwd = toolbar::dispatch(
                &mut state.app.tabs,
                ToolbarEvent::SubmitUrl(input.to_string()),
            );
            mirror(state, fwd)
        }

        "new_tab" => {
            let fwd = toolbar::dispatch(&mut state.app.tabs, ToolbarEvent::NewTab);
            mirror(state, fwd)
        }

        "close_tab" => {
            let index = msg.get("index").and_then(|v| v.as_u64())? as usize;
            let was_active = index == state.app.tabs.active_index();
            let count_before = state.app.tabs.count();
            state.app.tabs.close(index);
            if state.app.tabs.count() == count_before {
                // Last tab or out of range: ignored.
                None
            } else if was_active {
                load_active(state)
            } else {
                Some(UserEvent::EvalScript(chrome_update(state)))
            }
        }

        "switch_tab" => {
            let index = msg.get("index").and_then(|v| v.as_u64())? as usize;
            let before = state.app.tabs.active_index();
            state.app.tabs.set_active(index);
            if state.app.tabs.active_index() != before {
                load_active(state)
            } else {
                None
            }
        }

        "add_bookmark" => {
            let (label, url) = {
                let tab = state.app.tabs.active()?;
                (tab.label().to_string(), tab.view.current_url().to_string())
            };
            state.app.bookmarks.add(&label, &url);
            Some(UserEvent::EvalScript(chrome_update(state)))
        }

        "open_bookmark" => {
            let url = msg.get("url").and_then(|v| v.as_str())?.to_string();
            let fwd = toolbar::dispatch(&mut state.app.tabs, ToolbarEvent::OpenBookmark(url));
            mirror(state, fwd)
        }

        "show_history" => Some(UserEvent::ShowHistory),

        "open_pdf" => Some(UserEvent::OpenPdf),

        "devtools" => {
            let fwd = toolbar::dispatch(&mut state.app.tabs, ToolbarEvent::OpenDevTools);
            mirror(state, fwd)
        }

        _ => None,
    }
}

// ─── Dialogs ───

struct NativeSavePrompt;

impl SavePrompt for NativeSavePrompt {
    fn choose_destination(
        &mut self,
        default_path: &std::path::Path,
        file_name: &str,
    ) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save File")
            .set_file_name(file_name.to_string());
        if let Some(dir) = default_path.parent() {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }
}

fn history_text(state: &BrowserState) -> String {
    let items = state
        .app
        .tabs
        .active()
        .map(|t| t.view.history_items())
        .unwrap_or_default();
    if items.is_empty() {
        return "No history".to_string();
    }
    items
        .iter()
        .map(|item| format!("{}\n{}\n", item.title, item.url))
        .collect::<Vec<_>>()
        .join("\n")
}

// ─── Main entry point ───

pub fn run() {
    let mut app = App::new(Box::new(ScriptedEngine::new()));
    app.startup();
    let theme = app.theme.clone();
    let state = Arc::new(Mutex::new(BrowserState { app }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(config::WINDOW_TITLE)
        .with_inner_size(tao::dpi::LogicalSize::new(
            config::WINDOW_WIDTH,
            config::WINDOW_HEIGHT,
        ))
        .build(&event_loop)
        .expect("Failed to create window");

    let initial_url = {
        let s = state.lock().unwrap();
        s.app
            .tabs
            .active()
            .map(|t| t.view.current_url().to_string())
            .unwrap_or_else(|| config::DEFAULT_URL.to_string())
    };

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let nav_proxy = proxy.clone();
    let title_proxy = proxy.clone();
    let nw_proxy = proxy.clone();
    let dl_state = state.clone();

    let script = init_script(&theme);
    let builder = WebViewBuilder::new()
        .with_url(initial_url.as_str())
        .with_initialization_script(script.as_str())
        .with_background_color(theme.background_rgba())
        .with_devtools(true)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            eprintln!("[IPC] {}", &body[..body.len().min(200)]);
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_navigation_handler(move |url| {
            let _ = nav_proxy.send_event(UserEvent::UrlChanged(url));
            true
        })
        .with_document_title_changed_handler(move |title| {
            let _ = title_proxy.send_event(UserEvent::TitleChanged(title));
        })
        .with_new_window_req_handler(move |url, _features| {
            // Single-window shell: load the target into the active tab.
            eprintln!("[NW] {}", url);
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::LoadUrl(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_download_started_handler(move |url, suggested_path| {
            // The prompt must run without the state lock held; the page can
            // keep posting IPC while the dialog is up.
            let file_name = suggested_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "download".to_string());
            let id = {
                let mut s = dl_state.lock().unwrap();
                s.app.downloads.request(&file_name, suggested_path)
            };
            let choice = NativeSavePrompt.choose_destination(suggested_path, &file_name);
            let mut s = dl_state.lock().unwrap();
            match choice {
                Some(path) => {
                    let _ = s.app.downloads.confirm(&id, &path);
                    eprintln!("[DL] {} -> {}", url, path.display());
                    *suggested_path = path;
                    true
                }
                None => {
                    let _ = s.app.downloads.cancel(&id);
                    eprintln!("[DL] {} cancelled", url);
                    false
                }
            }
        })
        .with_download_completed_handler(move |url, path, success| {
            eprintln!(
                "[DL] {} finished (success={}, path={:?})",
                url, success, path
            );
        });

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                // Dropping the state tears down every tab and view.
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    eprintln!("[LOAD] {}", url);
                    {
                        let mut s = state.lock().unwrap();
                        // New-window requests arrive here without having gone
                        // through the toolbar; record them on the active view.
                        if let Some(tab) = s.app.tabs.active_mut() {
                            if tab.view.current_url() != url {
                                tab.view.load(&url);
                                tab.display_title.clear();
                            }
                        }
                    }
                    let _ = webview.load_url(&url);
                }

                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }

                UserEvent::UrlChanged(url) => {
                    let js = {
                        let mut s = state.lock().unwrap();
                        if let Some(tab) = s.app.tabs.active_mut() {
                            if tab.view.current_url() != url {
                                tab.view.note_url_changed(&url, "");
                            }
                        }
                        s.app.tabs.sync_active_title();
                        chrome_update(&s)
                    };
                    let _ = webview.evaluate_script(&js);
                }

                UserEvent::TitleChanged(title) => {
                    let js = {
                        let mut s = state.lock().unwrap();
                        if let Some(tab) = s.app.tabs.active_mut() {
                            let url = tab.view.current_url().to_string();
                            tab.view.note_url_changed(&url, &title);
                        }
                        s.app.tabs.sync_active_title();
                        chrome_update(&s)
                    };
                    let _ = webview.evaluate_script(&js);
                }

                UserEvent::ShowHistory => {
                    let text = {
                        let s = state.lock().unwrap();
                        history_text(&s)
                    };
                    let _ = rfd::MessageDialog::new()
                        .set_title("History")
                        .set_description(text)
                        .show();
                }

                UserEvent::OpenPdf => {
                    let picked = rfd::FileDialog::new()
                        .set_title("Open PDF")
                        .add_filter("PDF Files", &["pdf"])
                        .pick_file();
                    if let Some(path) = picked {
                        if let Ok(file_url) = url::Url::from_file_path(&path) {
                            {
                                let mut s = state.lock().unwrap();
                                s.app.tabs.open(file_url.as_str());
                            }
                            eprintln!("[LOAD] {}", file_url);
                            let _ = webview.load_url(file_url.as_str());
                        }
                    }
                }

                UserEvent::OpenDevTools => {
                    webview.open_devtools();
                }
            },

            _ => {}
        }
    });
}
