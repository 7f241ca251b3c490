//! Webview bridge connecting browser events to the navigation engine.
//!
//! Each continuous event source is one bridge: a script that registers
//! listeners in the webview and streams reports back over `dioxus.send`. The
//! home-scoped bridges (scroll, section observer, reveals) leave a stopper
//! function on `window` so re-entering home replaces the previous installation
//! instead of stacking a second one, and leaving home tears it down in the
//! same breath. A report already in flight when its bridge stops still reaches
//! the reducer, which discards it off the home view.

use std::sync::OnceLock;

use dioxus::prelude::*;
use thiserror::Error;
use velour_nav::{PageCommand, SECTION_NAME_ATTR, SECTION_THEME_ATTR, SectionHit};

/// Route path to resolve at startup, set from the CLI before launch.
static START_ROUTE: OnceLock<String> = OnceLock::new();

pub fn set_start_route(path: String) {
    START_ROUTE.set(path).ok();
}

pub fn start_route() -> Option<&'static str> {
    START_ROUTE.get().map(String::as_str)
}

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The webview lacks `history.pushState`.
    #[error("webview has no history API")]
    MissingHistory,
    /// The webview lacks `IntersectionObserver`.
    #[error("webview has no IntersectionObserver")]
    MissingIntersectionObserver,
    /// The capability probe script never answered.
    #[error("capability probe returned no response")]
    ProbeFailed,
}

/// Checks the webview for the APIs the storefront cannot run without.
///
/// Runs once before the storefront mounts. A missing capability is surfaced
/// as a dedicated screen rather than a half-working app.
pub async fn probe_capabilities() -> Result<(), BridgeError> {
    let mut eval = document::eval(
        r#"
        dioxus.send([
            !!(window.history && typeof window.history.pushState === 'function'),
            typeof IntersectionObserver === 'function'
        ]);
        "#,
    );
    let (history, observer) = eval
        .recv::<(bool, bool)>()
        .await
        .map_err(|_| BridgeError::ProbeFailed)?;
    if !history {
        return Err(BridgeError::MissingHistory);
    }
    if !observer {
        return Err(BridgeError::MissingIntersectionObserver);
    }
    Ok(())
}

/// Streams the location path: once at install for startup resolution, then on
/// every popstate. Lives for the whole session.
pub async fn location_stream(mut on_path: impl FnMut(String)) {
    let mut eval = document::eval(
        r#"
        dioxus.send(window.location.pathname);
        window.addEventListener('popstate', () => dioxus.send(window.location.pathname));
        "#,
    );
    while let Ok(path) = eval.recv::<String>().await {
        on_path(path);
    }
}

/// Streams the viewport size: once at install, then on every resize. Lives for
/// the whole session.
pub async fn viewport_stream(mut on_size: impl FnMut(f64, f64)) {
    let mut eval = document::eval(
        r#"
        const report = () => dioxus.send([window.innerWidth, window.innerHeight]);
        window.addEventListener('resize', report, { passive: true });
        report();
        "#,
    );
    while let Ok((width, height)) = eval.recv::<(f64, f64)>().await {
        on_size(width, height);
    }
}

/// Streams the vertical scroll offset while home is showing.
///
/// The stopper sends a final `null`, which fails to decode as an offset and
/// ends the Rust side of the stream.
pub async fn scroll_stream(mut on_offset: impl FnMut(f64)) {
    let mut eval = document::eval(
        r#"
        if (window.__velour_stop_scroll) window.__velour_stop_scroll();
        const report = () => dioxus.send(window.scrollY);
        window.addEventListener('scroll', report, { passive: true });
        window.__velour_stop_scroll = () => {
            window.removeEventListener('scroll', report);
            delete window.__velour_stop_scroll;
            dioxus.send(null);
        };
        report();
        "#,
    );
    while let Ok(offset) = eval.recv::<f64>().await {
        on_offset(offset);
    }
}

/// Unregisters the scroll bridge. Synchronous inside the webview.
pub fn stop_scroll_bridge() {
    document::eval("if (window.__velour_stop_scroll) window.__velour_stop_scroll();");
}

/// Observes marked sections against a one-pixel band at the viewport center
/// while home is showing.
///
/// Each batch reports the intersecting sections with the distance of their
/// centers from the band, so the reducer can pick the nearest when a fast
/// scroll lands several in one batch. Re-installed on every home entry so it
/// observes the sections actually mounted.
pub async fn sections_stream(mut on_batch: impl FnMut(Vec<SectionHit>)) {
    let js = format!(
        r#"
        if (window.__velour_stop_sections) window.__velour_stop_sections();
        const observer = new IntersectionObserver((entries) => {{
            const hits = [];
            for (const entry of entries) {{
                if (!entry.isIntersecting) continue;
                const theme = entry.target.getAttribute('{SECTION_THEME_ATTR}');
                if (!theme) continue;
                const rect = entry.boundingClientRect;
                hits.push({{
                    theme: theme,
                    center_offset: Math.abs((rect.top + rect.bottom) / 2 - window.innerHeight / 2)
                }});
            }}
            if (hits.length > 0) dioxus.send(hits);
        }}, {{ root: null, rootMargin: '-50% 0px -50% 0px', threshold: 0 }});
        document.querySelectorAll('[{SECTION_NAME_ATTR}]').forEach((el) => observer.observe(el));
        window.__velour_stop_sections = () => {{
            observer.disconnect();
            delete window.__velour_stop_sections;
            dioxus.send(null);
        }};
        "#
    );
    let mut eval = document::eval(&js);
    while let Ok(hits) = eval.recv::<Vec<SectionHit>>().await {
        on_batch(hits);
    }
}

/// Unregisters the section observer. Synchronous inside the webview.
pub fn stop_sections_bridge() {
    document::eval("if (window.__velour_stop_sections) window.__velour_stop_sections();");
}

/// One-shot entrance reveals for home content: elements marked `reveal` gain
/// the `revealed` class the first time they enter the viewport, then drop out
/// of the observer. Styling owns the actual animation.
pub fn install_reveal_bridge() {
    document::eval(
        r#"
        if (window.__velour_stop_reveal) window.__velour_stop_reveal();
        const observer = new IntersectionObserver((entries) => {
            for (const entry of entries) {
                if (entry.isIntersecting) {
                    entry.target.classList.add('revealed');
                    observer.unobserve(entry.target);
                }
            }
        }, { threshold: 0.15 });
        document.querySelectorAll('.reveal').forEach((el) => observer.observe(el));
        window.__velour_stop_reveal = () => {
            observer.disconnect();
            delete window.__velour_stop_reveal;
        };
        "#,
    );
}

/// Disconnects the reveal observer. Synchronous inside the webview.
pub fn stop_reveal_bridge() {
    document::eval("if (window.__velour_stop_reveal) window.__velour_stop_reveal();");
}

/// Pushes a history entry without reloading anything.
pub fn push_history(path: &str) {
    // JSON-encode so a slug cannot break out of the script.
    if let Ok(encoded) = serde_json::to_string(path) {
        document::eval(&format!("history.pushState({{}}, '', {encoded});"));
    }
}

/// Replaces the current history entry. Used to seed the startup route.
pub fn replace_history(path: &str) {
    if let Ok(encoded) = serde_json::to_string(path) {
        document::eval(&format!("history.replaceState({{}}, '', {encoded});"));
    }
}

/// Scrolls the window back to the top.
pub fn scroll_to_top(smooth: bool) {
    if smooth {
        document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
    } else {
        document::eval("window.scrollTo(0, 0);");
    }
}

/// Performs one reducer-issued page command.
pub fn run_command(command: PageCommand) {
    match command {
        PageCommand::PushHistory { path } => push_history(&path),
        PageCommand::ScrollToTop { smooth } => scroll_to_top(smooth),
    }
}
