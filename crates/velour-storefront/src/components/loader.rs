//! Placeholder shown while a page's deferred data is pending.

use dioxus::prelude::*;

/// Quiet full-page placeholder behind the suspense boundary.
#[component]
pub fn PageLoader() -> Element {
    rsx! {
        div { class: "page-loader",
            span { class: "page-loader-pulse" }
            p { class: "page-loader-note", "One moment" }
        }
    }
}
