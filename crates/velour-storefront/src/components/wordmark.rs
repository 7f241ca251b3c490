//! The wordmark overlay and its docking animation.

use dioxus::prelude::*;
use velour_nav::{LOGO_TRANSITION, Page};

use super::app::StoreContext;

/// Brand wordmark, rendered once and never remounted.
///
/// It starts hero-sized over the home page and glides into the navbar as one
/// CSS transform; every frame comes composed from the navigation state.
/// Clicking it goes home from anywhere.
#[component]
pub fn Wordmark() -> Element {
    let ctx = use_context::<StoreContext>();
    let frame = ctx.nav.read().logo_frame();
    let mut navigator = ctx.navigator;

    rsx! {
        div { class: "wordmark-stage",
            h1 {
                class: "wordmark",
                style: "transform: {frame.transform}; color: {frame.color}; text-shadow: {frame.text_shadow}; transition: {LOGO_TRANSITION};",
                onclick: move |_| navigator.to(Page::Home),
                "VELOUR"
            }
        }
    }
}
