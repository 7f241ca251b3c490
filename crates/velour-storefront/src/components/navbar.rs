//! Top navigation bar, tinted by the section under the viewport center.

use dioxus::prelude::*;
use velour_nav::{Page, SectionTheme};

use super::app::StoreContext;

/// Fixed navigation bar. On home it inherits the centered section's theme so
/// its links stay readable over dark imagery; everywhere else it reads light.
#[component]
pub fn Navbar() -> Element {
    let ctx = use_context::<StoreContext>();
    let theme = ctx.nav.read().theme();
    let item_count = ctx.cart.read().item_count();

    let tint = match theme {
        SectionTheme::Dark => "navbar navbar-on-dark",
        SectionTheme::Light => "navbar navbar-on-light",
    };

    rsx! {
        header { class: tint,
            nav { class: "navbar-side navbar-left",
                NavLink { page: Page::Collection, label: "Collection" }
                NavLink { page: Page::About, label: "About" }
            }
            nav { class: "navbar-side navbar-right",
                NavLink { page: Page::Account, label: "Account" }
                CartLink { item_count }
            }
        }
    }
}

#[component]
fn NavLink(page: Page, label: &'static str) -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;

    rsx! {
        button {
            class: "navbar-link",
            onclick: move |_| navigator.to(page),
            "{label}"
        }
    }
}

#[component]
fn CartLink(item_count: u32) -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;

    rsx! {
        button {
            class: "navbar-link navbar-cart",
            onclick: move |_| navigator.to(Page::Cart),
            "Cart"
            if item_count > 0 {
                span { class: "navbar-cart-count", "{item_count}" }
            }
        }
    }
}
