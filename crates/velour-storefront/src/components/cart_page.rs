//! Cart page.

use dioxus::prelude::*;
use velour_nav::Page;

use crate::state::CartLine;

use super::app::StoreContext;

/// Cart contents with quantity steppers and the path onward to checkout.
#[component]
pub fn CartPage() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;
    let cart = ctx.cart.read();
    let lines = cart.lines().to_vec();
    let subtotal = cart.display_subtotal();
    drop(cart);

    if lines.is_empty() {
        return rsx! {
            div { class: "cart cart-empty",
                h2 { class: "page-title", "Your cart is empty" }
                p { class: "page-subtitle", "Nothing here yet. The collection is waiting." }
                button {
                    class: "button button-fill",
                    onclick: move |_| navigator.to(Page::Collection),
                    "Browse the collection"
                }
            }
        };
    }

    rsx! {
        div { class: "cart",
            header { class: "page-header",
                h2 { class: "page-title", "Cart" }
            }
            div { class: "cart-lines",
                for line in lines.iter() {
                    CartRow { key: "{line.slug}", line: line.clone() }
                }
            }
            div { class: "cart-summary",
                span { class: "cart-summary-label", "Subtotal" }
                span { class: "cart-summary-value", "{subtotal}" }
            }
            p { class: "cart-note", "Shipping and any duties are settled at checkout." }
            button {
                class: "button button-fill cart-checkout",
                onclick: move |_| navigator.to(Page::Checkout),
                "Proceed to checkout"
            }
        }
    }
}

#[component]
fn CartRow(line: CartLine) -> Element {
    let ctx = use_context::<StoreContext>();
    let mut cart = ctx.cart;
    let mut navigator = ctx.navigator;

    let slug = line.slug.clone();
    let dec_slug = slug.clone();
    let inc_slug = slug.clone();
    let rm_slug = slug.clone();
    let quantity = line.quantity;

    rsx! {
        div { class: "cart-row",
            button {
                class: "cart-row-name",
                onclick: move |_| navigator.to_product(&slug),
                span { "{line.name}" }
                span { class: "cart-row-line", "{line.line}" }
            }
            div { class: "cart-row-quantity",
                button {
                    class: "stepper",
                    onclick: move |_| cart.write().set_quantity(&dec_slug, quantity.saturating_sub(1)),
                    "−"
                }
                span { class: "stepper-count", "{quantity}" }
                button {
                    class: "stepper",
                    onclick: move |_| cart.write().set_quantity(&inc_slug, quantity + 1),
                    "+"
                }
            }
            span { class: "cart-row-total", "{line.display_total()}" }
            button {
                class: "cart-row-remove",
                onclick: move |_| cart.write().remove(&rm_slug),
                "Remove"
            }
        }
    }
}
