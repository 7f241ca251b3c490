//! Checkout form and the thank-you page that follows it.

use dioxus::prelude::*;
use velour_nav::Page;

use super::app::StoreContext;

/// Single-step checkout. Placing the order records it on the account state,
/// empties the cart and moves on to the thank-you page.
#[component]
pub fn CheckoutPage() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;
    let mut cart = ctx.cart;
    let mut auth = ctx.auth;

    let mut name = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut attempted = use_signal(|| false);

    let lines = ctx.cart.read().lines().to_vec();
    let subtotal = ctx.cart.read().display_subtotal();
    let subtotal_cents = ctx.cart.read().subtotal_cents();

    if lines.is_empty() {
        return rsx! {
            div { class: "checkout checkout-empty",
                h2 { class: "page-title", "Nothing to check out" }
                button {
                    class: "button button-fill",
                    onclick: move |_| navigator.to(Page::Collection),
                    "Back to the collection"
                }
            }
        };
    }

    let ready = !name.read().trim().is_empty()
        && !address.read().trim().is_empty()
        && !city.read().trim().is_empty();

    let place_order = move |_| {
        attempted.set(true);
        if !ready {
            return;
        }
        let order_lines = cart.read().lines().to_vec();
        let id = auth.write().place_order(order_lines, subtotal_cents);
        tracing::info!(%id, "order placed");
        cart.write().clear();
        navigator.to(Page::ThankYou);
    };

    rsx! {
        div { class: "checkout",
            header { class: "page-header",
                h2 { class: "page-title", "Checkout" }
            }
            div { class: "checkout-body",
                form { class: "checkout-form", onsubmit: move |e| e.prevent_default(),
                    label { class: "field",
                        span { "Full name" }
                        input {
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    label { class: "field",
                        span { "Address" }
                        input {
                            value: "{address}",
                            oninput: move |e| address.set(e.value()),
                        }
                    }
                    label { class: "field",
                        span { "City" }
                        input {
                            value: "{city}",
                            oninput: move |e| city.set(e.value()),
                        }
                    }
                    if attempted() && !ready {
                        p { class: "field-error", "We need all three lines to send it anywhere." }
                    }
                    button {
                        class: "button button-fill",
                        r#type: "button",
                        onclick: place_order,
                        "Place the order"
                    }
                }
                aside { class: "checkout-summary",
                    h3 { "Your pieces" }
                    for line in lines {
                        div { key: "{line.slug}", class: "checkout-summary-row",
                            span { "{line.name} × {line.quantity}" }
                            span { "{line.display_total()}" }
                        }
                    }
                    div { class: "checkout-summary-total",
                        span { "Total" }
                        span { "{subtotal}" }
                    }
                }
            }
        }
    }
}

/// Confirmation page after an order lands.
#[component]
pub fn ThankYouPage() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;
    let latest = ctx.auth.read().latest_order().cloned();

    let confirmation = match latest {
        Some(order) => format!("Order {} is with the atelier. We will write when it ships.", order.id),
        None => "Your order is with the atelier.".to_string(),
    };

    rsx! {
        div { class: "thank-you",
            h2 { class: "page-title", "Thank you" }
            p { class: "page-subtitle", "{confirmation}" }
            div { class: "thank-you-actions",
                button {
                    class: "button button-outline",
                    onclick: move |_| navigator.to(Page::AccountOrders),
                    "View your orders"
                }
                button {
                    class: "button button-bare",
                    onclick: move |_| navigator.to(Page::Home),
                    "Back to the start"
                }
            }
        }
    }
}
