//! Account pages: overview, orders, details.

use dioxus::prelude::*;
use velour_nav::Page;

use super::app::StoreContext;

/// Account landing. Signed out it is a sign-in form; signed in it is the menu
/// into orders and details.
#[component]
pub fn AccountPage() -> Element {
    let ctx = use_context::<StoreContext>();
    let signed_in = ctx.auth.read().is_signed_in();

    if signed_in {
        rsx! {
            AccountMenu {}
        }
    } else {
        rsx! {
            SignInForm {}
        }
    }
}

#[component]
fn SignInForm() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut auth = ctx.auth;
    let mut email = use_signal(String::new);
    let mut attempted = use_signal(|| false);

    let submit = move |_| {
        attempted.set(true);
        let value = email.read().trim().to_string();
        if value.contains('@') {
            auth.write().sign_in(&value);
        }
    };

    rsx! {
        div { class: "account account-signin",
            h2 { class: "page-title", "Account" }
            p { class: "page-subtitle", "Sign in with your email. Nothing leaves this session." }
            label { class: "field",
                span { "Email" }
                input {
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }
            if attempted() && !email.read().contains('@') {
                p { class: "field-error", "That does not look like an email address." }
            }
            button { class: "button button-fill", onclick: submit, "Continue" }
        }
    }
}

#[component]
fn AccountMenu() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;
    let name = ctx
        .auth
        .read()
        .profile()
        .map(|p| p.display_name.clone())
        .unwrap_or_default();
    let order_count = ctx.auth.read().order_count();

    rsx! {
        div { class: "account",
            h2 { class: "page-title", "Good evening, {name}" }
            div { class: "account-menu",
                button {
                    class: "account-menu-item",
                    onclick: move |_| navigator.to(Page::AccountOrders),
                    span { "Orders" }
                    span { class: "account-menu-hint", "{order_count}" }
                }
                button {
                    class: "account-menu-item",
                    onclick: move |_| navigator.to(Page::AccountDetails),
                    span { "Details" }
                }
            }
        }
    }
}

/// Order history, newest first.
#[component]
pub fn AccountOrdersPage() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;
    let signed_in = ctx.auth.read().is_signed_in();
    let orders: Vec<_> = ctx.auth.read().orders().cloned().collect();

    if !signed_in {
        return rsx! {
            SignInGate {}
        };
    }

    rsx! {
        div { class: "account",
            h2 { class: "page-title", "Orders" }
            if orders.is_empty() {
                p { class: "page-subtitle", "No orders yet this session." }
            }
            div { class: "order-list",
                for order in orders {
                    div { key: "{order.id}", class: "order-card",
                        div { class: "order-card-head",
                            span { class: "order-id", "{order.id}" }
                            span { class: "order-date", "{order.display_date()}" }
                        }
                        for line in order.lines.iter() {
                            div { key: "{line.slug}", class: "order-line",
                                span { "{line.name} × {line.quantity}" }
                                span { "{line.display_total()}" }
                            }
                        }
                    }
                }
            }
            button {
                class: "button button-bare",
                onclick: move |_| navigator.to(Page::Account),
                "Back to account"
            }
        }
    }
}

/// Profile details and sign-out.
#[component]
pub fn AccountDetailsPage() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;
    let mut auth = ctx.auth;
    let profile = ctx.auth.read().profile().cloned();

    let Some(profile) = profile else {
        return rsx! {
            SignInGate {}
        };
    };

    rsx! {
        div { class: "account",
            h2 { class: "page-title", "Details" }
            div { class: "detail-rows",
                div { class: "detail-row",
                    span { class: "detail-label", "Name" }
                    span { "{profile.display_name}" }
                }
                div { class: "detail-row",
                    span { class: "detail-label", "Email" }
                    span { "{profile.email}" }
                }
            }
            div { class: "account-actions",
                button {
                    class: "button button-bare",
                    onclick: move |_| navigator.to(Page::Account),
                    "Back to account"
                }
                button {
                    class: "button button-outline",
                    onclick: move |_| {
                        auth.write().sign_out();
                        navigator.to(Page::Account);
                    },
                    "Sign out"
                }
            }
        }
    }
}

/// Shown when an account subpage is reached without a session.
#[component]
fn SignInGate() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;

    rsx! {
        div { class: "account",
            h2 { class: "page-title", "Sign in first" }
            button {
                class: "button button-fill",
                onclick: move |_| navigator.to(Page::Account),
                "Go to sign in"
            }
        }
    }
}
