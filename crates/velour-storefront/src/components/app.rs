//! Root component: capability gate, state wiring, bridge lifecycles, view
//! dispatch.

use std::sync::Arc;

use dioxus::prelude::*;
use velour_catalog::Catalog;
use velour_nav::{NavEvent, NavState, Page, View};

use crate::bridge;
use crate::navigator::Navigator;
use crate::state::{AuthState, CartState};

use super::{
    AboutPage, AccountDetailsPage, AccountOrdersPage, AccountPage, CartPage, CheckoutPage,
    CollectionPage, HomePage, Navbar, PageLoader, ProductDetailPage, ThankYouPage, Wordmark,
};

/// Shared storefront context provided to every page.
#[derive(Clone, Copy)]
pub struct StoreContext {
    pub nav: Signal<NavState>,
    pub navigator: Navigator,
    pub cart: Signal<CartState>,
    pub auth: Signal<AuthState>,
    pub catalog: Resource<Arc<Catalog>>,
}

/// Startup capability probe status.
#[derive(Clone, PartialEq)]
enum Probe {
    Pending,
    Ready,
    Failed(String),
}

/// Top-level component. Probes the webview before mounting the storefront so
/// a missing API becomes one clear screen instead of a half-working app.
#[component]
pub fn App() -> Element {
    let mut probe = use_signal(|| Probe::Pending);

    use_future(move || async move {
        match bridge::probe_capabilities().await {
            Ok(()) => probe.set(Probe::Ready),
            Err(e) => {
                tracing::error!(error = %e, "webview capability probe failed");
                probe.set(Probe::Failed(e.to_string()));
            }
        }
    });

    match probe() {
        Probe::Pending => rsx! {
            div { class: "boot-screen" }
        },
        Probe::Failed(reason) => rsx! {
            div { class: "capability-screen",
                h1 { class: "capability-mark", "VELOUR" }
                p { class: "capability-reason", "This webview cannot run the storefront: {reason}." }
            }
        },
        Probe::Ready => rsx! {
            Storefront {}
        },
    }
}

/// The storefront proper, mounted once the probe passes.
#[component]
fn Storefront() -> Element {
    let nav = use_signal(NavState::default);
    let navigator = Navigator::new(nav);
    let cart = use_signal(CartState::new);
    let auth = use_signal(AuthState::new);

    // The catalog parse is deferred off the first paint; pages that need it
    // suspend until it lands.
    let catalog = use_resource(|| async move {
        match Catalog::load() {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), "catalog ready");
                Arc::new(catalog)
            }
            Err(e) => {
                tracing::error!(error = %e, "embedded catalog is malformed, starting empty");
                Arc::new(Catalog::empty())
            }
        }
    });

    let ctx = use_context_provider(|| StoreContext {
        nav,
        navigator,
        cart,
        auth,
        catalog,
    });

    // Session-long bridges: startup route, popstate, viewport size.
    use_future(move || async move {
        let mut navigator = navigator;
        if let Some(route) = bridge::start_route()
            && route != "/"
        {
            bridge::replace_history(route);
        }
        bridge::location_stream(move |path| {
            navigator.dispatch(NavEvent::LocationChanged { path });
        })
        .await;
    });

    use_future(move || async move {
        let mut navigator = navigator;
        bridge::viewport_stream(move |width, height| {
            navigator.dispatch(NavEvent::Resized { width, height });
        })
        .await;
    });

    // Home-scoped bridges: scroll progress, section theming, reveals. Leaving
    // home stops them; re-entering installs fresh ones over the new sections.
    let at_home = use_memo(move || nav.read().view().is_home());
    use_effect(move || {
        if at_home() {
            spawn(async move {
                let mut navigator = navigator;
                bridge::scroll_stream(move |offset| {
                    navigator.dispatch(NavEvent::Scrolled { offset });
                })
                .await;
            });
            spawn(async move {
                // Small delay to let the section DOM land before observing it
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                if !*at_home.peek() {
                    return;
                }
                bridge::install_reveal_bridge();
                let mut navigator = navigator;
                bridge::sections_stream(move |hits| {
                    navigator.dispatch(NavEvent::SectionsCentered { hits });
                })
                .await;
            });
        } else {
            bridge::stop_scroll_bridge();
            bridge::stop_sections_bridge();
            bridge::stop_reveal_bridge();
        }
    });

    use_drop(|| {
        tracing::info!("shutting down storefront");
        bridge::stop_scroll_bridge();
        bridge::stop_sections_bridge();
        bridge::stop_reveal_bridge();
    });

    let view = ctx.nav.read().view().clone();

    rsx! {
        div { class: "storefront",
            Navbar {}
            ViewDispatcher { view }
            Wordmark {}
        }
    }
}

/// Maps the active view to its page subtree.
///
/// Home renders bare so its sections own the full scroll height. Every other
/// page mounts inside the shell with a suspense boundary over the catalog.
#[component]
fn ViewDispatcher(view: View) -> Element {
    match view {
        View::Home => rsx! {
            HomePage {}
        },
        other => rsx! {
            main { class: "page-shell",
                SuspenseBoundary {
                    fallback: |_ctx: SuspenseContext| rsx! {
                        PageLoader {}
                    },
                    PageBody { view: other }
                }
            }
        },
    }
}

#[component]
fn PageBody(view: View) -> Element {
    match view {
        // Home never reaches the shell; the dispatcher renders it bare. It
        // shares the collection arm to keep the match total.
        View::Collection | View::Home => rsx! {
            CollectionPage {}
        },
        View::About => rsx! {
            AboutPage {}
        },
        View::Product { slug } => rsx! {
            ProductRoute { slug }
        },
        View::Cart => rsx! {
            CartPage {}
        },
        View::Checkout => rsx! {
            CheckoutPage {}
        },
        View::ThankYou => rsx! {
            ThankYouPage {}
        },
        View::Account => rsx! {
            AccountPage {}
        },
        View::AccountOrders => rsx! {
            AccountOrdersPage {}
        },
        View::AccountDetails => rsx! {
            AccountDetailsPage {}
        },
    }
}

/// Resolves a product slug through the catalog. An unknown slug quietly shows
/// the full collection instead of an error page.
#[component]
fn ProductRoute(slug: String) -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;
    let catalog = ctx.catalog.suspend()?;
    let found = catalog.read().product_by_slug(&slug).cloned();
    match found {
        Some(product) => rsx! {
            ProductDetailPage {
                key: "{product.slug}",
                product: product.clone(),
                on_back: move |_| navigator.to(Page::Collection),
            }
        },
        None => {
            tracing::debug!(%slug, "slug not in the catalog, showing the collection");
            rsx! {
                CollectionPage {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provide_store() {
        let nav = use_signal(NavState::default);
        let navigator = Navigator::new(nav);
        let cart = use_signal(CartState::new);
        let auth = use_signal(AuthState::new);
        let catalog = use_resource(|| async move { Arc::new(Catalog::empty()) });
        use_context_provider(|| StoreContext {
            nav,
            navigator,
            cart,
            auth,
            catalog,
        });
    }

    #[component]
    fn HomeInShell() -> Element {
        provide_store();
        rsx! {
            SuspenseBoundary {
                fallback: |_ctx: SuspenseContext| rsx! {
                    PageLoader {}
                },
                PageBody { view: View::Home }
            }
        }
    }

    #[component]
    fn MissingPieceInShell() -> Element {
        provide_store();
        let view = View::Product {
            slug: "winter-static".into(),
        };
        rsx! {
            SuspenseBoundary {
                fallback: |_ctx: SuspenseContext| rsx! {
                    PageLoader {}
                },
                PageBody { view }
            }
        }
    }

    async fn render_page(page: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(page);
        dom.rebuild_in_place();
        dom.wait_for_suspense().await;
        dioxus_ssr::render(&dom)
    }

    #[tokio::test]
    async fn test_home_in_the_shell_falls_back_to_the_collection() {
        let html = render_page(HomeInShell).await;
        assert!(html.contains("The Collection"));
    }

    #[tokio::test]
    async fn test_unknown_slug_falls_back_to_the_collection() {
        let html = render_page(MissingPieceInShell).await;
        assert!(html.contains("The Collection"));
    }
}
