//! View identifiers and the location routing table.

use derive_more::Display;

/// The page the storefront is currently displaying.
///
/// Exactly one view is active at a time. `Product` carries the slug of the
/// piece being shown; every other view is addressed by name alone.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum View {
    #[display("home")]
    Home,
    #[display("collection")]
    Collection,
    #[display("about")]
    About,
    #[display("product")]
    Product { slug: String },
    #[display("cart")]
    Cart,
    #[display("checkout")]
    Checkout,
    #[display("thank-you")]
    ThankYou,
    #[display("account")]
    Account,
    #[display("account-orders")]
    AccountOrders,
    #[display("account-details")]
    AccountDetails,
}

impl View {
    /// Whether this is the home view. Scroll tracking and section theming only
    /// run while this returns true.
    pub fn is_home(&self) -> bool {
        matches!(self, View::Home)
    }
}

/// Pages addressable without a slug.
///
/// Programmatic navigation splits in two: [`Page`] for named pages and a
/// separate product call that requires a slug. A product navigation without
/// slug context is unrepresentable.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Page {
    #[display("home")]
    Home,
    #[display("collection")]
    Collection,
    #[display("about")]
    About,
    #[display("cart")]
    Cart,
    #[display("checkout")]
    Checkout,
    #[display("thank-you")]
    ThankYou,
    #[display("account")]
    Account,
    #[display("account-orders")]
    AccountOrders,
    #[display("account-details")]
    AccountDetails,
}

impl Page {
    /// The history path pushed when navigating to this page. Home pushes `/`,
    /// everything else `/{name}`.
    pub fn path(self) -> String {
        match self {
            Page::Home => "/".to_string(),
            other => format!("/{other}"),
        }
    }

    /// The view this page displays.
    pub fn view(self) -> View {
        match self {
            Page::Home => View::Home,
            Page::Collection => View::Collection,
            Page::About => View::About,
            Page::Cart => View::Cart,
            Page::Checkout => View::Checkout,
            Page::ThankYou => View::ThankYou,
            Page::Account => View::Account,
            Page::AccountOrders => View::AccountOrders,
            Page::AccountDetails => View::AccountDetails,
        }
    }
}

/// The history path pushed for a product detail navigation.
pub fn product_path(slug: &str) -> String {
    format!("/collection/{slug}")
}

/// Outcome of matching a location path against the routing table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteMatch {
    /// The path resolved to a view.
    View(View),
    /// No rule matched. The caller keeps whatever view it already shows.
    NotFound,
}

/// Matches a location path against the ordered rule list. First match wins.
///
/// The slug rules run before the exact-path rules so `/collection/{slug}`
/// resolves to a product and never to the bare collection page. A trailing
/// slash leaves the slug empty and the prefix rules decline, so paths like
/// `/collection/velvet-ember/` fall through to no match.
pub fn parse_path(path: &str) -> RouteMatch {
    if path.starts_with("/product/") || path.starts_with("/collection/") {
        let slug = path.rsplit('/').next().unwrap_or_default();
        if !slug.is_empty() {
            return RouteMatch::View(View::Product {
                slug: slug.to_string(),
            });
        }
    }

    match path {
        "/collection" => RouteMatch::View(View::Collection),
        "/cart" => RouteMatch::View(View::Cart),
        "/checkout" => RouteMatch::View(View::Checkout),
        "/checkout/thank-you" => RouteMatch::View(View::ThankYou),
        "/account/orders" => RouteMatch::View(View::AccountOrders),
        "/account/details" => RouteMatch::View(View::AccountDetails),
        "/account" => RouteMatch::View(View::Account),
        "/" => RouteMatch::View(View::Home),
        _ => RouteMatch::NotFound,
    }
}
