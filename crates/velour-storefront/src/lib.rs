//! # Velour Storefront
//!
//! Desktop webview edition of the Velour single-page storefront.
//!
//! The navigation engine in `velour-nav` is pure state; this crate is the
//! host. It installs the webview bridges (history, scroll, resize, section
//! observer), funnels their reports through the reducer, performs the page
//! commands the reducer returns, and renders the views.

pub mod bridge;
pub mod components;
pub mod navigator;
pub mod state;
