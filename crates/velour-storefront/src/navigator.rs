//! Navigation handle passed to page components.

use dioxus::prelude::*;
use velour_nav::{NavEvent, NavState, Page};

use crate::bridge;

/// Copyable handle that funnels every navigation event through the reducer
/// and performs the page commands it returns.
///
/// Pages receive this instead of the state signal, so nothing outside the
/// reducer can move the view or touch the scroll-coupled state.
#[derive(Clone, Copy)]
pub struct Navigator {
    nav: Signal<NavState>,
}

impl Navigator {
    pub fn new(nav: Signal<NavState>) -> Self {
        Self { nav }
    }

    /// Applies one event and runs whatever the reducer asks for.
    pub fn dispatch(&mut self, event: NavEvent) {
        let commands = self.nav.write().apply(event);
        for command in commands {
            bridge::run_command(command);
        }
    }

    /// Navigates to a named page.
    pub fn to(&mut self, page: Page) {
        self.dispatch(NavEvent::NavigateTo(page));
    }

    /// Navigates to a product detail page.
    pub fn to_product(&mut self, slug: &str) {
        self.dispatch(NavEvent::NavigateToProduct {
            slug: slug.to_string(),
        });
    }
}
