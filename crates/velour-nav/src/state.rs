//! The navigation reducer: one state struct, one transition function.

use crate::docking::{LogoFrame, docked_scale, is_docked};
use crate::route::{Page, RouteMatch, View, parse_path, product_path};
use crate::scroll::{Viewport, scroll_progress};
use crate::section::{SectionHit, SectionTheme, nearest_theme};

/// Everything the navigation engine owns.
///
/// Mutated only through [`NavState::apply`]; rendering reads the derived
/// accessors. Because a view transition and its scroll and theme resets happen
/// inside one `apply` call, no observer can see a new view paired with stale
/// scroll state.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    view: View,
    theme: SectionTheme,
    scroll_offset: f64,
    viewport: Viewport,
}

/// An event from one of the webview sources, or a navigation call.
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent {
    /// The location path changed under us: startup resolution or a history
    /// back/forward traversal.
    LocationChanged { path: String },
    /// Programmatic navigation to a named page.
    NavigateTo(Page),
    /// Programmatic navigation to a product detail page.
    NavigateToProduct { slug: String },
    /// The webview viewport was resized.
    Resized { width: f64, height: f64 },
    /// The window scrolled. Only meaningful on the home view.
    Scrolled { offset: f64 },
    /// Observer batch of sections straddling the viewport center band.
    SectionsCentered { hits: Vec<SectionHit> },
}

/// Host-page work the caller performs after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageCommand {
    /// Push a history entry for this path.
    PushHistory { path: String },
    /// Scroll the window back to the top.
    ScrollToTop { smooth: bool },
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl NavState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view: View::Home,
            theme: SectionTheme::default(),
            scroll_offset: 0.0,
            viewport,
        }
    }

    /// Applies one event and returns the page commands it calls for.
    ///
    /// History traversals never push (the entry already exists), programmatic
    /// navigations always do. Scroll resets are smooth for named-page
    /// navigation and instant for product arrivals, matching how far the new
    /// content sits from the old.
    pub fn apply(&mut self, event: NavEvent) -> Vec<PageCommand> {
        match event {
            NavEvent::LocationChanged { path } => match parse_path(&path) {
                RouteMatch::View(view) => {
                    let product = matches!(view, View::Product { .. });
                    tracing::debug!(%path, %view, "location resolved");
                    self.enter(view);
                    if product {
                        vec![PageCommand::ScrollToTop { smooth: false }]
                    } else {
                        Vec::new()
                    }
                }
                RouteMatch::NotFound => {
                    tracing::debug!(%path, "no route matched, keeping current view");
                    Vec::new()
                }
            },
            NavEvent::NavigateTo(page) => {
                tracing::debug!(%page, "navigate");
                let path = page.path();
                self.enter(page.view());
                vec![
                    PageCommand::PushHistory { path },
                    PageCommand::ScrollToTop { smooth: true },
                ]
            }
            NavEvent::NavigateToProduct { slug } => {
                tracing::debug!(%slug, "navigate to product");
                let path = product_path(&slug);
                self.enter(View::Product { slug });
                vec![
                    PageCommand::PushHistory { path },
                    PageCommand::ScrollToTop { smooth: false },
                ]
            }
            NavEvent::Resized { width, height } => {
                self.viewport = Viewport::new(width, height);
                Vec::new()
            }
            NavEvent::Scrolled { offset } => {
                // Late events from a torn-down listener land here after a view
                // change; off home they are discarded.
                if self.view.is_home() {
                    self.scroll_offset = offset.max(0.0);
                }
                Vec::new()
            }
            NavEvent::SectionsCentered { hits } => {
                if self.view.is_home()
                    && let Some(theme) = nearest_theme(&hits)
                {
                    self.theme = theme;
                }
                Vec::new()
            }
        }
    }

    /// Every view transition resets the scroll-coupled state in the same step,
    /// including re-entering the current view.
    fn enter(&mut self, view: View) {
        self.view = view;
        self.scroll_offset = 0.0;
        self.theme = SectionTheme::default();
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Section theme under the viewport center. Sticky between observer
    /// batches; forced light whenever the home view is not showing.
    pub fn theme(&self) -> SectionTheme {
        if self.view.is_home() {
            self.theme
        } else {
            SectionTheme::Light
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    /// Wordmark docking progress, 0 at the top of home through 1 once docked.
    pub fn scroll_progress(&self) -> f64 {
        scroll_progress(self.scroll_offset, self.viewport)
    }

    /// Scale of the wordmark at its navbar resting size.
    pub fn docked_scale(&self) -> f64 {
        docked_scale(self.viewport.width)
    }

    /// True once the wordmark rests in the navigation bar.
    pub fn is_docked(&self) -> bool {
        is_docked(&self.view, self.scroll_progress())
    }

    /// Composed wordmark frame for the current state.
    pub fn logo_frame(&self) -> LogoFrame {
        LogoFrame::compose(
            &self.view,
            self.theme(),
            self.scroll_progress(),
            self.docked_scale(),
            self.is_mobile(),
        )
    }
}
