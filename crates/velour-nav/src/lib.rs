//! # Velour Nav
//!
//! Navigation engine for the Velour storefront.
//!
//! This crate owns every piece of client-side navigation state: which view is
//! showing, how far the home hero has scrolled toward the docked wordmark, and
//! which page section currently sits under the viewport center. It is pure
//! state. The host app feeds it events from the webview (location changes,
//! scroll offsets, resize reports, observer batches) and performs the page
//! commands it returns.
//!
//! ## Core Components
//!
//! - [`NavState`]: single state struct, mutated only through [`NavState::apply`]
//! - [`NavEvent`] / [`PageCommand`]: events in, host-page work out
//! - [`parse_path`]: the ordered routing table from location path to [`View`]
//! - [`scroll_progress`] / [`docked_scale`]: the wordmark docking math
//! - [`LogoFrame`]: the composed transform/color/shadow frame for the wordmark
//! - [`nearest_theme`]: resolves an observer batch to the section nearest the
//!   viewport center
//!
//! ## Event Flow
//!
//! Every source funnels through the same reducer:
//!
//! 1. The webview reports an event (popstate, scroll, resize, intersection)
//! 2. [`NavState::apply`] folds it into the state in one step
//! 3. The caller runs the returned [`PageCommand`]s (history pushes, scroll
//!    resets) against the page
//!
//! Rendering reads only derived accessors, so a view transition and its scroll
//! and theme resets are always observed together.

pub mod docking;
pub mod route;
pub mod scroll;
pub mod section;
pub mod state;

// Re-export main types
pub use docking::{LOGO_SHADOW, LOGO_TRANSITION, LogoFrame, docked_scale, is_docked};
pub use route::{Page, RouteMatch, View, parse_path, product_path};
pub use scroll::{MOBILE_BREAKPOINT, Viewport, scroll_progress};
pub use section::{
    SECTION_NAME_ATTR, SECTION_THEME_ATTR, SectionHit, SectionTheme, nearest_theme,
};
pub use state::{NavEvent, NavState, PageCommand};
