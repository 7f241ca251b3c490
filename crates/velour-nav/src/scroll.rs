//! Scroll progress against the wordmark docking threshold.

/// Viewport width below which the layout is treated as mobile, logical px.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Logical viewport dimensions, refreshed on every resize report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Mobile layouts scroll further before the wordmark docks.
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// Scroll distance over which the wordmark docking completes.
    pub fn dock_threshold(&self) -> f64 {
        let factor = if self.is_mobile() { 0.6 } else { 0.4 };
        self.height * factor
    }
}

impl Default for Viewport {
    /// Stand-in until the first resize report arrives from the webview.
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Normalized docking progress for a scroll offset.
///
/// 0 at the top of the page, rising linearly to exactly 1 once the offset
/// reaches the threshold, and pinned there for any deeper scroll. A collapsed
/// viewport (threshold of zero) counts as fully docked.
pub fn scroll_progress(offset: f64, viewport: Viewport) -> f64 {
    let threshold = viewport.dock_threshold();
    if threshold <= 0.0 {
        return 1.0;
    }
    (offset / threshold).clamp(0.0, 1.0)
}
