//! Section markers and viewport-center theme resolution.
//!
//! Home sections declare a name and a theme through data attributes. An
//! observer in the webview watches a one-pixel band at the vertical center of
//! the viewport and reports which sections straddle it; the theme of the
//! nearest one drives the navbar and wordmark colors.

use serde::Deserialize;

/// Attribute naming a section. Elements without it are invisible to theming.
pub const SECTION_NAME_ATTR: &str = "data-section-name";
/// Attribute carrying a section's declared theme.
pub const SECTION_THEME_ATTR: &str = "data-theme";

/// Light or dark, as declared by the section under the viewport center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionTheme {
    #[default]
    Light,
    Dark,
}

impl SectionTheme {
    /// Parses a `data-theme` attribute value. Unknown values are ignored by
    /// the caller rather than mapped to a default.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "light" => Some(SectionTheme::Light),
            "dark" => Some(SectionTheme::Dark),
            _ => None,
        }
    }

    /// The attribute value sections declare for this theme.
    pub fn attr_value(self) -> &'static str {
        match self {
            SectionTheme::Light => "light",
            SectionTheme::Dark => "dark",
        }
    }
}

/// One section from an observer batch: its declared theme and how far its
/// vertical center sits from the viewport center.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SectionHit {
    pub theme: String,
    pub center_offset: f64,
}

/// Resolves an observer batch to the theme of the section nearest the
/// viewport center.
///
/// Tall sections can overlap the center band at the same time during fast
/// scrolls; picking the nearest center makes the winner deterministic
/// regardless of report order. Hits with unrecognized theme values are
/// skipped. `None` means the batch had nothing usable and the caller keeps
/// its sticky theme.
pub fn nearest_theme(hits: &[SectionHit]) -> Option<SectionTheme> {
    let mut best: Option<(f64, SectionTheme)> = None;
    for hit in hits {
        let Some(theme) = SectionTheme::from_attr(&hit.theme) else {
            continue;
        };
        match best {
            Some((distance, _)) if hit.center_offset >= distance => {}
            _ => best = Some((hit.center_offset, theme)),
        }
    }
    best.map(|(_, theme)| theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(theme: &str, center_offset: f64) -> SectionHit {
        SectionHit {
            theme: theme.to_string(),
            center_offset,
        }
    }

    #[test]
    fn test_single_hit_wins() {
        assert_eq!(nearest_theme(&[hit("dark", 120.0)]), Some(SectionTheme::Dark));
    }

    #[test]
    fn test_nearest_center_wins_regardless_of_order() {
        let batch = [hit("dark", 300.0), hit("light", 40.0)];
        assert_eq!(nearest_theme(&batch), Some(SectionTheme::Light));

        let reversed = [hit("light", 40.0), hit("dark", 300.0)];
        assert_eq!(nearest_theme(&reversed), Some(SectionTheme::Light));
    }

    #[test]
    fn test_tie_keeps_the_first_hit() {
        let batch = [hit("dark", 50.0), hit("light", 50.0)];
        assert_eq!(nearest_theme(&batch), Some(SectionTheme::Dark));
    }

    #[test]
    fn test_unknown_theme_values_are_skipped() {
        let batch = [hit("sepia", 10.0), hit("dark", 200.0)];
        assert_eq!(nearest_theme(&batch), Some(SectionTheme::Dark));
    }

    #[test]
    fn test_empty_batch_resolves_nothing() {
        assert_eq!(nearest_theme(&[]), None);
        assert_eq!(nearest_theme(&[hit("sepia", 10.0)]), None);
    }

    #[test]
    fn test_theme_attr_round_trip() {
        assert_eq!(SectionTheme::from_attr("light"), Some(SectionTheme::Light));
        assert_eq!(SectionTheme::from_attr("dark"), Some(SectionTheme::Dark));
        assert_eq!(SectionTheme::from_attr("Dark"), None);
        assert_eq!(SectionTheme::Dark.attr_value(), "dark");
    }
}
