//! Wordmark docking: the scale target and the composed animation frame.
//!
//! The wordmark renders once at hero size and never remounts. Docking is a
//! single CSS transform interpolating between the viewport-centered hero
//! position and a scaled-down resting spot in the navigation bar, so the
//! element glides between the two as scroll progress moves.

use crate::route::View;
use crate::scroll::MOBILE_BREAKPOINT;
use crate::section::SectionTheme;

/// Hero wordmark size as a fraction of viewport width (the CSS `16vw`).
const BASE_SIZE_FACTOR: f64 = 0.16;
/// Docked wordmark height target, logical px.
const DOCKED_TARGET_MOBILE: f64 = 28.0;
const DOCKED_TARGET_DESKTOP: f64 = 40.0;
/// Vertical resting offset of the docked wordmark from the viewport top, rem.
const HEADER_OFFSET_MOBILE_REM: f64 = 2.4;
const HEADER_OFFSET_DESKTOP_REM: f64 = 2.2;

/// CSS transition driving both the docking transform and color changes.
pub const LOGO_TRANSITION: &str =
    "transform 0.4s cubic-bezier(0.2, 0.8, 0.2, 1), color 0.4s ease";
/// Soft shadow lifting the wordmark off the hero imagery.
pub const LOGO_SHADOW: &str = "0 4px 30px rgba(0,0,0,0.3)";

/// Scale that shrinks the hero-sized wordmark to its docked navbar size.
///
/// Clamped below so the wordmark stays legible on very wide viewports and
/// above so it never renders larger than the hero.
pub fn docked_scale(viewport_width: f64) -> f64 {
    let base_size = viewport_width * BASE_SIZE_FACTOR;
    let target = if viewport_width < MOBILE_BREAKPOINT {
        DOCKED_TARGET_MOBILE
    } else {
        DOCKED_TARGET_DESKTOP
    };
    (target / base_size).clamp(0.08, 1.0)
}

/// True once the wordmark rests in the navigation bar. Off the home view the
/// wordmark is always docked.
pub fn is_docked(view: &View, progress: f64) -> bool {
    progress == 1.0 || !view.is_home()
}

/// One composed animation frame for the wordmark overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoFrame {
    /// CSS transform carrying the wordmark toward (or into) its dock.
    pub transform: String,
    /// CSS color of the wordmark text.
    pub color: &'static str,
    /// CSS text-shadow, `none` once the hero is left behind.
    pub text_shadow: &'static str,
}

impl LogoFrame {
    /// Composes the frame for the current navigation state.
    ///
    /// Pure function of its inputs; the caller renders the result directly.
    /// `progress` is expected in `0.0..=1.0` and `docked_scale` comes from
    /// [`docked_scale`].
    pub fn compose(
        view: &View,
        theme: SectionTheme,
        progress: f64,
        docked_scale: f64,
        mobile: bool,
    ) -> Self {
        let home = view.is_home();
        let header_offset = if mobile {
            HEADER_OFFSET_MOBILE_REM
        } else {
            HEADER_OFFSET_DESKTOP_REM
        };

        let transform = if is_docked(view, progress) {
            format!("translateY(calc(-50vh + {header_offset}rem)) scale({docked_scale})")
        } else {
            let scale = 1.0 - progress * (1.0 - docked_scale);
            format!(
                "translateY(calc(-{}vh + {}rem)) scale({scale})",
                progress * 50.0,
                progress * header_offset,
            )
        };

        let color = if !home {
            "black"
        } else if progress < 0.2 {
            "white"
        } else {
            match theme {
                SectionTheme::Dark => "white",
                SectionTheme::Light => "black",
            }
        };

        let text_shadow = if home && progress < 0.5 {
            LOGO_SHADOW
        } else {
            "none"
        };

        Self {
            transform,
            color,
            text_shadow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docked_scale_on_desktop() {
        // 40 / (1024 * 0.16)
        let scale = docked_scale(1024.0);
        assert!((scale - 0.244140625).abs() < 1e-12);
    }

    #[test]
    fn test_docked_scale_clamps_low() {
        // Very wide viewport pushes the raw ratio under the floor.
        assert_eq!(docked_scale(4000.0), 0.08);
    }

    #[test]
    fn test_docked_scale_clamps_high() {
        // Tiny viewport would scale the wordmark up; pin at the hero size.
        assert_eq!(docked_scale(120.0), 1.0);
        assert_eq!(docked_scale(0.0), 1.0);
    }

    #[test]
    fn test_docked_iff_progress_complete_or_off_home() {
        assert!(!is_docked(&View::Home, 0.0));
        assert!(!is_docked(&View::Home, 0.99));
        assert!(is_docked(&View::Home, 1.0));
        assert!(is_docked(&View::Cart, 0.0));
        assert!(is_docked(&View::Collection, 0.5));
    }

    #[test]
    fn test_docked_transform_pins_to_header() {
        let frame = LogoFrame::compose(&View::Home, SectionTheme::Light, 1.0, 0.25, false);
        assert_eq!(
            frame.transform,
            "translateY(calc(-50vh + 2.2rem)) scale(0.25)"
        );
    }

    #[test]
    fn test_undocked_transform_interpolates() {
        let frame = LogoFrame::compose(&View::Home, SectionTheme::Light, 0.5, 0.25, false);
        // Halfway: 25vh of travel, half the header offset, scale midway to 0.25.
        assert_eq!(
            frame.transform,
            "translateY(calc(-25vh + 1.1rem)) scale(0.625)"
        );
    }

    #[test]
    fn test_mobile_header_offset() {
        let frame = LogoFrame::compose(&View::Home, SectionTheme::Light, 1.0, 0.3, true);
        assert!(frame.transform.contains("2.4rem"));
    }

    #[test]
    fn test_color_over_the_hero_is_white() {
        let frame = LogoFrame::compose(&View::Home, SectionTheme::Light, 0.1, 0.25, false);
        assert_eq!(frame.color, "white");
    }

    #[test]
    fn test_color_follows_section_theme_past_hero() {
        let dark = LogoFrame::compose(&View::Home, SectionTheme::Dark, 0.6, 0.25, false);
        assert_eq!(dark.color, "white");
        let light = LogoFrame::compose(&View::Home, SectionTheme::Light, 0.6, 0.25, false);
        assert_eq!(light.color, "black");
    }

    #[test]
    fn test_color_off_home_is_black() {
        let frame = LogoFrame::compose(
            &View::Product {
                slug: "velvet-ember".to_string(),
            },
            SectionTheme::Dark,
            0.0,
            0.25,
            false,
        );
        assert_eq!(frame.color, "black");
    }

    #[test]
    fn test_shadow_only_over_the_hero() {
        let over = LogoFrame::compose(&View::Home, SectionTheme::Light, 0.49, 0.25, false);
        assert_eq!(over.text_shadow, LOGO_SHADOW);
        let past = LogoFrame::compose(&View::Home, SectionTheme::Light, 0.5, 0.25, false);
        assert_eq!(past.text_shadow, "none");
        let away = LogoFrame::compose(&View::Cart, SectionTheme::Light, 0.0, 0.25, false);
        assert_eq!(away.text_shadow, "none");
    }
}
