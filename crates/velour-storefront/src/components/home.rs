//! Home page: the four themed sections the scroll engine plays against.

use dioxus::prelude::*;
use velour_nav::{Page, SectionTheme};

use super::app::StoreContext;

/// Home view. Each section declares a name and a theme through data
/// attributes; the section observer reads those to tint the chrome as the
/// viewport center crosses them.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        main { class: "home",
            HeroSection {}
            PhilosophySection {}
            ArchiveSection {}
            FooterSection {}
        }
    }
}

#[component]
fn ThemedSection(
    name: &'static str,
    theme: SectionTheme,
    class: &'static str,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "{class}",
            "data-section-name": "{name}",
            "data-theme": "{theme.attr_value()}",
            {children}
        }
    }
}

/// Full-height opening. The wordmark overlay sits on top of this, so the
/// section itself carries only the backdrop and the entry points.
#[component]
fn HeroSection() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;

    rsx! {
        ThemedSection { name: "hero", theme: SectionTheme::Dark, class: "section hero",
            p { class: "hero-tagline", "Autumn pieces, cut in Como and Biella" }
            div { class: "hero-actions",
                button {
                    class: "button button-outline-light",
                    onclick: move |_| navigator.to(Page::Collection),
                    "View the collection"
                }
                button {
                    class: "button button-bare-light",
                    onclick: move |_| navigator.to_product("midnight-rose"),
                    "The Midnight Rose gown"
                }
            }
            span { class: "hero-scroll-cue", "Scroll" }
        }
    }
}

#[component]
fn PhilosophySection() -> Element {
    rsx! {
        ThemedSection {
            name: "philosophy",
            theme: SectionTheme::Light,
            class: "section philosophy",
            div { class: "philosophy-inner reveal",
                h2 { class: "section-heading", "Nothing extra" }
                p { class: "philosophy-copy",
                    "Every piece begins as cloth we would keep for ourselves. "
                    "We cut little, finish by hand, and let the fabric decide "
                    "the rest."
                }
            }
            div { class: "philosophy-columns",
                div { class: "philosophy-column reveal reveal-left",
                    h3 { "Cloth" }
                    p { "Mills we have worked with for a decade, woven to our weight." }
                }
                div { class: "philosophy-column reveal",
                    h3 { "Cut" }
                    p { "Patterns drafted flat, draped once, corrected by eye." }
                }
                div { class: "philosophy-column reveal reveal-right",
                    h3 { "Keep" }
                    p { "Repairs are free, forever. Bring it back when it needs us." }
                }
            }
        }
    }
}

/// Seasonal archive wall. Static content; the tiles are typographic.
#[component]
fn ArchiveSection() -> Element {
    let seasons = [
        ("MMXXVI", "A colder palette"),
        ("MMXXV", "The linen year"),
        ("MMXXIV", "Unlined tailoring"),
        ("MMXXIII", "First velvet"),
    ];

    rsx! {
        ThemedSection { name: "archive", theme: SectionTheme::Light, class: "section archive",
            h2 { class: "section-heading reveal", "From the archive" }
            div { class: "archive-grid",
                for (year, note) in seasons {
                    div { key: "{year}", class: "archive-tile reveal",
                        span { class: "archive-year", "{year}" }
                        span { class: "archive-note", "{note}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FooterSection() -> Element {
    rsx! {
        ThemedSection { name: "footer", theme: SectionTheme::Dark, class: "section footer",
            div { class: "footer-columns reveal",
                div { class: "footer-column",
                    h3 { "Visit" }
                    p { "Via Borgospesso 12, Milano" }
                    p { "Thursday to Saturday, by appointment" }
                }
                div { class: "footer-column",
                    h3 { "Browse" }
                    FooterLink { page: Page::Collection, label: "Collection" }
                    FooterLink { page: Page::About, label: "About" }
                    FooterLink { page: Page::Account, label: "Account" }
                }
                div { class: "footer-column",
                    h3 { "Write" }
                    p { "atelier@velour.example" }
                }
            }
            p { class: "footer-fineprint reveal", "Velour. Cut once, kept forever." }
        }
    }
}

#[component]
fn FooterLink(page: Page, label: &'static str) -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;

    rsx! {
        button {
            class: "footer-link",
            onclick: move |_| navigator.to(page),
            "{label}"
        }
    }
}
