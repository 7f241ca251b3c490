//! About page.

use dioxus::prelude::*;
use velour_nav::Page;

use super::app::StoreContext;

#[component]
pub fn AboutPage() -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;

    rsx! {
        div { class: "about",
            header { class: "page-header",
                h2 { class: "page-title", "About Velour" }
            }
            div { class: "about-copy",
                p {
                    "Velour began as two tables in a Milanese courtyard: one for "
                    "cutting, one for coffee. It has not grown much since, on "
                    "purpose."
                }
                p {
                    "We make small runs from cloth woven to our weight, sew the "
                    "seams that matter by hand, and mend anything we have ever "
                    "made, free, for as long as it exists."
                }
            }
            button {
                class: "button button-outline",
                onclick: move |_| navigator.to(Page::Collection),
                "See the work"
            }
        }
    }
}
