//! Full collection listing.

use dioxus::prelude::*;
use velour_catalog::Product;

use super::app::StoreContext;

/// Grid of every piece in the catalog. Also the quiet landing spot for product
/// links that no longer resolve.
#[component]
pub fn CollectionPage() -> Element {
    let ctx = use_context::<StoreContext>();
    let catalog = ctx.catalog.suspend()?;
    let products = catalog.read().products().to_vec();

    rsx! {
        div { class: "collection",
            header { class: "page-header",
                h2 { class: "page-title", "The Collection" }
                p { class: "page-subtitle", "{products.len()} pieces, made to be kept" }
            }
            if products.is_empty() {
                p { class: "collection-empty", "The collection is being rehung. Come back shortly." }
            }
            div { class: "collection-grid",
                for product in products.iter() {
                    CollectionCard { key: "{product.slug}", product: product.clone() }
                }
            }
        }
    }
}

#[component]
fn CollectionCard(product: Product) -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;
    let slug = product.slug.clone();

    rsx! {
        button {
            class: "collection-card",
            onclick: move |_| navigator.to_product(&slug),
            div { class: "card-swatches",
                for color in product.palette.iter() {
                    span {
                        key: "{color}",
                        class: "card-swatch",
                        style: "background: {color};",
                    }
                }
            }
            span { class: "card-name", "{product.name}" }
            span { class: "card-line", "{product.line}" }
            span { class: "card-price", "{product.display_price()}" }
        }
    }
}
