//! Product detail page.

use dioxus::prelude::*;
use velour_catalog::Product;
use velour_nav::Page;

use super::app::StoreContext;

/// Detail page for one resolved piece. The route layer guarantees the product
/// exists by the time this mounts and decides where "back" leads.
#[component]
pub fn ProductDetailPage(product: Product, on_back: EventHandler<()>) -> Element {
    let ctx = use_context::<StoreContext>();
    let mut navigator = ctx.navigator;
    let mut cart = ctx.cart;
    let mut added = use_signal(|| false);

    let piece = product.clone();

    rsx! {
        div { class: "product-detail",
            button {
                class: "product-back",
                onclick: move |_| on_back.call(()),
                "Back to the collection"
            }
            div { class: "product-body",
                div { class: "product-pane",
                    div { class: "product-palette",
                        for color in product.palette.iter() {
                            div {
                                key: "{color}",
                                class: "product-palette-band",
                                style: "background: {color};",
                            }
                        }
                    }
                }
                div { class: "product-copy",
                    span { class: "product-line", "{product.line}" }
                    h2 { class: "product-name", "{product.name}" }
                    span { class: "product-price", "{product.display_price()}" }
                    p { class: "product-description", "{product.description}" }
                    ul { class: "product-details",
                        for detail in product.details.iter() {
                            li { key: "{detail}", "{detail}" }
                        }
                    }
                    div { class: "product-actions",
                        button {
                            class: "button button-fill",
                            onclick: move |_| {
                                cart.write().add(&piece);
                                added.set(true);
                            },
                            if added() { "Added" } else { "Add to cart" }
                        }
                        if added() {
                            button {
                                class: "button button-bare",
                                onclick: move |_| navigator.to(Page::Cart),
                                "Go to cart"
                            }
                        }
                    }
                }
            }
        }
    }
}
