use dioxus::prelude::*;

use catalog::Product;

use crate::common::dom::{self, PageDirection};
use crate::components::product_card::ProductCard;

#[derive(Clone, PartialEq, Props)]
pub struct HorizontalProductGridProps {
    // unique per mounted grid, also namespaces the card video ids
    section: &'static str,
    title: String,
    products: &'static [Product],
}

// a single row of product cards with arrow controls that page the row
// sideways one viewport-chunk at a time
#[component]
pub fn HorizontalProductGrid(props: HorizontalProductGridProps) -> Element {
    let track_id = format!("{}-strip", props.section);
    let back_target = track_id.clone();
    let forward_target = track_id.clone();

    rsx! {
        section { class: "product-strip",
            div { class: "container",
                div { class: "strip-header",
                    h2 { class: "strip-title", "{props.title}" }
                    div { class: "strip-controls",
                        button {
                            class: "strip-control",
                            aria_label: "Scroll backward",
                            onclick: move |_| dom::page_horizontally(&back_target, PageDirection::Back),
                            svg {
                                width: "20",
                                height: "20",
                                view_box: "0 0 24 24",
                                fill: "none",
                                stroke: "currentColor",
                                stroke_width: "2",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                path { d: "M15 19l-7-7 7-7" }
                            }
                        }
                        button {
                            class: "strip-control",
                            aria_label: "Scroll forward",
                            onclick: move |_| dom::page_horizontally(&forward_target, PageDirection::Forward),
                            svg {
                                width: "20",
                                height: "20",
                                view_box: "0 0 24 24",
                                fill: "none",
                                stroke: "currentColor",
                                stroke_width: "2",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                path { d: "M9 5l7 7-7 7" }
                            }
                        }
                    }
                }
                div { id: "{track_id}", class: "strip-track",
                    for product in props.products.iter() {
                        div { class: "strip-item", key: "{product.id}",
                            ProductCard { product, section: props.section }
                        }
                    }
                }
            }
        }
    }
}
