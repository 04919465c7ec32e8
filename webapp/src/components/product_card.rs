use dioxus::prelude::*;

use catalog::Product;

use crate::common::dom;

#[derive(Clone, PartialEq, Props)]
pub struct ProductCardProps {
    product: &'static Product,
    // keeps dom ids unique when the same product appears in several grids
    section: &'static str,
}

// image card that crossfades to a muted looping demo while hovered or
// focused; products without a demo reel stay on their still image
#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let product = props.product;
    let video_id = format!("{}-{}-preview", props.section, product.id);

    let mut hovered = use_signal(|| false);

    {
        let video_id = video_id.clone();
        use_effect(move || {
            if product.video_url.is_none() {
                return;
            }

            if hovered() {
                dom::play_muted(&video_id);
            } else {
                dom::pause(&video_id);
            }
        });
    }

    rsx! {
        div {
            class: "product-card",
            tabindex: 0,
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onfocusin: move |_| hovered.set(true),
            onfocusout: move |_| hovered.set(false),
            div { class: "product-card-frame",
                img {
                    class: "product-card-image",
                    src: product.image_url,
                    alt: product.title,
                    loading: "lazy",
                }
                if let Some(video_url) = product.video_url {
                    video {
                        id: "{video_id}",
                        class: if hovered() { "product-card-video visible" } else { "product-card-video" },
                        src: video_url,
                        muted: true,
                        r#loop: true,
                        preload: "metadata",
                        "playsinline": "true",
                    }
                }
            }
            h3 { class: "product-card-title", "{product.title}" }
            p { class: "product-card-blurb", "{product.description}" }
        }
    }
}
