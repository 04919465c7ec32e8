use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::{assets, dom};

const HERO_VIDEO_ID: &str = "home-hero-reel";

#[component]
pub fn Home() -> Element {
    // browsers only honor autoplay once the muted property is set from
    // script, so nudge the hero reel after mount
    use_effect(|| {
        dom::play_muted(HERO_VIDEO_ID);
    });

    rsx! {
        div { class: "home",
            // full-viewport hero over the looping site reel
            section { id: "home", class: "hero",
                video {
                    id: HERO_VIDEO_ID,
                    class: "hero-video",
                    src: catalog::DEMO_REEL,
                    autoplay: true,
                    muted: true,
                    r#loop: true,
                    preload: "auto",
                    "playsinline": "true",
                }
                div { class: "hero-scrim" }
                div { class: "hero-copy",
                    img {
                        class: "hero-wordmark",
                        src: assets::HERO_WORDMARK,
                        alt: catalog::VENDOR,
                    }
                    p { class: "hero-tagline", "{catalog::TAGLINE}" }
                }
            }

            CategoryShowcase {}

            section { id: "about", class: "about",
                div { class: "container",
                    h2 { "Innovation Meets Precision" }
                    p {
                        "We design and manufacture cutting-edge robotic solutions for the "
                        "most demanding environments. From the depths of the ocean to the "
                        "skies above, our fleet of autonomous vehicles pushes the boundaries "
                        "of what's possible."
                    }
                }
            }
        }
    }
}

// one themed tile per category, fronted by its lead product
#[component]
fn CategoryShowcase() -> Element {
    let navigator = use_navigator();

    rsx! {
        section { id: "products", class: "showcase",
            div { class: "container",
                div { class: "showcase-grid",
                    for (category, product) in catalog::featured() {
                        div {
                            class: "showcase-tile showcase-tile--{category.id}",
                            key: "{category.id}",
                            onclick: move |_| {
                                navigator
                                    .push(Route::CategoryDetail {
                                        category_id: category.id.to_string(),
                                    });
                            },
                            div { class: "showcase-copy",
                                h3 { "{category.title}" }
                                p { "{product.description}" }
                            }
                            div { class: "showcase-ctas",
                                Link {
                                    class: "btn-pill btn-pill--solid",
                                    to: Route::CategoryDetail {
                                        category_id: category.id.to_string(),
                                    },
                                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                                    "Learn more"
                                }
                                Link {
                                    class: "btn-pill btn-pill--ghost",
                                    to: Route::Contact {},
                                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                                    "Buy now"
                                }
                            }
                            figure { class: "showcase-art",
                                img {
                                    src: product.image_url,
                                    alt: product.title,
                                    loading: "lazy",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
