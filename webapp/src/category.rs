use dioxus::prelude::*;
use dioxus_router::prelude::*;

use catalog::Product;

use crate::Route;
use crate::components::product_grid::HorizontalProductGrid;

#[derive(Clone, PartialEq, Props)]
pub struct CategoryDetailProps {
    pub category_id: String,
}

#[component]
pub fn CategoryDetail(props: CategoryDetailProps) -> Element {
    // unknown single-segment routes land here, so a failed lookup is an
    // expected condition rather than an error
    let Some(category) = catalog::category(&props.category_id) else {
        return rsx! {
            div { class: "not-found",
                h1 { "Category not found" }
                p { "Nothing lives at /{props.category_id}." }
                Link { class: "btn btn-primary", to: Route::Home {}, "Back to home" }
            }
        };
    };

    rsx! {
        div { class: "category-page",
            section { class: "category-hero",
                div { class: "container",
                    h1 { "{category.title}" }
                    p { "{category.description}" }
                }
            }

            if let Some((lead, rest)) = category.products.split_first() {
                section { class: "category-feature",
                    div { class: "container",
                        FeatureBanner { product: lead }
                        div { class: "category-grid",
                            for product in rest.iter() {
                                CategoryTile { key: "{product.id}", product }
                            }
                        }
                    }
                }
            }

            section { id: "lineup",
                HorizontalProductGrid {
                    section: category.id,
                    title: format!("All {} Products", category.title),
                    products: category.products,
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FeatureBannerProps {
    product: &'static Product,
}

// oversized banner for the lead product of a category
#[component]
fn FeatureBanner(props: FeatureBannerProps) -> Element {
    let product = props.product;

    rsx! {
        div {
            class: "feature-banner",
            style: "background-image: url('{product.image_url}');",
            div { class: "feature-scrim" }
            div { class: "feature-copy",
                p { class: "feature-kicker", "Featured Product" }
                h2 { "{product.title}" }
                p { "{product.description}" }
                div { class: "feature-ctas",
                    a { class: "btn-pill btn-pill--solid", href: "#lineup", "Learn More" }
                    Link {
                        class: "btn-pill btn-pill--ghost",
                        to: Route::Contact {},
                        "Where to Buy"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CategoryTileProps {
    product: &'static Product,
}

#[component]
fn CategoryTile(props: CategoryTileProps) -> Element {
    let product = props.product;

    rsx! {
        div {
            class: "category-tile",
            style: "background-image: url('{product.image_url}');",
            div { class: "feature-scrim" }
            div { class: "feature-copy",
                h3 { "{product.title}" }
                p { "{product.description}" }
                div { class: "feature-ctas",
                    a { class: "btn-pill btn-pill--solid", href: "#lineup", "Learn More" }
                    Link {
                        class: "btn-pill btn-pill--ghost",
                        to: Route::Contact {},
                        "Where to Buy"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PageNotFoundProps {
    pub segments: Vec<String>,
}

#[component]
pub fn PageNotFound(props: PageNotFoundProps) -> Element {
    let path = props.segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to home" }
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog::CATEGORIES;

    use crate::Route;

    #[test]
    fn category_routes_agree_with_the_catalog() {
        // the router renders CategoryDetail as /{category_id}, which must
        // match the route strings the catalog declares
        for category in CATEGORIES {
            let route = Route::CategoryDetail {
                category_id: category.id.to_string(),
            };

            assert_eq!(route.to_string(), category.route);
        }
    }

    #[test]
    fn catalog_routes_parse_back_to_their_category() {
        for category in CATEGORIES {
            let parsed: Route = category.route.parse().expect("route failed to parse");

            assert_eq!(
                parsed,
                Route::CategoryDetail {
                    category_id: category.id.to_string(),
                }
            );
        }
    }
}
