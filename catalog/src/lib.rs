// Static product catalog for the Bots Overkill marketing site.
//
// All vendor data is compiled into the binary, so every accessor hands out
// &'static references and the ui layer never needs to copy or cache anything.

pub mod contact;
mod data;

pub use data::{CATEGORIES, DEMO_REEL};

pub const VENDOR: &str = "Bots Overkill";
pub const TAGLINE: &str = "Built to last, made to explore";

// structs and types

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub video_url: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub route: &'static str,
    pub description: &'static str,
    pub products: &'static [Product],
}

// lookups

// find a category by its id, which is also its url segment
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

// find a single product within a category
pub fn product(category_id: &str, product_id: &str) -> Option<&'static Product> {
    category(category_id)?
        .products
        .iter()
        .find(|product| product.id == product_id)
}

// the first product of each category, used for showcase tiles and banners
pub fn featured() -> impl Iterator<Item = (&'static Category, &'static Product)> {
    CATEGORIES
        .iter()
        .filter_map(|category| Some((category, category.products.first()?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn category_ids_are_unique_url_segments() {
        let mut seen = HashSet::new();

        for category in CATEGORIES {
            assert!(seen.insert(category.id), "duplicate id {}", category.id);
            assert!(!category.id.is_empty());
            assert!(
                category
                    .id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{} is not a clean url segment",
                category.id
            );
            assert_eq!(category.route, format!("/{}", category.id));
        }
    }

    #[test]
    fn product_ids_are_unique_within_their_category() {
        for category in CATEGORIES {
            let mut seen = HashSet::new();

            for product in category.products {
                assert!(
                    seen.insert(product.id),
                    "duplicate id {} in {}",
                    product.id,
                    category.id
                );
            }
        }
    }

    #[test]
    fn every_category_can_fill_its_showcase() {
        // each category needs a featured product plus at least one more
        // for the detail page grid
        for category in CATEGORIES {
            assert!(
                category.products.len() >= 2,
                "{} has too few products",
                category.id
            );
        }

        assert_eq!(featured().count(), CATEGORIES.len());
    }

    #[test]
    fn product_media_paths_are_absolute() {
        for category in CATEGORIES {
            for product in category.products {
                assert!(product.image_url.starts_with('/'), "{}", product.id);

                if let Some(video_url) = product.video_url {
                    assert!(video_url.starts_with('/'), "{}", product.id);
                }
            }
        }
    }

    #[test]
    fn lookups_match_the_static_tables() {
        assert_eq!(category("underwater").map(|c| c.title), Some("Underwater"));
        assert_eq!(category("spacefaring"), None);

        let alpha = product("underwater", "alpha").unwrap();
        assert_eq!(alpha.title, "Alpha");

        assert_eq!(product("underwater", "husky-a300"), None);
        assert_eq!(product("land", "husky-a300").map(|p| p.title), Some("Husky A300"));
    }

    #[test]
    fn featured_pairs_lead_products_with_their_category() {
        for (category, product) in featured() {
            assert_eq!(category.products.first(), Some(product));
        }
    }
}
