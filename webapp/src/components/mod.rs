pub mod footer;
pub mod menu;
pub mod navigation;
pub mod product_card;
pub mod product_grid;
