pub mod breadcrumbs;
pub mod filter_panel;
pub mod product_card;
