//! Client-side faceted filtering for product listings.
//!
//! * [`facets`] derives the option lists shown in the sidebar.
//! * [`constraints`] holds what the shopper picked, keeping `min <= max`.
//! * [`engine`] applies the constraints to a catalog slice.
//!
//! Everything is synchronous and allocation-light; listings hold tens to a
//! few hundred products, so no index is kept.

pub mod constraints;
pub mod engine;
pub mod facets;

pub use constraints::{parse_price_input, reset_constraints, FilterConstraints, PriceRange};
pub use engine::{apply_filters, matches, toggle_membership};
pub use facets::{extract_facet_values, FacetOptions};
