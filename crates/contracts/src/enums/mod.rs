pub mod facet_dimension;

pub use facet_dimension::FacetDimension;
