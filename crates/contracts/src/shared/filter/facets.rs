use crate::domain::a002_product::Product;
use crate::enums::FacetDimension;
use std::collections::BTreeSet;

/// Values a single product carries for `dimension`; empty when the field is absent
pub fn product_facet_values(product: &Product, dimension: FacetDimension) -> Vec<&str> {
    match dimension {
        FacetDimension::Color => product.colors().collect(),
        FacetDimension::Size => product.sizes().iter().map(String::as_str).collect(),
        FacetDimension::Brand => product.brand().into_iter().collect(),
    }
}

/// Sorted, deduplicated values of `dimension` across the catalog.
///
/// Ordering is plain lexicographic, so the result does not depend on the
/// order of `catalog`.
pub fn extract_facet_values(catalog: &[Product], dimension: FacetDimension) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|product| product_facet_values(product, dimension))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Option lists for all three facets, computed once per catalog snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub brands: Vec<String>,
}

impl FacetOptions {
    pub fn from_catalog(catalog: &[Product]) -> Self {
        Self {
            colors: extract_facet_values(catalog, FacetDimension::Color),
            sizes: extract_facet_values(catalog, FacetDimension::Size),
            brands: extract_facet_values(catalog, FacetDimension::Brand),
        }
    }

    pub fn values(&self, dimension: FacetDimension) -> &[String] {
        match dimension {
            FacetDimension::Color => &self.colors,
            FacetDimension::Size => &self.sizes,
            FacetDimension::Brand => &self.brands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::fixtures::{footwear, product};

    #[test]
    fn test_color_values_split_and_sorted() {
        let catalog = vec![
            product("a", 100.0, Some("Black/Grey"), None, None),
            product("b", 100.0, Some("Red/Black"), None, None),
        ];
        assert_eq!(
            extract_facet_values(&catalog, FacetDimension::Color),
            vec!["Black", "Grey", "Red"]
        );
    }

    #[test]
    fn test_missing_fields_contribute_nothing() {
        let catalog = vec![product("a", 100.0, None, None, None)];
        let options = FacetOptions::from_catalog(&catalog);
        assert_eq!(options, FacetOptions::default());
        assert!(extract_facet_values(&[], FacetDimension::Brand).is_empty());
    }

    #[test]
    fn test_sizes_sorted_lexicographically() {
        let options = FacetOptions::from_catalog(&footwear());
        assert_eq!(options.sizes, vec!["10", "11", "7", "8", "9"]);
        assert_eq!(options.brands, vec!["Ridgeline", "Summit", "Trailhead"]);
        assert_eq!(options.colors, vec!["Black", "Blue", "Grey", "Olive", "Red"]);
    }

    #[test]
    fn test_permuted_catalog_yields_same_values() {
        let catalog = footwear();
        let mut reversed = catalog.clone();
        reversed.reverse();
        let mut rotated = catalog.clone();
        rotated.rotate_left(2);

        for dimension in FacetDimension::all() {
            let expected = extract_facet_values(&catalog, dimension);
            assert_eq!(extract_facet_values(&reversed, dimension), expected);
            assert_eq!(extract_facet_values(&rotated, dimension), expected);
        }
    }
}
