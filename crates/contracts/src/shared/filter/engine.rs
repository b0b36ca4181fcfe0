use super::constraints::FilterConstraints;
use crate::domain::a002_product::Product;
use std::collections::BTreeSet;

/// Inserts `value` if absent, removes it otherwise. Returns whether it is present afterwards.
pub fn toggle_membership<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

/// Whether `product` passes every active clause.
///
/// Price is always checked. A facet clause is active only when something is
/// selected for it and passes when any of the product's values is selected.
pub fn matches(product: &Product, constraints: &FilterConstraints) -> bool {
    if !constraints.price_range().contains(product.price) {
        return false;
    }

    let colors = constraints.selected_colors();
    if !colors.is_empty() && !product.colors().any(|c| colors.contains(c)) {
        return false;
    }

    let sizes = constraints.selected_sizes();
    if !sizes.is_empty() && !product.sizes().iter().any(|s| sizes.contains(s)) {
        return false;
    }

    let brands = constraints.selected_brands();
    if !brands.is_empty() && !product.brand().is_some_and(|b| brands.contains(b)) {
        return false;
    }

    true
}

/// Products passing `constraints`, in catalog order
pub fn apply_filters<'a>(catalog: &'a [Product], constraints: &FilterConstraints) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|product| matches(product, constraints))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::FacetDimension;
    use crate::shared::filter::constraints::PriceRange;
    use crate::shared::filter::facets::FacetOptions;
    use crate::shared::filter::fixtures::{footwear, product};

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn listing_constraints() -> FilterConstraints {
        FilterConstraints::new(PriceRange::new(149.0, 1699.0))
    }

    fn three_boots() -> Vec<Product> {
        vec![
            product("a", 200.0, Some("Black/Grey"), None, None),
            product("b", 500.0, Some("Black/Grey"), None, None),
            product("c", 1200.0, Some("Black/Grey"), None, None),
        ]
    }

    #[test]
    fn test_no_selection_returns_whole_price_window() {
        let catalog = three_boots();
        let visible = apply_filters(&catalog, &listing_constraints());
        assert_eq!(ids(&visible), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_price_window_is_inclusive() {
        let catalog = three_boots();
        let mut constraints = listing_constraints();
        constraints.set_max_price(600.0);
        assert_eq!(ids(&apply_filters(&catalog, &constraints)), vec!["a", "b"]);

        constraints.set_price_range(500.0, 1200.0);
        assert_eq!(ids(&apply_filters(&catalog, &constraints)), vec!["b", "c"]);
    }

    #[test]
    fn test_unknown_color_matches_nothing() {
        let catalog = three_boots();
        let mut constraints = listing_constraints();
        constraints.toggle_color("Red");
        assert!(apply_filters(&catalog, &constraints).is_empty());
    }

    #[test]
    fn test_facets_or_within_and_across() {
        let catalog = footwear();
        let mut constraints = listing_constraints();

        constraints.toggle_color("Grey");
        constraints.toggle_color("Blue");
        assert_eq!(ids(&apply_filters(&catalog, &constraints)), vec!["fw-1", "fw-3", "fw-5"]);

        constraints.toggle_brand("Trailhead");
        assert_eq!(ids(&apply_filters(&catalog, &constraints)), vec!["fw-1", "fw-3"]);

        constraints.toggle_size("9");
        constraints.toggle_size("10");
        assert_eq!(ids(&apply_filters(&catalog, &constraints)), vec!["fw-1", "fw-3"]);

        constraints.toggle_size("9");
        assert!(apply_filters(&catalog, &constraints).is_empty());
    }

    #[test]
    fn test_products_without_facet_fail_active_clause() {
        let catalog = footwear();
        for dimension in FacetDimension::all() {
            let options = FacetOptions::from_catalog(&catalog);
            let mut constraints = listing_constraints();
            for value in options.values(dimension) {
                constraints.toggle(dimension, value);
            }
            let visible = ids(&apply_filters(&catalog, &constraints));
            assert!(!visible.contains(&"fw-4".to_string()), "{dimension:?}");
            assert_eq!(visible.len(), 4);
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = footwear();
        let mut constraints = listing_constraints();
        constraints.toggle_color("Black");
        constraints.set_max_price(1000.0);

        let first = apply_filters(&catalog, &constraints);
        let second = apply_filters(&catalog, &constraints);
        assert_eq!(first, second);
        assert_eq!(catalog, footwear());
    }

    #[test]
    fn test_adding_selection_never_widens_result() {
        let catalog = footwear();
        let options = FacetOptions::from_catalog(&catalog);
        let unfiltered = apply_filters(&catalog, &listing_constraints()).len();

        for dimension in FacetDimension::all() {
            for first in options.values(dimension) {
                let mut constraints = listing_constraints();
                constraints.toggle(dimension, first);
                let before = apply_filters(&catalog, &constraints).len();
                assert!(before <= unfiltered);

                for other in FacetDimension::all() {
                    for value in options.values(other) {
                        if constraints.is_selected(other, value) {
                            continue;
                        }
                        let mut narrowed = constraints.clone();
                        narrowed.toggle(other, value);
                        let after = apply_filters(&catalog, &narrowed).len();
                        // a second value in the same facet may widen (OR), across facets never
                        if other != dimension {
                            assert!(after <= before, "{dimension:?}={first} + {other:?}={value}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_reset_returns_full_catalog() {
        let catalog = footwear();
        let mut constraints = listing_constraints();
        constraints.toggle_brand("Summit");
        constraints.set_price_range(400.0, 450.0);
        assert!(apply_filters(&catalog, &constraints).is_empty());

        constraints.reset();
        assert_eq!(apply_filters(&catalog, &constraints).len(), catalog.len());
    }

    #[test]
    fn test_toggle_membership() {
        let mut set = BTreeSet::new();
        assert!(toggle_membership(&mut set, "9"));
        assert!(toggle_membership(&mut set, "10"));
        assert!(!toggle_membership(&mut set, "9"));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["10"]);
    }
}
