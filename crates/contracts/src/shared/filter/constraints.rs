use super::engine::toggle_membership;
use crate::enums::FacetDimension;
use std::collections::BTreeSet;

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Builds a range, pulling `min` down to `max` when they are inverted
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: min.min(max),
            max,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Parses a price typed into a number input.
///
/// Non-numeric text yields `fallback`, mirroring how the sidebar inputs reset
/// to the configured bound instead of surfacing an error.
pub fn parse_price_input(raw: &str, fallback: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}

/// Shopper-selected filter values for one listing.
///
/// `price_range` always lies inside `extremes` and satisfies `min <= max`;
/// every mutator clamps instead of rejecting.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConstraints {
    extremes: PriceRange,
    price_range: PriceRange,
    selected_colors: BTreeSet<String>,
    selected_sizes: BTreeSet<String>,
    selected_brands: BTreeSet<String>,
}

impl FilterConstraints {
    pub fn new(extremes: PriceRange) -> Self {
        let extremes = PriceRange::new(extremes.min, extremes.max);
        Self {
            extremes,
            price_range: extremes,
            selected_colors: BTreeSet::new(),
            selected_sizes: BTreeSet::new(),
            selected_brands: BTreeSet::new(),
        }
    }

    pub fn extremes(&self) -> PriceRange {
        self.extremes
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn selected(&self, dimension: FacetDimension) -> &BTreeSet<String> {
        match dimension {
            FacetDimension::Color => &self.selected_colors,
            FacetDimension::Size => &self.selected_sizes,
            FacetDimension::Brand => &self.selected_brands,
        }
    }

    pub fn selected_colors(&self) -> &BTreeSet<String> {
        &self.selected_colors
    }

    pub fn selected_sizes(&self) -> &BTreeSet<String> {
        &self.selected_sizes
    }

    pub fn selected_brands(&self) -> &BTreeSet<String> {
        &self.selected_brands
    }

    pub fn is_selected(&self, dimension: FacetDimension, value: &str) -> bool {
        self.selected(dimension).contains(value)
    }

    /// Adds or removes `value` from the facet's selection; returns whether it is now selected
    pub fn toggle(&mut self, dimension: FacetDimension, value: &str) -> bool {
        let set = match dimension {
            FacetDimension::Color => &mut self.selected_colors,
            FacetDimension::Size => &mut self.selected_sizes,
            FacetDimension::Brand => &mut self.selected_brands,
        };
        toggle_membership(set, value.to_string())
    }

    pub fn toggle_color(&mut self, color: &str) -> bool {
        self.toggle(FacetDimension::Color, color)
    }

    pub fn toggle_size(&mut self, size: &str) -> bool {
        self.toggle(FacetDimension::Size, size)
    }

    pub fn toggle_brand(&mut self, brand: &str) -> bool {
        self.toggle(FacetDimension::Brand, brand)
    }

    /// Lower bound edit: clamped into the extremes and never above the current max
    pub fn set_min_price(&mut self, value: f64) {
        let value = if value.is_finite() { value } else { self.extremes.min };
        self.price_range.min = self.extremes.clamp(value).min(self.price_range.max);
    }

    /// Upper bound edit: clamped into the extremes and never below the current min
    pub fn set_max_price(&mut self, value: f64) {
        let value = if value.is_finite() { value } else { self.extremes.max };
        self.price_range.max = self.extremes.clamp(value).max(self.price_range.min);
    }

    /// Replaces both bounds; an inverted pair collapses `min` onto `max`
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        let min = if min.is_finite() { min } else { self.extremes.min };
        let max = if max.is_finite() { max } else { self.extremes.max };
        let max = self.extremes.clamp(max);
        self.price_range = PriceRange {
            min: self.extremes.clamp(min).min(max),
            max,
        };
    }

    /// Back to the configured extremes with nothing selected
    pub fn reset(&mut self) {
        *self = Self::new(self.extremes);
    }

    pub fn is_price_narrowed(&self) -> bool {
        self.price_range != self.extremes
    }

    /// Selected facet values, plus one when the price range is narrowed
    pub fn active_filter_count(&self) -> usize {
        self.selected_colors.len()
            + self.selected_sizes.len()
            + self.selected_brands.len()
            + usize::from(self.is_price_narrowed())
    }

    pub fn is_pristine(&self) -> bool {
        self.active_filter_count() == 0
    }
}

/// Fresh constraint state for a listing whose configured bounds are `extremes`
pub fn reset_constraints(extremes: PriceRange) -> FilterConstraints {
    FilterConstraints::new(extremes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extremes() -> PriceRange {
        PriceRange::new(149.0, 1699.0)
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input("600", 149.0), 600.0);
        assert_eq!(parse_price_input(" 749.5 ", 149.0), 749.5);
        assert_eq!(parse_price_input("", 149.0), 149.0);
        assert_eq!(parse_price_input("abc", 1699.0), 1699.0);
        assert_eq!(parse_price_input("NaN", 1699.0), 1699.0);
    }

    #[test]
    fn test_min_above_max_is_clamped_to_max() {
        let mut constraints = FilterConstraints::new(extremes());
        constraints.set_max_price(600.0);
        constraints.set_min_price(900.0);
        assert_eq!(constraints.price_range(), PriceRange { min: 600.0, max: 600.0 });
    }

    #[test]
    fn test_max_below_min_is_clamped_to_min() {
        let mut constraints = FilterConstraints::new(extremes());
        constraints.set_min_price(500.0);
        constraints.set_max_price(100.0);
        assert_eq!(constraints.price_range(), PriceRange { min: 500.0, max: 500.0 });
    }

    #[test]
    fn test_out_of_range_input_clamped_to_extremes() {
        let mut constraints = FilterConstraints::new(extremes());
        constraints.set_min_price(10.0);
        constraints.set_max_price(99_999.0);
        assert_eq!(constraints.price_range(), extremes());
        assert!(!constraints.is_price_narrowed());

        constraints.set_price_range(f64::NAN, 800.0);
        assert_eq!(constraints.price_range(), PriceRange { min: 149.0, max: 800.0 });
    }

    #[test]
    fn test_clamp_invariant_holds_for_any_sequence() {
        let mut constraints = FilterConstraints::new(extremes());
        let inputs = [
            -50.0, 3000.0, 700.0, 150.0, 1699.0, 149.0, 1000.0, 999.0, 0.0, f64::INFINITY,
        ];
        for (i, a) in inputs.iter().enumerate() {
            for b in inputs.iter().skip(i) {
                constraints.set_min_price(*a);
                let range = constraints.price_range();
                assert!(range.min <= range.max);

                constraints.set_max_price(*b);
                let range = constraints.price_range();
                assert!(range.min <= range.max);

                constraints.set_price_range(*b, *a);
                let range = constraints.price_range();
                assert!(range.min <= range.max);
                assert!(range.min >= 149.0 && range.max <= 1699.0);
            }
        }
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let mut constraints = FilterConstraints::new(extremes());
        assert!(constraints.toggle_color("Black"));
        assert!(constraints.is_selected(FacetDimension::Color, "Black"));
        assert!(!constraints.toggle_color("Black"));
        assert!(constraints.selected_colors().is_empty());
    }

    #[test]
    fn test_reset_restores_everything_at_once() {
        let mut constraints = FilterConstraints::new(extremes());
        constraints.toggle_color("Red");
        constraints.toggle_size("9");
        constraints.toggle_brand("Summit");
        constraints.set_price_range(300.0, 900.0);
        assert_eq!(constraints.active_filter_count(), 4);

        constraints.reset();
        assert!(constraints.is_pristine());
        assert_eq!(constraints, reset_constraints(extremes()));
    }
}
