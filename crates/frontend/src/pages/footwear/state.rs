use contracts::domain::a002_product::Product;
use contracts::enums::facet_dimension::FacetDimension;
use contracts::shared::filter::{
    apply_filters, parse_price_input, reset_constraints, FacetOptions, FilterConstraints, PriceRange,
};
use leptos::prelude::*;

/// Open/closed state of the collapsible filter sections
#[derive(Clone, Copy)]
pub struct SectionToggles {
    pub color: RwSignal<bool>,
    pub size: RwSignal<bool>,
    pub brand: RwSignal<bool>,
    pub quantity: RwSignal<bool>,
}

impl SectionToggles {
    fn new() -> Self {
        Self {
            color: RwSignal::new(true),
            size: RwSignal::new(true),
            brand: RwSignal::new(true),
            quantity: RwSignal::new(false),
        }
    }

    pub fn for_dimension(&self, dimension: FacetDimension) -> RwSignal<bool> {
        match dimension {
            FacetDimension::Color => self.color,
            FacetDimension::Size => self.size,
            FacetDimension::Brand => self.brand,
        }
    }
}

/// Reactive filter state of the footwear listing.
///
/// Everything the engine needs sits in one `FilterConstraints` signal, so a
/// reset is a single write and `visible` never observes a half-applied change.
#[derive(Clone, Copy)]
pub struct FootwearFilters {
    pub constraints: RwSignal<FilterConstraints>,
    pub visible: Memo<Vec<Product>>,
    pub active_count: Memo<usize>,
    pub options: StoredValue<FacetOptions>,
    pub sections: SectionToggles,
    /// "Filter by" toggle on small screens
    pub panel_expanded: RwSignal<bool>,
}

pub fn create_state(products: Vec<Product>, extremes: PriceRange) -> FootwearFilters {
    let options = StoredValue::new(FacetOptions::from_catalog(&products));
    let catalog = StoredValue::new(products);
    let constraints = RwSignal::new(FilterConstraints::new(extremes));

    let visible = Memo::new(move |_| {
        constraints.with(|c| {
            catalog.with_value(|products| apply_filters(products, c).into_iter().cloned().collect())
        })
    });
    let active_count = Memo::new(move |_| constraints.with(|c| c.active_filter_count()));

    FootwearFilters {
        constraints,
        visible,
        active_count,
        options,
        sections: SectionToggles::new(),
        panel_expanded: RwSignal::new(false),
    }
}

impl FootwearFilters {
    pub fn toggle(&self, dimension: FacetDimension, value: &str) {
        self.constraints.update(|c| {
            c.toggle(dimension, value);
        });
    }

    pub fn toggle_color(&self, color: &str) {
        self.toggle(FacetDimension::Color, color);
    }

    pub fn toggle_size(&self, size: &str) {
        self.toggle(FacetDimension::Size, size);
    }

    pub fn toggle_brand(&self, brand: &str) {
        self.toggle(FacetDimension::Brand, brand);
    }

    pub fn is_selected(&self, dimension: FacetDimension, value: &str) -> bool {
        self.constraints.with(|c| c.is_selected(dimension, value))
    }

    /// Raw text from the "min" box; garbage keeps the lower extreme
    pub fn set_min_from_input(&self, raw: &str) {
        self.constraints.update(|c| {
            let value = parse_price_input(raw, c.extremes().min);
            c.set_min_price(value);
        });
    }

    /// Raw text from the "max" box or slider; garbage keeps the upper extreme
    pub fn set_max_from_input(&self, raw: &str) {
        self.constraints.update(|c| {
            let value = parse_price_input(raw, c.extremes().max);
            c.set_max_price(value);
        });
    }

    pub fn set_price_range(&self, min: f64, max: f64) {
        self.constraints.update(|c| c.set_price_range(min, max));
    }

    pub fn reset_constraints(&self) {
        let extremes = self.constraints.with_untracked(|c| c.extremes());
        self.constraints.set(reset_constraints(extremes));
    }

    pub fn price_range(&self) -> PriceRange {
        self.constraints.with(|c| c.price_range())
    }

    pub fn extremes(&self) -> PriceRange {
        self.constraints.with_untracked(|c| c.extremes())
    }

    /// `(dimension, value)` for every selected facet value, for the chip row
    pub fn selected_tags(&self) -> Vec<(FacetDimension, String)> {
        self.constraints.with(|c| {
            FacetDimension::all()
                .into_iter()
                .flat_map(|dim| c.selected(dim).iter().map(move |v| (dim, v.clone())))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::global_context::StorefrontContext;

    fn with_bundled_state(f: impl FnOnce(FootwearFilters)) {
        let owner = Owner::new();
        owner.with(|| {
            let storefront = StorefrontContext::load_bundled();
            let extremes = storefront.config.footwear.price_extremes();
            f(create_state(storefront.footwear().to_vec(), extremes));
        });
    }

    fn visible_ids(state: &FootwearFilters) -> Vec<String> {
        state
            .visible
            .get_untracked()
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        with_bundled_state(|state| {
            assert_eq!(state.visible.get_untracked().len(), 8);
            assert_eq!(state.active_count.get_untracked(), 0);
        });
    }

    #[test]
    fn test_facets_combine() {
        with_bundled_state(|state| {
            state.toggle_color("Grey");
            assert_eq!(visible_ids(&state), vec!["fw-001", "fw-004", "fw-005"]);

            state.toggle_brand("Summit");
            assert_eq!(visible_ids(&state), vec!["fw-005"]);
            assert_eq!(state.active_count.get_untracked(), 2);

            state.toggle_brand("Summit");
            assert_eq!(visible_ids(&state).len(), 3);
        });
    }

    #[test]
    fn test_price_inputs_are_clamped() {
        with_bundled_state(|state| {
            state.set_max_from_input("500");
            assert_eq!(visible_ids(&state), vec!["fw-003", "fw-004", "fw-007"]);

            state.set_min_from_input("not a number");
            assert_eq!(state.price_range(), PriceRange::new(149.0, 500.0));

            state.set_max_from_input("1699");
            state.set_min_from_input("2000");
            assert_eq!(state.price_range(), PriceRange::new(1699.0, 1699.0));
            assert_eq!(visible_ids(&state), vec!["fw-002"]);
        });
    }

    #[test]
    fn test_reset_restores_full_listing() {
        with_bundled_state(|state| {
            state.toggle_color("Black");
            state.toggle_size("11");
            state.set_price_range(300.0, 1000.0);
            assert!(state.visible.get_untracked().len() < 8);

            state.reset_constraints();
            assert_eq!(state.visible.get_untracked().len(), 8);
            assert_eq!(state.active_count.get_untracked(), 0);
            assert!(state.selected_tags().is_empty());
            assert_eq!(state.price_range(), state.extremes());
        });
    }
}
