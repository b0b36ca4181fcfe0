use contracts::shared::catalog::Storefront;
use contracts::shared::config::StorefrontConfig;
use leptos::prelude::*;

const BUNDLED_CONFIG: &str = include_str!("../../data/storefront.toml");
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub storefront: StoredValue<Storefront>,
    /// Set by the shell from the viewport width
    pub is_mobile: RwSignal<bool>,
    /// Collapsed navigation drawer on small screens
    pub nav_drawer_open: RwSignal<bool>,
}

impl StorefrontContext {
    pub fn new(storefront: Storefront) -> Self {
        Self {
            storefront: StoredValue::new(storefront),
            is_mobile: RwSignal::new(false),
            nav_drawer_open: RwSignal::new(false),
        }
    }

    /// Parses the data compiled into the bundle.
    ///
    /// A broken bundle is logged and replaced by the default config with an
    /// empty catalog so the shell still renders.
    pub fn load_bundled() -> Storefront {
        match Storefront::load(BUNDLED_CONFIG, BUNDLED_CATALOG) {
            Ok(storefront) => storefront,
            Err(e) => {
                log::error!("failed to load bundled storefront data: {}", e);
                Storefront::default()
            }
        }
    }

    pub fn config(&self) -> StorefrontConfig {
        self.storefront.with_value(|s| s.config.clone())
    }
}

pub fn use_storefront() -> StorefrontContext {
    leptos::context::use_context::<StorefrontContext>().expect("StorefrontContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filter::FacetOptions;

    #[test]
    fn test_bundled_data_loads() {
        let storefront =
            Storefront::load(BUNDLED_CONFIG, BUNDLED_CATALOG).expect("bundled data is valid");
        assert_eq!(storefront.config.footwear.price_min, 149.0);
        assert_eq!(storefront.config.footwear.price_max, 1699.0);
        assert_eq!(storefront.catalog.featured_products().len(), 4);
        assert!(storefront.navigation.find("blog").is_some_and(|e| !e.has_dropdown()));
    }

    #[test]
    fn test_bundled_footwear_fits_price_extremes() {
        let storefront =
            Storefront::load(BUNDLED_CONFIG, BUNDLED_CATALOG).expect("bundled data is valid");
        let extremes = storefront.config.footwear.price_extremes();
        assert!(!storefront.footwear().is_empty());
        assert!(storefront.footwear().iter().all(|p| extremes.contains(p.price)));

        let options = FacetOptions::from_catalog(storefront.footwear());
        assert!(options.colors.contains(&"Black".to_string()));
        assert_eq!(options.brands, vec!["Ridgeline", "Riverbed", "Summit", "Trailhead"]);
    }
}
