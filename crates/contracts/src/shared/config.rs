use super::error::{Result, StorefrontError};
use super::filter::PriceRange;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    pub site: SiteConfig,
    pub seo: SeoDefaults,
    pub footwear: ListingConfig,
    pub menu: MenuConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub url: String,
    pub description: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SeoDefaults {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// Filterable listing backed by one product group of the catalog
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListingConfig {
    /// Key into the catalog's product groups
    pub products: String,
    pub price_min: f64,
    pub price_max: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    pub close_delay_ms: u32,
    /// Panel offset used until the navbar has been measured
    pub default_anchor_offset: f64,
    /// Viewports narrower than this (px) use tap-to-toggle menus
    pub mobile_breakpoint: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            seo: SeoDefaults::default(),
            footwear: ListingConfig::default(),
            menu: MenuConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Adventure India".to_string(),
            url: "https://addventureindia.com".to_string(),
            description: "Premium outdoor gear and equipment for adventurers across India."
                .to_string(),
            email: "info@addventureindia.com".to_string(),
            phone: "+91 123 456 7890".to_string(),
        }
    }
}

impl Default for SeoDefaults {
    fn default() -> Self {
        Self {
            title: "Adventure India - Premium Outdoor Gear & Equipment".to_string(),
            description: "Shop trekking shoes, hydration packs and camping gear.".to_string(),
            keywords: "outdoor gear, trekking, hiking, camping, adventure equipment".to_string(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            products: "footwear".to_string(),
            price_min: 149.0,
            price_max: 1699.0,
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: 150,
            default_anchor_offset: 80.0,
            mobile_breakpoint: 1024.0,
        }
    }
}

impl ListingConfig {
    pub fn price_extremes(&self) -> PriceRange {
        PriceRange::new(self.price_min, self.price_max)
    }
}

impl StorefrontConfig {
    /// Parses a TOML document; missing sections and keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: StorefrontConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let listing = &self.footwear;
        if !listing.price_min.is_finite() || !listing.price_max.is_finite() {
            return Err(StorefrontError::NonFinitePriceExtremes {
                listing: listing.products.clone(),
                min: listing.price_min,
                max: listing.price_max,
            });
        }
        if listing.price_min > listing.price_max {
            return Err(StorefrontError::InvertedPriceExtremes {
                listing: listing.products.clone(),
                min: listing.price_min,
                max: listing.price_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = StorefrontConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.footwear.price_extremes(), PriceRange::new(149.0, 1699.0));
        assert_eq!(config.menu.close_delay_ms, 150);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [menu]
            close_delay_ms = 250
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.menu.close_delay_ms, 250);
        assert_eq!(config.menu.default_anchor_offset, 80.0);
        assert_eq!(config.site.name, "Adventure India");
    }

    #[test]
    fn test_inverted_extremes_rejected() {
        let err = StorefrontConfig::from_toml_str(
            r#"
            [footwear]
            price_min = 2000.0
            price_max = 100.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, StorefrontError::InvertedPriceExtremes { .. }));
    }

    #[test]
    fn test_non_finite_extremes_rejected() {
        for doc in [
            "[footwear]\nprice_min = nan\n",
            "[footwear]\nprice_max = inf\n",
            "[footwear]\nprice_min = -inf\nprice_max = nan\n",
        ] {
            let err = StorefrontConfig::from_toml_str(doc).unwrap_err();
            assert!(
                matches!(err, StorefrontError::NonFinitePriceExtremes { .. }),
                "{doc:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = StorefrontConfig::from_toml_str("[menu\nclose_delay_ms = ").unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
    }
}
