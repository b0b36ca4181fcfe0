use super::config::StorefrontConfig;
use super::error::{Result, StorefrontError};
use crate::domain::a001_category::Category;
use crate::domain::a002_product::{Product, ProductId};
use crate::domain::a003_nav_entry::NavigationTree;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Static product catalog: categories, product groups, featured picks
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    categories: Vec<Category>,
    /// Product groups keyed by category slug (or listing key such as "footwear")
    #[serde(default)]
    products: BTreeMap<String, Vec<Product>>,
    #[serde(default)]
    featured: Vec<ProductId>,
}

impl Catalog {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// `None` when no category has this slug
    pub fn find_category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Products of a group in catalog order; empty for an unknown key
    pub fn products_in(&self, key: &str) -> &[Product] {
        self.products.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.values().flatten().find(|p| &p.id == id)
    }

    /// Featured products in configured order
    pub fn featured_products(&self) -> Vec<&Product> {
        self.featured
            .iter()
            .filter_map(|id| self.find_product(id))
            .collect()
    }

    /// Categories other than `slug`, for the "explore other categories" strip
    pub fn related_categories<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a Category> {
        self.categories.iter().filter(move |c| c.slug != slug)
    }

    fn validate(&self) -> Result<()> {
        let mut slugs = HashSet::new();
        for category in &self.categories {
            if !slugs.insert(category.slug.as_str()) {
                return Err(StorefrontError::DuplicateCategory(category.slug.clone()));
            }
        }

        if let Some(product) = self.products.values().flatten().find(|p| !(p.price > 0.0)) {
            return Err(StorefrontError::NonPositivePrice(product.id.to_string()));
        }

        if let Some(id) = self.featured.iter().find(|id| self.find_product(id).is_none()) {
            return Err(StorefrontError::UnknownFeaturedProduct(id.to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(flatten)]
    catalog: Catalog,
    #[serde(default)]
    navigation: NavigationTree,
}

/// Everything the UI renders from: configuration, catalog and navigation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storefront {
    pub config: StorefrontConfig,
    pub catalog: Catalog,
    pub navigation: NavigationTree,
}

impl Storefront {
    /// Parses the bundled TOML config and JSON catalog
    pub fn load(config_toml: &str, catalog_json: &str) -> Result<Self> {
        let config = StorefrontConfig::from_toml_str(config_toml)?;
        let file: CatalogFile = serde_json::from_str(catalog_json)?;
        file.catalog.validate()?;

        log::debug!(
            "storefront loaded: {} categories, {} nav entries",
            file.catalog.categories.len(),
            file.navigation.entries().len()
        );

        Ok(Self {
            config,
            catalog: file.catalog,
            navigation: file.navigation,
        })
    }

    /// Products of the footwear listing
    pub fn footwear(&self) -> &[Product] {
        self.catalog.products_in(&self.config.footwear.products)
    }
}
