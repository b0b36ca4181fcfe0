use thiserror::Error;

/// Failures while loading the bundled configuration and catalog
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("invalid storefront config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid catalog data: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("price extremes are inverted for listing '{listing}': {min} > {max}")]
    InvertedPriceExtremes { listing: String, min: f64, max: f64 },

    #[error("price extremes must be finite for listing '{listing}': {min}..{max}")]
    NonFinitePriceExtremes { listing: String, min: f64, max: f64 },

    #[error("duplicate category slug '{0}'")]
    DuplicateCategory(String),

    #[error("product '{0}' has a non-positive price")]
    NonPositivePrice(String),

    #[error("featured product '{0}' is not in the catalog")]
    UnknownFeaturedProduct(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
