/// Filterable product dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetDimension {
    Color,
    Size,
    Brand,
}

impl FacetDimension {
    /// Stable key used in DOM ids
    pub fn code(&self) -> &'static str {
        match self {
            FacetDimension::Color => "color",
            FacetDimension::Size => "size",
            FacetDimension::Brand => "brand",
        }
    }

    /// Section title in the filter sidebar
    pub fn display_name(&self) -> &'static str {
        match self {
            FacetDimension::Color => "Colour",
            FacetDimension::Size => "Size",
            FacetDimension::Brand => "Brand",
        }
    }

    /// Order in which the sidebar lists the facets
    pub fn all() -> Vec<FacetDimension> {
        vec![FacetDimension::Color, FacetDimension::Size, FacetDimension::Brand]
    }
}
