use serde::{Deserialize, Serialize};

/// Product category shown on the home page and under `/{slug}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl Category {
    /// Route of the category page
    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }
}
