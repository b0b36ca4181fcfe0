use serde::Deserialize;

/// Link inside a mega-menu panel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Explicit route; `None` means `/{entry slug}/{id}`
    #[serde(default)]
    pub target: Option<String>,
}

/// Top-level navigation entry. Entries without items render as plain links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavEntry {
    pub slug: String,
    pub label: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl NavEntry {
    pub fn has_dropdown(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }

    pub fn item_href(&self, item: &MenuItem) -> String {
        match item.target.as_deref() {
            Some(target) if !target.is_empty() => target.to_string(),
            _ => format!("/{}/{}", self.slug, item.id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct NavigationTree {
    entries: Vec<NavEntry>,
}

impl NavigationTree {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// `None` for an unknown slug; callers render their fallback
    pub fn find(&self, slug: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gear() -> NavEntry {
        NavEntry {
            slug: "trekking-gear".into(),
            label: "Trekking Gear".into(),
            items: vec![
                MenuItem {
                    id: "footwear".into(),
                    name: "Footwear".into(),
                    target: Some("/trekking-gear/footwear".into()),
                },
                MenuItem {
                    id: "tents".into(),
                    name: "Tents".into(),
                    target: None,
                },
            ],
        }
    }

    #[test]
    fn test_item_href_falls_back_to_slug_path() {
        let entry = gear();
        assert_eq!(entry.item_href(&entry.items[0]), "/trekking-gear/footwear");
        assert_eq!(entry.item_href(&entry.items[1]), "/trekking-gear/tents");
    }

    #[test]
    fn test_find_unknown_slug() {
        let tree = NavigationTree::new(vec![gear()]);
        assert!(tree.find("trekking-gear").is_some_and(NavEntry::has_dropdown));
        assert!(tree.find("tours").is_none());
    }
}
