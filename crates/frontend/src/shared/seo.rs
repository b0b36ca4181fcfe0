//! Document head writer for page-level SEO.
//!
//! Each page renders a [`Seo`] component; it rewrites the title, the
//! standard / Open Graph / Twitter meta tags and the canonical link whenever
//! it mounts. Missing tags are created, existing ones are updated in place.

use crate::layout::global_context::use_storefront;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub image: Option<String>,
    /// Absolute canonical URL
    pub url: String,
}

impl SeoMeta {
    /// Tags to write, in document order. Empty values are skipped.
    pub fn tags(&self) -> Vec<MetaTag> {
        let image = self.image.clone().unwrap_or_default();
        let entries = [
            (MetaAttr::Name, "description", self.description.clone()),
            (MetaAttr::Name, "keywords", self.keywords.clone()),
            (MetaAttr::Name, "author", self.author.clone()),
            (MetaAttr::Property, "og:title", self.title.clone()),
            (MetaAttr::Property, "og:description", self.description.clone()),
            (MetaAttr::Property, "og:image", image.clone()),
            (MetaAttr::Property, "og:url", self.url.clone()),
            (MetaAttr::Property, "og:type", "website".to_string()),
            (MetaAttr::Name, "twitter:card", "summary_large_image".to_string()),
            (MetaAttr::Name, "twitter:title", self.title.clone()),
            (MetaAttr::Name, "twitter:description", self.description.clone()),
            (MetaAttr::Name, "twitter:image", image),
        ];
        entries
            .into_iter()
            .filter(|(_, _, content)| !content.is_empty())
            .map(|(attr, key, content)| MetaTag { attr, key, content })
            .collect()
    }
}

fn upsert(document: &web_sys::Document, head: &web_sys::HtmlHeadElement, tag: &MetaTag) {
    let selector = format!("meta[{}=\"{}\"]", tag.attr.as_str(), tag.key);
    let element = match document.query_selector(&selector) {
        Ok(Some(el)) => el,
        _ => {
            let Ok(el) = document.create_element("meta") else {
                return;
            };
            let _ = el.set_attribute(tag.attr.as_str(), tag.key);
            if head.append_child(&el).is_err() {
                return;
            }
            el
        }
    };
    let _ = element.set_attribute("content", &tag.content);
}

fn set_canonical(document: &web_sys::Document, head: &web_sys::HtmlHeadElement, url: &str) {
    let link = match document.query_selector("link[rel=\"canonical\"]") {
        Ok(Some(el)) => el,
        _ => {
            let Ok(el) = document.create_element("link") else {
                return;
            };
            let _ = el.set_attribute("rel", "canonical");
            if head.append_child(&el).is_err() {
                return;
            }
            el
        }
    };
    let _ = link.set_attribute("href", url);
}

/// Writes `meta` into the live document head
pub fn apply(meta: &SeoMeta) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(&meta.title);
    let Some(head) = document.head() else {
        log::warn!("seo: document has no <head>");
        return;
    };
    for tag in meta.tags() {
        upsert(&document, &head, &tag);
    }
    if !meta.url.is_empty() {
        set_canonical(&document, &head, &meta.url);
    }
}

/// Page-level SEO. `title` falls back to the site default, `path` is appended
/// to the site URL for the canonical link.
#[component]
pub fn Seo(
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] description: String,
    #[prop(optional, into)] keywords: String,
    #[prop(optional, into)] image: Option<String>,
    #[prop(into)] path: String,
) -> impl IntoView {
    let ctx = use_storefront();
    let meta = ctx.storefront.with_value(|s| {
        let or_default = |value: String, default: &str| {
            if value.is_empty() {
                default.to_string()
            } else {
                value
            }
        };
        SeoMeta {
            title: or_default(title, &s.config.seo.title),
            description: or_default(description, &s.config.seo.description),
            keywords: or_default(keywords, &s.config.seo.keywords),
            author: s.config.site.name.clone(),
            image,
            url: format!("{}{}", s.config.site.url.trim_end_matches('/'), path),
        }
    });

    Effect::new(move |_| apply(&meta));
}
