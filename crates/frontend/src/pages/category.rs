use super::not_found::NotFoundMessage;
use crate::layout::global_context::use_storefront;
use crate::shared::components::breadcrumbs::{Breadcrumbs, Crumb};
use crate::shared::components::product_card::ProductCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::seo::Seo;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_nav_entry::NavEntry;
use contracts::shared::catalog::Storefront;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

fn product_count_label(count: usize) -> String {
    match count {
        1 => "1 product".to_string(),
        n => format!("{} products", n),
    }
}

/// What a single-segment path resolves to
#[derive(Debug, Clone, PartialEq)]
enum SlugTarget {
    Category {
        category: Category,
        products: Vec<Product>,
        related: Vec<Category>,
    },
    /// Navigation entry with sub-items but no catalog category of its own
    Section(NavEntry),
    Missing,
}

fn resolve_slug(storefront: &Storefront, slug: &str) -> SlugTarget {
    if let Some(category) = storefront.catalog.find_category(slug) {
        return SlugTarget::Category {
            category: category.clone(),
            products: storefront.catalog.products_in(slug).to_vec(),
            related: storefront.catalog.related_categories(slug).cloned().collect(),
        };
    }
    match storefront.navigation.find(slug) {
        Some(entry) if entry.has_dropdown() => SlugTarget::Section(entry.clone()),
        _ => SlugTarget::Missing,
    }
}

#[component]
fn SectionView(entry: NavEntry) -> impl IntoView {
    let ctx = use_storefront();
    let site_name = ctx.storefront.with_value(|s| s.config.site.name.clone());

    view! {
        <Seo
            title=format!("{} | {}", entry.label, site_name)
            description=format!("Browse {} at {}.", entry.label, site_name)
            path=entry.href()
        />

        <section class="page-hero">
            <Breadcrumbs trail=vec![Crumb::link("Home", "/"), Crumb::current(entry.label.clone())] />
            <h1>{entry.label.clone()}</h1>
        </section>

        <section class="category-grid">
            {entry
                .items
                .iter()
                .map(|item| view! {
                    <a class="category-card" href=entry.item_href(item)>
                        <h3>{item.name.clone()}</h3>
                        <span>{format!("Shop {} →", item.name)}</span>
                    </a>
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn CategoryView(category: Category, products: Vec<Product>, related: Vec<Category>) -> impl IntoView {
    let ctx = use_storefront();
    let site_name = ctx.storefront.with_value(|s| s.config.site.name.clone());

    let listing = if products.is_empty() {
        view! {
            <div class="listing__empty">
                <p>"No products available in this category."</p>
                <a class="btn btn--primary" href="/">"Browse Other Categories"</a>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="listing__toolbar">
                <h2 id="products-heading">{format!("All {}", category.name)}</h2>
                <span class="listing__count">{product_count_label(products.len())}</span>
            </div>
            <div class="product-grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <Seo
            title=format!("{} | {}", category.name, site_name)
            description=category.description.clone()
            keywords=format!("{}, outdoor gear, adventure equipment", category.name)
            image=category.image.clone()
            path=category.href()
        />

        <section class="page-hero">
            <Breadcrumbs trail=vec![Crumb::link("Home", "/"), Crumb::current(category.name.clone())] />
            <h1>{category.name.clone()}</h1>
            <p>{category.description.clone()}</p>
        </section>

        <section class="listing" aria-labelledby="products-heading">{listing}</section>

        <section class="related" aria-labelledby="related-heading">
            <h2 id="related-heading">"Explore Other Categories"</h2>
            <div class="category-grid">
                {related
                    .into_iter()
                    .map(|other| view! {
                        <a class="category-card" href=other.href()>
                            <img src=other.image.clone() alt=other.name.clone() loading="lazy" />
                            <h3>{other.name.clone()}</h3>
                            <p>{other.description.clone()}</p>
                            <span>{format!("Shop {} →", other.name)}</span>
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let ctx = use_storefront();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());

    view! {
        <PageFrame page_id="category">
            {move || {
                let slug = slug.get();
                match ctx.storefront.with_value(|s| resolve_slug(s, &slug)) {
                    SlugTarget::Category { category, products, related } => {
                        view! { <CategoryView category=category products=products related=related /> }
                            .into_any()
                    }
                    SlugTarget::Section(entry) => view! { <SectionView entry=entry /> }.into_any(),
                    SlugTarget::Missing => {
                        log::debug!("unknown category slug: {}", slug);
                        view! {
                            <NotFoundMessage
                                title="Category Not Found"
                                message="The category you're looking for doesn't exist."
                            />
                        }
                        .into_any()
                    }
                }
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::global_context::StorefrontContext;

    #[test]
    fn test_product_count_label() {
        assert_eq!(product_count_label(0), "0 products");
        assert_eq!(product_count_label(1), "1 product");
        assert_eq!(product_count_label(12), "12 products");
    }

    #[test]
    fn test_resolve_slug() {
        let storefront = StorefrontContext::load_bundled();

        match resolve_slug(&storefront, "camping") {
            SlugTarget::Category { category, related, .. } => {
                assert_eq!(category.slug, "camping");
                assert!(related.iter().all(|c| c.slug != "camping"));
            }
            other => panic!("expected the camping category, got {other:?}"),
        }

        match resolve_slug(&storefront, "trekking-gear") {
            SlugTarget::Section(entry) => {
                assert_eq!(entry.label, "Trekking Gear");
                assert_eq!(entry.item_href(&entry.items[0]), "/trekking-gear/footwear");
            }
            other => panic!("expected the trekking gear section, got {other:?}"),
        }

        assert_eq!(resolve_slug(&storefront, "blog"), SlugTarget::Missing);
        assert_eq!(resolve_slug(&storefront, "volcanoes"), SlugTarget::Missing);
    }
}
