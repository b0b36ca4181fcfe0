use crate::layout::global_context::use_storefront;
use crate::shared::components::product_card::ProductCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::seo::Seo;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_storefront();
    let (categories, featured, site_name) = ctx.storefront.with_value(|s| {
        (
            s.catalog.categories().to_vec(),
            s.catalog
                .featured_products()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>(),
            s.config.site.name.clone(),
        )
    });

    view! {
        <PageFrame page_id="home">
            <Seo path="/" />

            <section class="hero">
                <h1>"Gear Up for Your Next Adventure"</h1>
                <p>
                    "Premium outdoor gear and equipment trusted by adventurers across India. "
                    "From mountain peaks to desert trails, we've got you covered."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--light" href="/footwear">"Shop Footwear"</a>
                    <a class="btn btn--outline" href="/hydration">"Explore Gear"</a>
                </div>
            </section>

            <section class="home-section" aria-labelledby="categories-heading">
                <h2 id="categories-heading">"Shop by Category"</h2>
                <p>"Discover our curated collection of premium outdoor gear"</p>
                <div class="category-grid">
                    {categories
                        .into_iter()
                        .map(|category| view! {
                            <a class="category-tile" href=category.href()>
                                <img src=category.image.clone() alt=category.name.clone() loading="lazy" />
                                <div class="category-tile__overlay">
                                    <h3>{category.name.clone()}</h3>
                                    <p>{category.description.clone()}</p>
                                    <span>"Shop Now →"</span>
                                </div>
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home-section" aria-labelledby="featured-heading">
                <h2 id="featured-heading">"Featured Products"</h2>
                <p>"Handpicked favorites from our collection"</p>
                <div class="product-grid">
                    {featured
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready for Your Next Adventure?"</h2>
                <p>{format!("Join thousands of adventurers who trust {} for their outdoor gear needs", site_name)}</p>
                <a class="btn btn--primary" href="/footwear">"Start Shopping"</a>
            </section>
        </PageFrame>
    }
}
