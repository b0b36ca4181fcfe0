use super::state::{create_state, FootwearFilters};
use crate::layout::global_context::use_storefront;
use crate::shared::components::breadcrumbs::{Breadcrumbs, Crumb};
use crate::shared::components::filter_panel::{FilterOption, FilterPanel, FilterSection, FilterTag};
use crate::shared::components::product_card::ProductCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::seo::Seo;
use contracts::enums::facet_dimension::FacetDimension;
use contracts::shared::format::format_inr;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

fn facet_section_id(dimension: FacetDimension) -> String {
    format!("filter-{}", dimension.code())
}

#[component]
fn FacetSection(state: FootwearFilters, dimension: FacetDimension) -> impl IntoView {
    let values = state.options.with_value(|o| o.values(dimension).to_vec());

    view! {
        <FilterSection
            title=dimension.display_name()
            is_open=state.sections.for_dimension(dimension)
            content_id=facet_section_id(dimension)
        >
            {values
                .iter()
                .map(|value| {
                    let checked_value = value.clone();
                    let toggled_value = value.clone();
                    view! {
                        <FilterOption
                            label=value.clone()
                            checked=Signal::derive(move || state.is_selected(dimension, &checked_value))
                            on_toggle=Callback::new(move |_| state.toggle(dimension, &toggled_value))
                        />
                    }
                })
                .collect_view()}
        </FilterSection>
    }
}

#[component]
fn PriceSection(state: FootwearFilters) -> impl IntoView {
    let extremes = state.extremes();

    view! {
        <div class="filter-section">
            <h3 class="filter-section__title">"Price Range"</h3>
            <div class="price-range__labels">
                <span>{move || format_inr(state.price_range().min)}</span>
                <span>{move || format_inr(state.price_range().max)}</span>
            </div>
            <input
                type="range"
                class="price-range__slider"
                min=extremes.min.to_string()
                max=extremes.max.to_string()
                prop:value=move || state.price_range().max.to_string()
                on:input=move |ev| state.set_max_from_input(&event_target_value(&ev))
            />
            <div class="price-range__inputs">
                <input
                    type="number"
                    aria-label="Minimum price"
                    min=extremes.min.to_string()
                    max=extremes.max.to_string()
                    prop:value=move || state.price_range().min.to_string()
                    on:change=move |ev| state.set_min_from_input(&event_target_value(&ev))
                />
                <input
                    type="number"
                    aria-label="Maximum price"
                    min=extremes.min.to_string()
                    max=extremes.max.to_string()
                    prop:value=move || state.price_range().max.to_string()
                    on:change=move |ev| state.set_max_from_input(&event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[component]
pub fn FootwearPage() -> impl IntoView {
    let ctx = use_storefront();
    let (products, extremes, site_name) = ctx.storefront.with_value(|s| {
        (
            s.footwear().to_vec(),
            s.config.footwear.price_extremes(),
            s.config.site.name.clone(),
        )
    });
    let state = create_state(products, extremes);

    let on_clear = Callback::new(move |_| state.reset_constraints());

    let tags = move || {
        state
            .selected_tags()
            .into_iter()
            .map(|(dimension, value)| {
                let label = format!("{}: {}", dimension.display_name(), value);
                view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| state.toggle(dimension, &value))
                    />
                }
            })
            .collect_view()
    };

    let result_label = move || match state.visible.with(|v| v.len()) {
        1 => "1 product".to_string(),
        n => format!("{} products", n),
    };

    view! {
        <PageFrame page_id="footwear">
            <Seo
                title=format!("Footwear | {}", site_name)
                description="Premium trekking shoes, hiking boots, and outdoor footwear"
                keywords="trekking shoes, hiking boots, outdoor footwear, adventure shoes"
                path="/trekking-gear/footwear"
            />

            <section class="page-header">
                <Breadcrumbs trail=vec![
                    Crumb::link("Home", "/"),
                    Crumb::link("Trekking Gear", "/trekking-gear"),
                    Crumb::current("Footwear"),
                ] />
                <h1>"Footwear"</h1>
            </section>

            <section class="listing">
                <FilterPanel
                    is_expanded=state.panel_expanded
                    active_filters_count=state.active_count
                    on_clear=on_clear
                    filter_tags=tags
                >
                    <PriceSection state=state />
                    <FacetSection state=state dimension=FacetDimension::Color />
                    <FacetSection state=state dimension=FacetDimension::Size />
                    <FacetSection state=state dimension=FacetDimension::Brand />
                    <FilterSection title="Quantity" is_open=state.sections.quantity>
                        <p class="filter-section__placeholder">"Quantity filter coming soon"</p>
                    </FilterSection>
                </FilterPanel>

                <div class="listing__results">
                    <div class="listing__toolbar">
                        <span class="listing__count">{result_label}</span>
                    </div>
                    {move || {
                        let products = state.visible.get();
                        if products.is_empty() {
                            view! {
                                <div class="listing__empty">
                                    <p>"No products match your filters."</p>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| state.reset_constraints()
                                    >
                                        "Clear filters"
                                    </Button>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="product-grid">
                                    {products
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product=product /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </section>
        </PageFrame>
    }
}
