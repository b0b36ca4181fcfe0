use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - sidebar wrapper for the listing filters
///
/// On small screens the body is hidden behind a "Filter by" toggle; on wide
/// screens it is always shown (CSS keeps `filter-panel__body` visible).
#[component]
pub fn FilterPanel(
    /// Whether the panel body is shown on small screens
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Restores every filter to its initial value
    on_clear: Callback<()>,

    /// Filter sections
    children: ChildrenFn,

    /// Active filter chips - optional
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <aside class="filter-panel">
            <button type="button" class="filter-panel__mobile-toggle" on:click=toggle_expanded>
                {icon("filter")}
                <span>"Filter by"</span>
                <span
                    class="filter-panel__chevron"
                    class:filter-panel__chevron--expanded=move || is_expanded.get()
                >
                    {icon("chevron-down")}
                </span>
            </button>

            <div
                class="filter-panel__body"
                class:filter-panel__body--expanded=move || is_expanded.get()
            >
                <div class="filter-panel-header">
                    <h2 class="filter-panel__title">"Filter by"</h2>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                                <button
                                    type="button"
                                    class="filter-panel__clear"
                                    on:click=move |_| on_clear.run(())
                                >
                                    "Clear All"
                                </button>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                {filter_tags.as_ref().map(|tags| view! {
                    <div class="filter-panel__tags">{tags.run()}</div>
                })}
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </aside>
    }
}

/// Collapsible titled block inside the panel
#[component]
pub fn FilterSection(
    #[prop(into)] title: String,
    is_open: RwSignal<bool>,
    /// DOM id of the collapsible content, referenced by the header's `aria-controls`
    #[prop(optional, into)]
    content_id: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let controls = content_id.clone();
    view! {
        <div class="filter-section">
            <button
                type="button"
                class="filter-section__header"
                aria-controls=controls
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                <h3 class="filter-section__title">{title}</h3>
                <span
                    class="filter-panel__chevron"
                    class:filter-panel__chevron--expanded=move || is_open.get()
                >
                    {icon("chevron-down")}
                </span>
            </button>
            <Show when=move || is_open.get()>
                <div class="filter-section__content" id=content_id.clone()>{children()}</div>
            </Show>
        </div>
    }
}

/// Labelled checkbox bound to one facet value
#[component]
pub fn FilterOption(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="filter-option">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
            <span>{label}</span>
        </label>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <svg
                width="12"
                height="12"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        </div>
    }
}
