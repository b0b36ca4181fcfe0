use crate::layout::global_context::StorefrontContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Catalog, navigation and config are injected once for the whole app.
    provide_context(StorefrontContext::new(StorefrontContext::load_bundled()));

    view! {
        <AppRoutes />
    }
}
