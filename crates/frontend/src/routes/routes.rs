use crate::layout::Shell;
use crate::pages::cart::CartPage;
use crate::pages::category::CategoryPage;
use crate::pages::footwear::FootwearPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/trekking-gear/footwear") view=FootwearPage />
                    <Route path=path!("/:slug") view=CategoryPage />
                </Routes>
            </Shell>
        </Router>
    }
}
