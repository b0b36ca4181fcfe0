//! PageFrame: standard root wrapper for every routed page.
//!
//! Sets `id="{page}--page"` on the root element so pages are easy to find in
//! the DOM inspector.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="cart">
//!         <section class="page-hero">...</section>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// Short page name, e.g. `"footwear"`
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div id=format!("{page_id}--page") class=full_class data-page=page_id>
            {children()}
        </div>
    }
}
