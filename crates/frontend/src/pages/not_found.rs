use crate::shared::page_frame::PageFrame;
use leptos::prelude::*;

/// Shared body for unknown routes and unknown category slugs
#[component]
pub fn NotFoundMessage(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>{title}</h1>
            <p>{message}</p>
            <a class="btn btn--primary" href="/">"Return Home"</a>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not-found">
            <NotFoundMessage
                title="Page Not Found"
                message="The page you're looking for doesn't exist."
            />
        </PageFrame>
    }
}
