use crate::layout::global_context::use_storefront;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_storefront();
    let (site, categories) = ctx.storefront.with_value(|s| {
        (s.config.site.clone(), s.catalog.categories().to_vec())
    });
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="site-footer">
            <div class="site-footer__columns">
                <div class="site-footer__column">
                    <h4>{site.name.clone()}</h4>
                    <p>{site.description.clone()}</p>
                </div>
                <div class="site-footer__column">
                    <h4>"Shop"</h4>
                    <ul>
                        {categories
                            .into_iter()
                            .map(|c| {
                                let href = c.href();
                                view! { <li><a href=href>{c.name}</a></li> }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="site-footer__column">
                    <h4>"Contact"</h4>
                    <p><a href=format!("mailto:{}", site.email)>{site.email.clone()}</a></p>
                    <p>{site.phone.clone()}</p>
                </div>
            </div>
            <div class="site-footer__bottom">
                {format!("© {} {}. All rights reserved.", year, site.name)}
            </div>
        </footer>
    }
}
