use crate::layout::global_context::use_storefront;
use crate::layout::header::mega_menu::MegaMenuBar;
use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_storefront();
    let site_name = ctx.storefront.with_value(|s| s.config.site.name.clone());
    let pathname = use_location().pathname;

    // A navigation always collapses the drawer.
    Effect::new(move |_| {
        pathname.track();
        ctx.nav_drawer_open.set(false);
    });

    let is_active = move |href: &'static str| {
        move || {
            let path = pathname.get();
            if href == "/" {
                path == "/"
            } else {
                path.starts_with(href)
            }
        }
    };

    view! {
        <header data-zone="header" class="header">
            <nav class="site-nav">
                <a class="site-nav__logo" href="/">{site_name}</a>

                <button
                    class="site-nav__hamburger"
                    aria-label="Toggle navigation"
                    on:click=move |_| ctx.nav_drawer_open.update(|open| *open = !*open)
                >
                    {move || if ctx.nav_drawer_open.get() { icons::icon("x") } else { icons::icon("menu") }}
                </button>

                <div
                    class="site-nav__links"
                    class:site-nav__links--open=move || ctx.nav_drawer_open.get()
                >
                    <a class="site-nav__link" class:site-nav__link--active=is_active("/") href="/">
                        "Home"
                    </a>
                    <MegaMenuBar />
                </div>

                <a
                    class="site-nav__cart"
                    class:site-nav__link--active=is_active("/cart")
                    href="/cart"
                    aria-label="Cart"
                >
                    {icons::icon("shopping-cart")}
                </a>
            </nav>
        </header>
    }
}
