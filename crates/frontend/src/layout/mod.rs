pub mod footer;
pub mod global_context;
pub mod header;

use crate::shared::viewport;
use leptos::prelude::*;

/// Storefront shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (logo, mega-menu bar, cart)      |
/// +------------------------------------------+
/// |  page content                            |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = global_context::use_storefront();

    // The shell owns the desktop/mobile decision; menus only receive the flag.
    let breakpoint = ctx.storefront.with_value(|s| s.config.menu.mobile_breakpoint);
    viewport::track_mobile_mode(ctx.is_mobile, breakpoint);

    view! {
        <div class="site-layout">
            <header::Header />
            <main class="site-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
