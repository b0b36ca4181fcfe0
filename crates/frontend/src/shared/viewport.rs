use leptos::ev;
use leptos::prelude::*;

/// Widths strictly below the breakpoint use the mobile layout
pub fn is_mobile_width(width: f64, breakpoint: f64) -> bool {
    width < breakpoint
}

fn inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Keeps `is_mobile` in sync with the window width until the owner is disposed.
pub fn track_mobile_mode(is_mobile: RwSignal<bool>, breakpoint: f64) {
    let update = move || {
        if let Some(width) = inner_width() {
            let mobile = is_mobile_width(width, breakpoint);
            if is_mobile.get_untracked() != mobile {
                log::debug!("viewport {}px: mobile={}", width, mobile);
                is_mobile.set(mobile);
            }
        }
    };
    update();

    let handle = window_event_listener(ev::resize, move |_| update());
    on_cleanup(move || handle.remove());
}
