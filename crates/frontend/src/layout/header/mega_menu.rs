//! DOM binding for the mega-menu bar.
//!
//! Every top-level entry with sub-items gets one `MenuController`; the bar
//! keeps them together in a `MenuBar`, which closes the other mobile menus
//! whenever one opens. The bar lives in an `Rc<RefCell<_>>` held by the
//! component's local store, so unmounting drops it and with it any pending
//! close timer and outside-click listener. Callbacks only keep a `Weak`.

use crate::layout::global_context::use_storefront;
use crate::shared::icons;
use contracts::domain::a003_nav_entry::NavEntry;
use contracts::shared::mega_menu::{
    CloseTicket, MenuBar, MenuController, MenuEvent, MenuHost, MenuMode, MenuSettings, MenuState,
    MenuZone,
};
use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type SharedBar = Rc<RefCell<MenuBar<DomMenuHost>>>;
type WeakBar = Weak<RefCell<MenuBar<DomMenuHost>>>;

/// Selector of the bar the panels hang from
const NAVBAR_SELECTOR: &str = "nav.site-nav";

fn mode_for(is_mobile: bool) -> MenuMode {
    if is_mobile {
        MenuMode::Mobile
    } else {
        MenuMode::Desktop
    }
}

/// Position of each entry's controller inside the bar; plain links get `None`
fn menu_indices(entries: &[NavEntry]) -> Vec<Option<usize>> {
    let mut next = 0;
    entries
        .iter()
        .map(|entry| {
            entry.has_dropdown().then(|| {
                next += 1;
                next - 1
            })
        })
        .collect()
}

/// Element refs and view signals of one dropdown
#[derive(Clone, Copy)]
pub struct MenuSlot {
    index: usize,
    trigger: NodeRef<html::Button>,
    panel: NodeRef<html::Div>,
    is_open: RwSignal<bool>,
    anchor_offset: RwSignal<f64>,
}

impl MenuSlot {
    fn new(index: usize, anchor_offset: f64) -> Self {
        Self {
            index,
            trigger: NodeRef::new(),
            panel: NodeRef::new(),
            is_open: RwSignal::new(false),
            anchor_offset: RwSignal::new(anchor_offset),
        }
    }
}

/// Detaches the document `mousedown` listener on drop.
pub struct OutsideListener {
    document: web_sys::Document,
    callback: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl Drop for OutsideListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousedown", self.callback.as_ref().unchecked_ref());
    }
}

pub struct DomMenuHost {
    bar: WeakBar,
    slug: String,
    slot: MenuSlot,
}

impl DomMenuHost {
    fn contains(&self, node: &web_sys::Node) -> bool {
        let in_trigger = self
            .slot
            .trigger
            .get_untracked()
            .is_some_and(|el| el.contains(Some(node)));
        let in_panel = self
            .slot
            .panel
            .get_untracked()
            .is_some_and(|el| el.contains(Some(node)));
        in_trigger || in_panel
    }
}

impl MenuHost for DomMenuHost {
    type Timer = Timeout;
    type Listener = Option<OutsideListener>;

    fn schedule_close(&mut self, ticket: CloseTicket, delay_ms: u32) -> Timeout {
        let bar = self.bar.clone();
        let index = self.slot.index;
        Timeout::new(delay_ms, move || {
            if let Some(bar) = bar.upgrade() {
                with_bar(&bar, |b| {
                    b.handle(index, MenuEvent::CloseTimerElapsed(ticket));
                });
            }
        })
    }

    fn attach_outside_listener(&mut self) -> Option<OutsideListener> {
        let document = web_sys::window().and_then(|w| w.document())?;
        let weak = self.bar.clone();
        let index = self.slot.index;
        let callback = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let Some(bar) = weak.upgrade() else {
                return;
            };
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| match bar.try_borrow() {
                    Ok(b) => b.menu(index).is_some_and(|m| m.host().contains(&node)),
                    Err(_) => true,
                });
            if !inside {
                with_bar(&bar, |b| {
                    b.handle(index, MenuEvent::PointerDownOutside);
                });
            }
        }) as Box<dyn FnMut(_)>);

        if let Err(e) = document
            .add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
        {
            log::warn!("mega menu {}: outside listener not attached: {:?}", self.slug, e);
            return None;
        }
        Some(OutsideListener { document, callback })
    }

    fn measure_anchor_offset(&self) -> Option<f64> {
        let navbar = web_sys::window()?
            .document()?
            .query_selector(NAVBAR_SELECTOR)
            .ok()??
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        let height = navbar.offset_height();
        (height > 0).then_some(height as f64)
    }

    fn state_changed(&mut self, state: MenuState) {
        self.slot.is_open.set(state.is_open());
    }
}

fn publish_offsets(bar: &MenuBar<DomMenuHost>) {
    for menu in (0..bar.len()).filter_map(|i| bar.menu(i)) {
        menu.host().slot.anchor_offset.set(menu.anchor_offset());
    }
}

fn with_bar(bar: &SharedBar, f: impl FnOnce(&mut MenuBar<DomMenuHost>)) {
    let Ok(mut b) = bar.try_borrow_mut() else {
        log::warn!("mega menu: re-entrant update skipped");
        return;
    };
    f(&mut b);
    publish_offsets(&b);
}

/// Copyable handle to the bar, used from view closures
#[derive(Clone, Copy)]
pub struct BarHandle {
    bar: StoredValue<SharedBar, LocalStorage>,
}

impl BarHandle {
    fn update(&self, f: impl FnOnce(&mut MenuBar<DomMenuHost>)) {
        self.bar.try_with_value(|bar| with_bar(bar, f));
    }

    fn send(&self, index: usize, event: MenuEvent) {
        self.update(|b| {
            b.handle(index, event);
        });
    }
}

/// Whether a pointer leaving one zone went straight into `other`
fn leaves_into(ev: &web_sys::MouseEvent, other: Option<web_sys::Node>) -> bool {
    let related = ev
        .related_target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    match (other, related) {
        (Some(other), Some(related)) => other.contains(Some(&related)),
        _ => false,
    }
}

#[component]
pub fn MegaMenuCategory(entry: NavEntry, slot: MenuSlot, bar: BarHandle) -> impl IntoView {
    let ctx = use_storefront();
    let MenuSlot {
        index,
        trigger: trigger_ref,
        panel: panel_ref,
        is_open,
        anchor_offset,
    } = slot;
    let send = move |event: MenuEvent| bar.send(index, event);

    let items = entry
        .items
        .iter()
        .map(|item| {
            let href = entry.item_href(item);
            view! {
                <li>
                    <a
                        class="mega-menu-link"
                        href=href
                        on:click=move |_| {
                            send(MenuEvent::ItemActivated);
                            ctx.nav_drawer_open.set(false);
                        }
                    >
                        {item.name.clone()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="mega-menu-category" class:mega-menu-category--open=move || is_open.get()>
            <button
                node_ref=trigger_ref
                class="mega-menu-btn"
                class:mega-menu-btn-active=move || is_open.get()
                aria-haspopup="true"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:mouseenter=move |_| send(MenuEvent::PointerEnter(MenuZone::Trigger))
                on:mouseleave=move |ev| {
                    let into_other = leaves_into(&ev, panel_ref.get_untracked().map(Into::into));
                    send(MenuEvent::PointerLeave { zone: MenuZone::Trigger, into_other });
                }
                on:click=move |_| send(MenuEvent::TriggerActivated)
            >
                <span>{entry.label.clone()}</span>
                <span class="mega-menu-chevron" class:mega-menu-chevron-open=move || is_open.get()>
                    {icons::icon("chevron-down")}
                </span>
            </button>

            <Show when=move || is_open.get() && ctx.is_mobile.get()>
                <div class="mega-menu-backdrop" on:click=move |_| send(MenuEvent::BackdropClicked)></div>
            </Show>

            <div
                node_ref=panel_ref
                class="mega-menu-panel"
                class:mega-menu-panel-open=move || is_open.get()
                style:top=move || format!("{}px", anchor_offset.get())
                on:mouseenter=move |_| send(MenuEvent::PointerEnter(MenuZone::Panel))
                on:mouseleave=move |ev| {
                    let into_other = leaves_into(&ev, trigger_ref.get_untracked().map(Into::into));
                    send(MenuEvent::PointerLeave { zone: MenuZone::Panel, into_other });
                }
            >
                <div class="mega-menu-content">
                    <h3 class="mega-menu-heading">{entry.label.clone()}</h3>
                    <ul class="mega-menu-list">{items}</ul>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn MegaMenuBar() -> impl IntoView {
    let ctx = use_storefront();
    let entries = ctx
        .storefront
        .with_value(|s| s.navigation.entries().to_vec());
    let settings = MenuSettings::from(&ctx.config().menu);
    let mode = mode_for(ctx.is_mobile.get_untracked());

    let slots: Vec<Option<MenuSlot>> = menu_indices(&entries)
        .into_iter()
        .map(|index| index.map(|i| MenuSlot::new(i, settings.default_anchor_offset)))
        .collect();

    let shared: SharedBar = Rc::new_cyclic(|weak: &WeakBar| {
        let menus = entries
            .iter()
            .zip(&slots)
            .filter_map(|(entry, slot)| {
                slot.map(|slot| {
                    let host = DomMenuHost {
                        bar: weak.clone(),
                        slug: entry.slug.clone(),
                        slot,
                    };
                    MenuController::new(host, mode, settings)
                })
            })
            .collect();
        RefCell::new(MenuBar::new(menus))
    });
    publish_offsets(&shared.borrow());
    let bar = BarHandle {
        bar: StoredValue::new_local(shared),
    };

    // The navbar is laid out once this view is mounted; measure again then.
    Effect::new(move |_| bar.update(|b| b.broadcast(MenuEvent::ViewportResized)));

    let resize = window_event_listener(ev::resize, move |_| {
        bar.update(|b| b.broadcast(MenuEvent::ViewportResized));
    });
    on_cleanup(move || resize.remove());

    Effect::new(move |_| {
        let mode = mode_for(ctx.is_mobile.get());
        bar.update(|b| b.set_mode(mode));
    });

    let pathname = use_location().pathname;
    Effect::new(move |_| {
        pathname.track();
        bar.update(|b| b.close_all());
    });

    view! {
        <div class="mega-menu-bar">
            {entries
                .into_iter()
                .zip(slots)
                .map(|(entry, slot)| match slot {
                    Some(slot) => {
                        // `slot` is reserved inside `view!`, so build the props directly.
                        let props = ::leptos::component::component_props_builder(&MegaMenuCategory)
                            .entry(entry)
                            .slot(slot)
                            .bar(bar)
                            .build();
                        ::leptos::component::component_view(&MegaMenuCategory, props).into_any()
                    }
                    None => {
                        let href = entry.href();
                        view! { <a class="site-nav__link" href=href>{entry.label}</a> }.into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_nav_entry::MenuItem;

    fn entry(slug: &str, items: usize) -> NavEntry {
        NavEntry {
            slug: slug.to_string(),
            label: slug.to_string(),
            items: (0..items)
                .map(|i| MenuItem {
                    id: format!("{slug}-{i}"),
                    name: format!("Item {i}"),
                    target: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_plain_links_get_no_menu() {
        let entries = vec![entry("trekking-gear", 3), entry("blog", 0), entry("camping", 2), entry("tours", 1)];
        assert_eq!(menu_indices(&entries), vec![Some(0), None, Some(1), Some(2)]);
        assert!(menu_indices(&[]).is_empty());
    }
}
