use crate::layout::global_context::use_storefront;
use crate::shared::components::breadcrumbs::{Breadcrumbs, Crumb};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::seo::Seo;
use contracts::domain::a002_product::Product;
use contracts::shared::format::format_inr;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

pub fn subtotal(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::total).sum()
}

// No cart storage yet; the page always renders the empty state.
fn cart_lines() -> Vec<CartLine> {
    Vec::new()
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="cart-empty">
            <div class="cart-empty__icon">{icon("shopping-cart")}</div>
            <h2>"Your cart is empty"</h2>
            <p>"Looks like you haven't added any items to your cart yet. Start shopping to add products!"</p>
            <a class="btn btn--primary" href="/trekking-gear/footwear">"Continue Shopping"</a>
        </div>
    }
}

#[component]
fn CartContents(lines: Vec<CartLine>) -> impl IntoView {
    let total = format_inr(subtotal(&lines));
    let count = lines.len();

    view! {
        <div class="cart">
            <div class="cart__items">
                <h2>{format!("Cart Items ({})", count)}</h2>
                {lines
                    .into_iter()
                    .map(|line| view! {
                        <div class="cart-line">
                            <img src=line.product.image.clone() alt=line.product.name.clone() />
                            <div class="cart-line__info">
                                <h3>{line.product.name.clone()}</h3>
                                <span>{format_inr(line.product.price)}</span>
                                <span class="cart-line__qty">{line.quantity}</span>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <aside class="cart__summary">
                <h2>"Order Summary"</h2>
                <div class="cart__row"><span>"Subtotal"</span><span>{total.clone()}</span></div>
                <div class="cart__row"><span>"Shipping"</span><span>"Free"</span></div>
                <div class="cart__row cart__row--total"><span>"Total"</span><span>{total}</span></div>
                <Button appearance=ButtonAppearance::Primary disabled=true>
                    "Proceed to Checkout"
                </Button>
                <a href="/trekking-gear/footwear">"Continue Shopping"</a>
            </aside>
        </div>
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_storefront();
    let site_name = ctx.storefront.with_value(|s| s.config.site.name.clone());
    let lines = cart_lines();

    view! {
        <PageFrame page_id="cart">
            <Seo
                title=format!("Shopping Cart | {}", site_name)
                description="Your shopping cart - Review your items before checkout"
                keywords="shopping cart, checkout, adventure gear"
                path="/cart"
            />
            <section class="page-header">
                <Breadcrumbs trail=vec![Crumb::link("Home", "/"), Crumb::current("Shopping Cart")] />
                <h1>"Shopping Cart"</h1>
            </section>
            {if lines.is_empty() {
                view! { <EmptyCart /> }.into_any()
            } else {
                view! { <CartContents lines=lines /> }.into_any()
            }}
        </PageFrame>
    }
}
