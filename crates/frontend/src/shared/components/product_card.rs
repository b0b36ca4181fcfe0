use crate::shared::icons::icon;
use contracts::domain::a002_product::Product;
use contracts::shared::format::{format_discount, format_inr};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// How long the "Adding..." label stays after a click
const ADDING_FEEDBACK_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StarFill {
    Full,
    Half,
    Empty,
}

/// Five stars for `rating`: whole points are full, a fractional rest is half
fn star_fills(rating: f32) -> [StarFill; 5] {
    let mut fills = [StarFill::Empty; 5];
    for (i, fill) in fills.iter_mut().enumerate() {
        let position = i as f32;
        *fill = if position < rating.floor() {
            StarFill::Full
        } else if position < rating {
            StarFill::Half
        } else {
            StarFill::Empty
        };
    }
    fills
}

#[component]
fn Stars(rating: f32) -> impl IntoView {
    view! {
        <div class="product-card__stars">
            {star_fills(rating)
                .into_iter()
                .map(|fill| {
                    let class = match fill {
                        StarFill::Full => "star star--full",
                        StarFill::Half => "star star--half",
                        StarFill::Empty => "star",
                    };
                    view! { <span class=class>{icon("star")}</span> }
                })
                .collect_view()}
            <span class="product-card__rating">{format!("{:.1}", rating)}</span>
        </div>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let is_adding = RwSignal::new(false);
    let in_stock = product.in_stock;
    let product_id = product.id.to_string();

    // Carts are not wired up yet; the button only plays its feedback.
    let on_add = move |_| {
        if !in_stock || is_adding.get_untracked() {
            return;
        }
        leptos::logging::log!("add to cart: {}", product_id);
        is_adding.set(true);
        Timeout::new(ADDING_FEEDBACK_MS, move || is_adding.set(false)).forget();
    };

    let button_label = move || {
        if is_adding.get() {
            "Adding..."
        } else if in_stock {
            "Add to Cart"
        } else {
            "Unavailable"
        }
    };

    view! {
        <article class="product-card" data-product-id=product.id.to_string()>
            <div class="product-card__media">
                <img src=product.image.clone() alt=product.name.clone() loading="lazy" />
                {product.discount_percent().map(|pct| view! {
                    <div class="product-card__discount">{format_discount(pct)}</div>
                })}
                {(!in_stock).then(|| view! {
                    <div class="product-card__sold-out"><span>"Out of Stock"</span></div>
                })}
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <Stars rating=product.rating />
                {product.reviews.map(|n| view! {
                    <p class="product-card__reviews">{format!("{} reviews", n)}</p>
                })}
                <div class="product-card__footer">
                    <div class="product-card__prices">
                        <span class="product-card__price">{format_inr(product.price)}</span>
                        {product.original_price.map(|p| view! {
                            <span class="product-card__original-price">{format_inr(p)}</span>
                        })}
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=!in_stock
                        on_click=on_add
                    >
                        {icon("shopping-cart")}
                        {button_label}
                    </Button>
                </div>
            </div>
        </article>
    }
}
