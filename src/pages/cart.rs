//! Shopping cart page.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::util::format::format_price_cents;

/// Cart page: line items with remove buttons, subtotal, checkout link.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let lines = move || cart.with(|state| state.lines().to_vec());
    let subtotal = move || format_price_cents(cart.with(CartState::subtotal_cents));
    let empty = move || cart.with(CartState::is_empty);

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>

            <Show
                when=move || !empty()
                fallback=move || {
                    view! {
                        <p class="cart-page__empty">
                            "Your cart is empty. " <a href="/">"Browse the catalog"</a>
                        </p>
                    }
                }
            >
                <ul class="cart-page__lines">
                    {move || {
                        lines()
                            .into_iter()
                            .map(|line| {
                                let remove_id = line.course_id.clone();
                                view! {
                                    <li class="cart-page__line">
                                        <a href=format!("/course/{}", line.course_id)>{line.title.clone()}</a>
                                        <span class="cart-page__price">
                                            {format_price_cents(line.price_cents)}
                                        </span>
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| {
                                                cart.update(|state| {
                                                    state.remove(&remove_id);
                                                });
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>

                <footer class="cart-page__summary">
                    <span class="cart-page__subtotal">{move || format!("Subtotal: {}", subtotal())}</span>
                    <a class="btn btn--primary" href="/checkout">
                        "Checkout"
                    </a>
                </footer>
            </Show>
        </div>
    }
}
