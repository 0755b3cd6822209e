//! Payment callback page.
//!
//! The payment provider redirects here after a hosted payment attempt.
//! The query string carries the order reference, but the outcome shown is
//! always re-read from the backend — redirect parameters are attacker
//! controlled and may describe a payment that never settled.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::PaymentStatus;
use crate::state::cart::CartState;
use crate::util::format::format_price_cents;

/// Payment result page: confirms the order status and clears the cart on
/// success.
#[component]
pub fn PaymentResultPage() -> impl IntoView {
    let query = use_query_map();
    let cart = expect_context::<RwSignal<CartState>>();

    let order_ref = move || query.read().get("ref").unwrap_or_default();

    let status = LocalResource::new(move || {
        let order_ref = order_ref();
        async move { crate::net::api::fetch_order_status(&order_ref).await }
    });

    // Empty the cart once the backend confirms payment. Pending or failed
    // outcomes keep the cart so the student can retry.
    Effect::new(move || {
        if let Some(Ok(order)) = status.get() {
            if order.status == PaymentStatus::Succeeded {
                cart.update(CartState::clear);
            }
        }
    });

    view! {
        <div class="payment-page">
            <Suspense fallback=move || view! { <p>"Confirming your payment…"</p> }>
                {move || {
                    status
                        .get()
                        .map(|result| match result {
                            Ok(order) => {
                                let amount = format_price_cents(order.amount_cents);
                                match order.status {
                                    PaymentStatus::Succeeded => {
                                        view! {
                                            <div class="payment-page__success">
                                                <h1>"Payment complete"</h1>
                                                <p>
                                                    {format!(
                                                        "Order {} was paid ({amount}). Your courses are ready.",
                                                        order.order_ref,
                                                    )}
                                                </p>
                                                <a class="btn btn--primary" href="/profile">
                                                    "Go to my courses"
                                                </a>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    PaymentStatus::Pending => {
                                        view! {
                                            <div class="payment-page__pending">
                                                <h1>"Payment pending"</h1>
                                                <p>
                                                    {format!(
                                                        "Order {} is still processing. Check again in a moment.",
                                                        order.order_ref,
                                                    )}
                                                </p>
                                                <button class="btn" on:click=move |_| status.refetch()>
                                                    "Check again"
                                                </button>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    PaymentStatus::Failed => {
                                        view! {
                                            <div class="payment-page__failed">
                                                <h1>"Payment failed"</h1>
                                                <p>"The payment did not go through. Your cart is unchanged."</p>
                                                <a class="btn btn--primary" href="/checkout">
                                                    "Try again"
                                                </a>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                            }
                            Err(err) => {
                                view! {
                                    <div class="payment-page__error">
                                        <p>{format!("Could not confirm the payment: {err}")}</p>
                                        <button class="btn" on:click=move |_| status.refetch()>
                                            "Retry"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
