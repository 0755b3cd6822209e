//! Checkout page — billing form, validation, payment redirect.
//!
//! ERROR HANDLING
//! ==============
//! Field checks run client-side before any request is sent and render
//! inline next to the offending field. A failed checkout request leaves
//! the cart untouched and shows a dismissible banner.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::CheckoutRequest;
use crate::state::cart::CartState;
use crate::state::checkout::CheckoutForm;
use crate::state::form::{FieldError, message_for};
use crate::util::format::format_price_cents;

/// Checkout page: billing details and order submission.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(CheckoutForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let banner = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        errors.with(move |errs| message_for(errs, field).map(str::to_owned))
    };

    let on_submit = move |_| {
        let current = form.get_untracked();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        banner.set(None);

        let request = CheckoutRequest {
            course_ids: cart.with_untracked(CartState::course_ids),
            billing: current.billing_details(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::post_checkout(&request).await {
                Ok(receipt) => {
                    match receipt.redirect_url {
                        // Hosted payment page: leave the app; the provider
                        // sends the user back to /payment/result.
                        Some(url) => {
                            #[cfg(feature = "hydrate")]
                            {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().assign(&url);
                                }
                            }
                            #[cfg(not(feature = "hydrate"))]
                            {
                                let _ = url;
                            }
                        }
                        None => {
                            navigate(
                                &format!("/payment/result?ref={}", receipt.order_ref),
                                NavigateOptions::default(),
                            );
                        }
                    }
                }
                Err(err) => {
                    submitting.set(false);
                    banner.set(Some(format!("Checkout failed: {err}")));
                }
            }
        });
    };

    let subtotal = move || format_price_cents(cart.with(CartState::subtotal_cents));

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>

            <Show when=move || banner.get().is_some()>
                <ErrorBanner
                    message=Signal::derive(move || banner.get().unwrap_or_default())
                    on_dismiss=Callback::new(move |()| banner.set(None))
                />
            </Show>

            <Show
                when=move || !cart.with(CartState::is_empty)
                fallback=move || view! { <p>"Nothing to pay for — your cart is empty."</p> }
            >
                <form class="checkout-form" on:submit=move |ev| ev.prevent_default()>
                    <label class="checkout-form__field">
                        "Full name"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.full_name.clone())
                            on:input=move |ev| {
                                form.update(|f| f.full_name = event_target_value(&ev));
                            }
                        />
                        {move || {
                            field_error("full_name")
                                .map(|msg| view! { <span class="checkout-form__error">{msg}</span> })
                        }}
                    </label>

                    <label class="checkout-form__field">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                form.update(|f| f.email = event_target_value(&ev));
                            }
                        />
                        {move || {
                            field_error("email")
                                .map(|msg| view! { <span class="checkout-form__error">{msg}</span> })
                        }}
                    </label>

                    <label class="checkout-form__field">
                        "Country"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.country.clone())
                            on:input=move |ev| {
                                form.update(|f| f.country = event_target_value(&ev));
                            }
                        />
                        {move || {
                            field_error("country")
                                .map(|msg| view! { <span class="checkout-form__error">{msg}</span> })
                        }}
                    </label>

                    <footer class="checkout-form__footer">
                        <span class="checkout-form__total">{move || format!("Total: {}", subtotal())}</span>
                        <button
                            class="btn btn--primary"
                            disabled=move || submitting.get()
                            on:click=on_submit.clone()
                        >
                            {move || if submitting.get() { "Submitting…" } else { "Pay now" }}
                        </button>
                    </footer>
                </form>
            </Show>
        </div>
    }
}
