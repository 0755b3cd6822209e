//! Dismissible inline error banner.
//!
//! Persist failures are surfaced near the point of action rather than as
//! a global toast, so the operator keeps the context of what failed.

use leptos::prelude::*;

/// Inline error banner with a dismiss button.
#[component]
pub fn ErrorBanner(message: Signal<String>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-banner__message">{move || message.get()}</span>
            <button class="error-banner__dismiss" on:click=move |_| on_dismiss.run(()) title="Dismiss">
                "×"
            </button>
        </div>
    }
}
