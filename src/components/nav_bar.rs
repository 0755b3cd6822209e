//! Top navigation bar with cart badge and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::cart::CartState;

/// Site-wide navigation: catalog link, cart badge, admin links for staff,
/// and sign-in/sign-out controls.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let navigate = use_navigate();

    let cart_count = move || cart.with(|state| state.len());
    let user_name = move || auth.get().user.map(|user| user.name);
    let is_staff = move || auth.with(|state| state.is_staff());

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.set(AuthState {
                user: None,
                loading: false,
            });
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Coursemart"
            </a>
            <div class="nav-bar__links">
                <a href="/">"Catalog"</a>
                <Show when=is_staff>
                    <a href="/admin/categories">"Categories"</a>
                    <a href="/admin/subcategories">"Sub-categories"</a>
                    <a href="/admin/courses/new">"New course"</a>
                </Show>
            </div>
            <div class="nav-bar__session">
                <a class="nav-bar__cart" href="/cart">
                    "Cart"
                    <Show when=move || { cart_count() > 0 }>
                        <span class="nav-bar__cart-badge">{cart_count}</span>
                    </Show>
                </a>
                {move || match user_name() {
                    Some(name) => {
                        view! {
                            <a class="nav-bar__profile" href="/profile">
                                {name}
                            </a>
                            <button class="btn btn--small" on:click=on_logout.clone()>
                                "Sign out"
                            </button>
                        }
                            .into_any()
                    }
                    None => view! { <a class="nav-bar__login" href="/login">"Sign in"</a> }.into_any(),
                }}
            </div>
        </nav>
    }
}
