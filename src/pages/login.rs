//! Login page with email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;

/// Login page — posts credentials to the backend session endpoint and
/// stores the returned user in the shared auth state.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let banner = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            banner.set(Some("Enter your email and password".to_owned()));
            return;
        }
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        banner.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(email_value.trim(), &password_value).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    pending.set(false);
                    let message = if err.is_unauthorized() {
                        "Email or password is incorrect".to_owned()
                    } else {
                        format!("Sign-in failed: {err}")
                    };
                    banner.set(Some(message));
                }
            }
        });
    });

    view! {
        <div class="login-page">
            <h1>"Coursemart"</h1>
            <p>"Online course marketplace"</p>

            <Show when=move || banner.get().is_some()>
                <ErrorBanner
                    message=Signal::derive(move || banner.get().unwrap_or_default())
                    on_dismiss=Callback::new(move |()| banner.set(None))
                />
            </Show>

            <form class="login-form" on:submit=move |ev| ev.prevent_default()>
                <label class="login-form__field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-form__field">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Signing in…" } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
