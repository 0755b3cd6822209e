//! Student profile page — view profile, edit display name.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;
use crate::util::format::format_date;

/// Profile page. Redirects to `/login` when no session exists.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login once the session check resolves with no user.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let user_id = move || auth.get().user.map(|user| user.id);

    let profile = LocalResource::new(move || {
        let user_id = user_id();
        async move {
            match user_id {
                Some(id) => crate::net::api::fetch_profile(&id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let name_draft = RwSignal::new(None::<String>);
    let banner = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save_name = move |_| {
        let Some(new_name) = name_draft.get_untracked() else {
            return;
        };
        let trimmed = new_name.trim().to_owned();
        let Some(id) = auth.with_untracked(|state| state.user.as_ref().map(|u| u.id.clone()))
        else {
            return;
        };
        if trimmed.is_empty() || saving.get_untracked() {
            return;
        }
        saving.set(true);
        banner.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&id, &trimmed).await {
                Ok(updated) => {
                    auth.update(|state| {
                        if let Some(user) = state.user.as_mut() {
                            user.name = updated.name.clone();
                        }
                    });
                    name_draft.set(None);
                    profile.refetch();
                }
                Err(err) => banner.set(Some(format!("Could not update your name: {err}"))),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>

            <Show when=move || banner.get().is_some()>
                <ErrorBanner
                    message=Signal::derive(move || banner.get().unwrap_or_default())
                    on_dismiss=Callback::new(move |()| banner.set(None))
                />
            </Show>

            <Suspense fallback=move || view! { <p>"Loading profile…"</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(Some(details)) => {
                                view! {
                                    <div class="profile-card">
                                        <div class="profile-card__row">
                                            <span class="profile-card__label">"Name"</span>
                                            {move || match name_draft.get() {
                                                Some(draft) => {
                                                    view! {
                                                        <span class="profile-card__edit">
                                                            <input
                                                                type="text"
                                                                prop:value=draft
                                                                on:input=move |ev| {
                                                                    name_draft.set(Some(event_target_value(&ev)));
                                                                }
                                                            />
                                                            <button
                                                                class="btn btn--small btn--primary"
                                                                disabled=move || saving.get()
                                                                on:click=on_save_name
                                                            >
                                                                "Save"
                                                            </button>
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| name_draft.set(None)
                                                            >
                                                                "Cancel"
                                                            </button>
                                                        </span>
                                                    }
                                                        .into_any()
                                                }
                                                None => {
                                                    let current = auth
                                                        .with(|state| {
                                                            state.user.as_ref().map(|u| u.name.clone()).unwrap_or_default()
                                                        });
                                                    let seed = current.clone();
                                                    view! {
                                                        <span class="profile-card__value">
                                                            {current}
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| name_draft.set(Some(seed.clone()))
                                                            >
                                                                "Edit"
                                                            </button>
                                                        </span>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </div>
                                        <div class="profile-card__row">
                                            <span class="profile-card__label">"Email"</span>
                                            <span class="profile-card__value">{details.email.clone()}</span>
                                        </div>
                                        <div class="profile-card__row">
                                            <span class="profile-card__label">"Member since"</span>
                                            <span class="profile-card__value">
                                                {details
                                                    .member_since
                                                    .clone()
                                                    .map_or_else(|| "—".to_owned(), |date| format_date(&date))}
                                            </span>
                                        </div>
                                        <div class="profile-card__row">
                                            <span class="profile-card__label">"Enrolled courses"</span>
                                            <span class="profile-card__value">{details.enrolled_count}</span>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(None) => view! { <p>"Sign in to see your profile."</p> }.into_any(),
                            Err(err) => {
                                view! {
                                    <div class="profile-page__error">
                                        <p>{format!("Could not load your profile: {err}")}</p>
                                        <button class="btn" on:click=move |_| profile.refetch()>
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
