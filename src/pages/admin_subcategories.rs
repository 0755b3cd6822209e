//! Sub-category management screen.
//!
//! The operator first picks a parent category; the orderable admin
//! controller is then instantiated over that category's sub-category
//! gateway. Changing the parent replaces the whole controller (and any
//! unsaved reorder with it), the same way a search change does.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::orderable_admin::OrderableAdminScreen;
use crate::net::gateway::{SubcategoryGateway, fetch_public_categories};
use crate::state::auth::AuthState;

/// Admin screen for sub-categories of a selected parent category.
#[component]
pub fn AdminSubcategoriesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_staff() {
            navigate("/", NavigateOptions::default());
        }
    });

    let categories = LocalResource::new(|| fetch_public_categories());
    let selected = RwSignal::new(None::<String>);

    view! {
        <div class="admin-page">
            <label class="admin-page__parent-picker">
                "Parent category"
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    selected.set((!value.is_empty()).then_some(value));
                }>
                    <option value="">"Pick a category…"</option>
                    {move || {
                        categories
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|category| {
                                view! { <option value=category.id.clone()>{category.name.clone()}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>

            {move || {
                selected
                    .get()
                    .map(|category_id| {
                        view! {
                            <OrderableAdminScreen
                                gateway=SubcategoryGateway::new(category_id)
                                heading="Sub-categories"
                            />
                        }
                    })
            }}
        </div>
    }
}
