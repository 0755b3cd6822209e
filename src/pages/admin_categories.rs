//! Category management screen — a thin instantiation of the generic
//! orderable admin controller over the category gateway.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::orderable_admin::OrderableAdminScreen;
use crate::net::gateway::CategoryGateway;
use crate::state::auth::AuthState;

/// Admin screen for reordering, toggling, and creating categories.
#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Staff only; students are sent back to the catalog.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_staff() {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="admin-page">
            <OrderableAdminScreen gateway=CategoryGateway heading="Categories"/>
        </div>
    }
}
