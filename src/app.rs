//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    admin_categories::AdminCategoriesPage, admin_subcategories::AdminSubcategoriesPage,
    cart::CartPage, catalog::CatalogPage, checkout::CheckoutPage, course::CoursePage,
    course_wizard::CourseWizardPage, login::LoginPage, payment_result::PaymentResultPage,
    profile::ProfilePage,
};
use crate::state::{auth::AuthState, cart::CartState};
use crate::util::cart_storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth and cart contexts, restores the persisted
/// cart, resolves the current session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let cart = RwSignal::new(CartState::default());

    provide_context(auth);
    provide_context(cart);

    // Restore the cart from local storage, then resolve the session.
    // Both are no-ops server-side.
    Effect::new(move || {
        if let Some(lines) = cart_storage::load() {
            cart.set(CartState::from_lines(lines));
        }
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.set(AuthState {
                user,
                loading: false,
            });
        });
    });

    // Persist the cart on every change.
    Effect::new(move || {
        let lines = cart.with(|state| state.lines().to_vec());
        cart_storage::save(&lines);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/coursemart-ui.css"/>
        <Title text="Coursemart"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=CatalogPage/>
                    <Route path=(StaticSegment("course"), ParamSegment("id")) view=CoursePage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                    <Route
                        path=(StaticSegment("payment"), StaticSegment("result"))
                        view=PaymentResultPage
                    />
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("categories"))
                        view=AdminCategoriesPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("subcategories"))
                        view=AdminSubcategoriesPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("courses"), StaticSegment("new"))
                        view=CourseWizardPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
