//! Catalog page — paged course grid with search and category filter.
//!
//! ARCHITECTURE
//! ============
//! The query lives in one `CatalogQuery` value; every filter change
//! produces a fresh query (page reset to 1) and the course resource
//! refetches off it. A failed load blocks the grid behind a retry since
//! there is nothing to fall back to.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::net::gateway::fetch_public_categories;
use crate::state::catalog::{CatalogQuery, total_pages};

/// Catalog page: search box, category filter, course grid, pagination.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let query = RwSignal::new(CatalogQuery::default());

    let courses = LocalResource::new(move || {
        let rendered = query.get().to_query();
        async move { crate::net::api::fetch_courses(&rendered).await }
    });
    let categories = LocalResource::new(|| fetch_public_categories());

    let category_options = move || {
        categories
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
            .into_iter()
            .map(|category| {
                view! { <option value=category.id.clone()>{category.name.clone()}</option> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <h1>"Browse courses"</h1>
                <div class="catalog-page__filters">
                    <input
                        class="catalog-page__search"
                        type="search"
                        placeholder="Search courses…"
                        prop:value=move || query.with(|q| q.search.clone())
                        on:change=move |ev| {
                            let term = event_target_value(&ev);
                            query.update(|q| *q = q.with_search(term));
                        }
                    />
                    <select
                        class="catalog-page__category"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let category = (!value.is_empty()).then_some(value);
                            query.update(|q| *q = q.with_category(category));
                        }
                    >
                        <option value="">"All categories"</option>
                        {category_options}
                    </select>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading courses…"</p> }>
                {move || {
                    courses
                        .get()
                        .map(|result| match result {
                            Ok(page) => {
                                let pages = total_pages(page.total_elements);
                                let current = query.with(|q| q.page);
                                view! {
                                    <div class="catalog-page__results">
                                        <Show
                                            when={
                                                let count = page.items.len();
                                                move || count > 0
                                            }
                                            fallback=move || {
                                                view! { <p class="catalog-page__empty">"No courses matched."</p> }
                                            }
                                        >
                                            <div class="catalog-page__grid">
                                                {page
                                                    .items
                                                    .clone()
                                                    .into_iter()
                                                    .map(|summary| view! { <CourseCard summary=summary/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </Show>
                                        <div class="catalog-page__pager">
                                            <button
                                                class="btn"
                                                disabled=move || current <= 1
                                                on:click=move |_| {
                                                    query.update(|q| *q = q.with_page(q.page.saturating_sub(1)));
                                                }
                                            >
                                                "Previous"
                                            </button>
                                            <span class="catalog-page__pager-label">
                                                {format!("Page {current} of {pages}")}
                                            </span>
                                            <button
                                                class="btn"
                                                disabled=move || current >= pages
                                                on:click=move |_| {
                                                    query.update(|q| *q = q.with_page(q.page + 1));
                                                }
                                            >
                                                "Next"
                                            </button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <div class="catalog-page__error">
                                        <p>{format!("Could not load the catalog: {err}")}</p>
                                        <button class="btn" on:click=move |_| courses.refetch()>
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
