//! Course detail page with curriculum listing and add-to-cart.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Course;
use crate::state::cart::{CartLine, CartState};
use crate::util::format::{format_date, format_duration, format_price_cents};

/// Course detail page.
#[component]
pub fn CoursePage() -> impl IntoView {
    let params = use_params_map();
    let cart = expect_context::<RwSignal<CartState>>();

    let course = LocalResource::new(move || {
        let course_id = params.read().get("id").unwrap_or_default();
        async move { crate::net::api::fetch_course(&course_id).await }
    });

    let add_to_cart = move |detail: &Course| {
        let line = CartLine {
            course_id: detail.id.clone(),
            title: detail.title.clone(),
            price_cents: detail.price_cents,
        };
        cart.update(|state| {
            state.add(line);
        });
    };

    view! {
        <div class="course-page">
            <Suspense fallback=move || view! { <p>"Loading course…"</p> }>
                {move || {
                    course
                        .get()
                        .map(|result| match result {
                            Ok(detail) => {
                                let in_cart = {
                                    let id = detail.id.clone();
                                    move || cart.with(|state| state.contains(&id))
                                };
                                let on_add = {
                                    let detail = detail.clone();
                                    move |_| add_to_cart(&detail)
                                };
                                view! {
                                    <article class="course-detail">
                                        <header class="course-detail__header">
                                            <span class="course-detail__category">
                                                {detail.category_name.clone()}
                                            </span>
                                            <h1>{detail.title.clone()}</h1>
                                            {detail
                                                .subtitle
                                                .clone()
                                                .map(|subtitle| view! { <p class="course-detail__subtitle">{subtitle}</p> })}
                                            <p class="course-detail__byline">
                                                {format!("By {}", detail.instructor_name)}
                                                {detail
                                                    .created_at
                                                    .clone()
                                                    .map(|date| format!(" · Published {}", format_date(&date)))}
                                            </p>
                                        </header>

                                        <p class="course-detail__description">{detail.description.clone()}</p>

                                        <section class="course-detail__curriculum">
                                            <h2>"Curriculum"</h2>
                                            <ol>
                                                {detail
                                                    .lessons
                                                    .clone()
                                                    .into_iter()
                                                    .map(|lesson| {
                                                        view! {
                                                            <li class="course-detail__lesson">
                                                                <span>{lesson.title}</span>
                                                                {lesson
                                                                    .duration_seconds
                                                                    .map(|seconds| {
                                                                        view! {
                                                                            <span class="course-detail__duration">
                                                                                {format_duration(seconds)}
                                                                            </span>
                                                                        }
                                                                    })}
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ol>
                                        </section>

                                        <footer class="course-detail__purchase">
                                            <span class="course-detail__price">
                                                {format_price_cents(detail.price_cents)}
                                            </span>
                                            <Show
                                                when=in_cart.clone()
                                                fallback=move || {
                                                    let on_add = on_add.clone();
                                                    view! {
                                                        <button class="btn btn--primary" on:click=on_add>
                                                            "Add to cart"
                                                        </button>
                                                    }
                                                }
                                            >
                                                <a class="btn" href="/cart">
                                                    "In cart — view"
                                                </a>
                                            </Show>
                                        </footer>
                                    </article>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <div class="course-page__error">
                                        <p>{format!("Could not load this course: {err}")}</p>
                                        <button class="btn" on:click=move |_| course.refetch()>
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
