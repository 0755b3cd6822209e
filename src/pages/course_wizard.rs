//! Multi-step course-upload wizard.
//!
//! ARCHITECTURE
//! ============
//! All wizard data lives in one `WizardState` signal; this page renders
//! the current step, feeds events into the pure state transitions, and
//! performs the single network call on submit. File drops are validated
//! client-side (type and size) before they ever reach the draft.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::file_drop::FileDropZone;
use crate::net::gateway::fetch_public_categories;
use crate::state::auth::AuthState;
use crate::state::form::message_for;
use crate::state::wizard::{FileMeta, WizardState, WizardStep};
use crate::util::format::{format_price_cents, parse_price};

/// Course-upload wizard page.
#[component]
pub fn CourseWizardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_staff() {
            navigate("/", NavigateOptions::default());
        }
    });

    let wizard = RwSignal::new(WizardState::default());
    let categories = LocalResource::new(|| fetch_public_categories());
    let file_error = RwSignal::new(None::<String>);
    let banner = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let drag_from = RwSignal::new(None::<usize>);

    let field_error = move |field: &'static str| {
        wizard.with(move |state| message_for(&state.errors, field).map(str::to_owned))
    };

    let on_cover = Callback::new(move |meta: FileMeta| {
        let mut outcome = Ok(());
        wizard.update(|state| outcome = state.set_cover(meta));
        file_error.set(outcome.err().map(|rejection| rejection.to_string()));
    });

    let navigate_done = use_navigate();
    let on_submit = move |_| {
        if submitting.get_untracked() || !wizard.with_untracked(WizardState::ready_to_submit) {
            return;
        }
        submitting.set(true);
        banner.set(None);
        let request = wizard.with_untracked(WizardState::submit_request);
        let navigate_done = navigate_done.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_course(&request).await {
                Ok(course) => {
                    navigate_done(&format!("/course/{}", course.id), NavigateOptions::default());
                }
                Err(err) => {
                    submitting.set(false);
                    banner.set(Some(format!("Could not publish the course: {err}")));
                }
            }
        });
    };

    let step = move || wizard.with(|state| state.step);

    let step_header = move || {
        let current = step();
        WizardStep::ALL
            .iter()
            .map(|&s| {
                let class = if s == current {
                    "wizard__step wizard__step--current"
                } else {
                    "wizard__step"
                };
                view! { <span class=class>{s.label()}</span> }
            })
            .collect::<Vec<_>>()
    };

    let details_step = move || {
        view! {
            <div class="wizard__form">
                <label class="wizard__field">
                    "Title"
                    <input
                        type="text"
                        prop:value=move || wizard.with(|state| state.draft.title.clone())
                        on:input=move |ev| {
                            wizard.update(|state| state.draft.title = event_target_value(&ev));
                        }
                    />
                    {move || {
                        field_error("title").map(|msg| view! { <span class="wizard__error">{msg}</span> })
                    }}
                </label>
                <label class="wizard__field">
                    "Subtitle (optional)"
                    <input
                        type="text"
                        prop:value=move || wizard.with(|state| state.draft.subtitle.clone())
                        on:input=move |ev| {
                            wizard.update(|state| state.draft.subtitle = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="wizard__field">
                    "Description"
                    <textarea
                        prop:value=move || wizard.with(|state| state.draft.description.clone())
                        on:input=move |ev| {
                            wizard.update(|state| state.draft.description = event_target_value(&ev));
                        }
                    ></textarea>
                    {move || {
                        field_error("description")
                            .map(|msg| view! { <span class="wizard__error">{msg}</span> })
                    }}
                </label>
                <label class="wizard__field">
                    "Category"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.update(|state| {
                            state.draft.category_id = (!value.is_empty()).then_some(value);
                        });
                    }>
                        <option value="">"Pick a category…"</option>
                        {move || {
                            categories
                                .get()
                                .and_then(Result::ok)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <option value=category.id.clone()>{category.name.clone()}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    {move || {
                        field_error("category")
                            .map(|msg| view! { <span class="wizard__error">{msg}</span> })
                    }}
                </label>
            </div>
        }
    };

    let media_step = move || {
        view! {
            <div class="wizard__form">
                <FileDropZone label="Cover image" accept="image/jpeg,image/png,image/webp" on_file=on_cover/>
                {move || {
                    wizard
                        .with(|state| state.draft.cover.clone())
                        .map(|meta| {
                            view! {
                                <p class="wizard__file-name">{format!("Selected: {}", meta.name)}</p>
                            }
                        })
                }}
                {move || {
                    file_error.get().map(|msg| view! { <span class="wizard__error">{msg}</span> })
                }}
                {move || {
                    field_error("cover").map(|msg| view! { <span class="wizard__error">{msg}</span> })
                }}
            </div>
        }
    };

    let curriculum_step = move || {
        let lessons = wizard.with(|state| state.draft.lessons.clone());
        view! {
            <div class="wizard__form">
                <ul class="wizard__lessons">
                    {lessons
                        .into_iter()
                        .enumerate()
                        .map(|(index, lesson)| {
                            let title_id = lesson.id.clone();
                            let remove_id = lesson.id.clone();
                            let video_id = lesson.id.clone();
                            let on_video = Callback::new(move |meta: FileMeta| {
                                let video_id = video_id.clone();
                                let mut outcome = Ok(());
                                wizard.update(|state| {
                                    outcome = state.set_lesson_video(&video_id, meta);
                                });
                                file_error.set(outcome.err().map(|rejection| rejection.to_string()));
                            });
                            view! {
                                <li
                                    class="wizard__lesson"
                                    draggable="true"
                                    on:dragstart=move |_| drag_from.set(Some(index))
                                    on:dragover=move |ev| ev.prevent_default()
                                    on:drop=move |ev| {
                                        ev.prevent_default();
                                        if let Some(from) = drag_from.get_untracked() {
                                            drag_from.set(None);
                                            wizard.update(|state| {
                                                state.move_lesson(from, index);
                                            });
                                        }
                                    }
                                    on:dragend=move |_| drag_from.set(None)
                                >
                                    <span class="wizard__lesson-handle" title="Drag to reorder">
                                        "⠿"
                                    </span>
                                    <span class="wizard__lesson-number">{index + 1}</span>
                                    <input
                                        type="text"
                                        placeholder="Lesson title"
                                        prop:value=lesson.title.clone()
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            wizard.update(|state| state.set_lesson_title(&title_id, value));
                                        }
                                    />
                                    <FileDropZone label="Video" accept="video/mp4,video/webm" on_file=on_video/>
                                    {lesson
                                        .video
                                        .as_ref()
                                        .map(|meta| {
                                            view! {
                                                <span class="wizard__file-name">{meta.name.clone()}</span>
                                            }
                                        })}
                                    <button
                                        class="btn btn--small"
                                        on:click=move |_| {
                                            wizard.update(|state| state.remove_lesson(&remove_id));
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <button
                    class="btn"
                    on:click=move |_| {
                        wizard.update(|state| {
                            state.add_lesson();
                        });
                    }
                >
                    "+ Add lesson"
                </button>
                {move || {
                    file_error.get().map(|msg| view! { <span class="wizard__error">{msg}</span> })
                }}
                {move || {
                    field_error("lessons")
                        .map(|msg| view! { <span class="wizard__error">{msg}</span> })
                }}
            </div>
        }
    };

    let pricing_step = move || {
        view! {
            <div class="wizard__form">
                <label class="wizard__field">
                    "Price (USD)"
                    <input
                        type="text"
                        placeholder="e.g. 49.99"
                        on:change=move |ev| {
                            let parsed = parse_price(&event_target_value(&ev));
                            wizard.update(|state| state.draft.price_cents = parsed);
                        }
                    />
                    {move || {
                        wizard
                            .with(|state| state.draft.price_cents)
                            .map(|cents| {
                                view! {
                                    <span class="wizard__price-preview">
                                        {format!("Students will pay {}", format_price_cents(cents))}
                                    </span>
                                }
                            })
                    }}
                    {move || {
                        field_error("price").map(|msg| view! { <span class="wizard__error">{msg}</span> })
                    }}
                </label>
            </div>
        }
    };

    let review_step = move || {
        let state = wizard.get();
        let lesson_count = state.draft.lessons.len();
        view! {
            <div class="wizard__review">
                <h3>{state.draft.title.clone()}</h3>
                <p>{state.draft.description.clone()}</p>
                <p>
                    {format!(
                        "{lesson_count} lesson{} · {}",
                        if lesson_count == 1 { "" } else { "s" },
                        state.draft.price_cents.map_or_else(
                            || "price not set".to_owned(),
                            format_price_cents,
                        ),
                    )}
                </p>
                {state
                    .draft
                    .cover
                    .as_ref()
                    .map(|meta| view! { <p>{format!("Cover: {}", meta.name)}</p> })}
            </div>
        }
    };

    view! {
        <div class="wizard-page">
            <h1>"Publish a course"</h1>
            <header class="wizard__steps">{step_header}</header>

            <Show when=move || banner.get().is_some()>
                <ErrorBanner
                    message=Signal::derive(move || banner.get().unwrap_or_default())
                    on_dismiss=Callback::new(move |()| banner.set(None))
                />
            </Show>

            {move || match step() {
                WizardStep::Details => details_step().into_any(),
                WizardStep::Media => media_step().into_any(),
                WizardStep::Curriculum => curriculum_step().into_any(),
                WizardStep::Pricing => pricing_step().into_any(),
                WizardStep::Review => review_step().into_any(),
            }}

            <footer class="wizard__nav">
                <Show when=move || step() != WizardStep::Details>
                    <button class="btn" on:click=move |_| wizard.update(WizardState::back)>
                        "Back"
                    </button>
                </Show>
                <Show
                    when=move || step() == WizardStep::Review
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--primary"
                                on:click=move |_| {
                                    file_error.set(None);
                                    wizard.update(|state| {
                                        state.next();
                                    });
                                }
                            >
                                "Next"
                            </button>
                        }
                    }
                >
                    <button
                        class="btn btn--primary"
                        disabled=move || {
                            submitting.get() || !wizard.with(WizardState::ready_to_submit)
                        }
                        on:click=on_submit.clone()
                    >
                        {move || if submitting.get() { "Publishing…" } else { "Publish course" }}
                    </button>
                </Show>
            </footer>
        </div>
    }
}
