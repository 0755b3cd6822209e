//! Generic admin screen for an orderable list.
//!
//! ARCHITECTURE
//! ============
//! One component serves both the category and sub-category management
//! screens; the injected [`OrderableGateway`] is the only difference
//! between them. The component owns async orchestration (load, bulk save,
//! toggle, create) and applies pure [`ListState`] transitions to a signal
//! when responses arrive, so every failure path lands on either the fully
//! old or fully new order — never in between.
//!
//! A search or status-filter change reloads the list and replaces the
//! state wholesale, discarding any unsaved reorder without warning.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::error::ApiError;
use crate::net::gateway::OrderableGateway;
use crate::net::types::ListFilter;
use crate::state::orderable::{ListState, Orderable};

/// How long the "Saved" confirmation stays visible before the screen
/// drops out of drag mode.
#[cfg(feature = "hydrate")]
const SAVE_CONFIRM_MS: u32 = 600;

/// Load lifecycle of the whole screen. A failed load blocks everything
/// behind a retry; persist failures are banners handled elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
enum LoadStatus {
    Loading,
    Ready,
    Failed(ApiError),
}

/// Orderable list management screen: filterable table with drag-and-drop
/// reordering, optimistic updates, bulk persist with rollback, active
/// toggles, and append-only create.
#[component]
pub fn OrderableAdminScreen<G>(gateway: G, heading: &'static str) -> impl IntoView
where
    G: OrderableGateway,
{
    let list = RwSignal::new(ListState::<G::Item>::default());
    let status = RwSignal::new(LoadStatus::Loading);
    let banner = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let active_only = RwSignal::new(false);
    let drag_from = RwSignal::new(None::<usize>);
    let show_create = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);

    let on_save = {
        let gateway = gateway.clone();
        move |_| {
            let mut started = false;
            list.update(|state| started = state.begin_commit());
            // Reentrancy guard: a second click while saving (or with a
            // clean order) sends nothing.
            if !started {
                return;
            }
            banner.set(None);
            let payload = list.with_untracked(|state| state.order_payload());
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match gateway.update_order(payload).await {
                    Ok(()) => {
                        list.update(|state| state.commit_succeeded());
                        #[cfg(feature = "hydrate")]
                        gloo_timers::future::TimeoutFuture::new(SAVE_CONFIRM_MS).await;
                        list.update(|state| state.exit_reorder());
                    }
                    Err(err) => {
                        list.update(|state| state.commit_failed());
                        banner.set(Some(format!("Could not save the new order: {err}")));
                    }
                }
            });
        }
    };

    let on_toggle = {
        let gateway = gateway.clone();
        Callback::new(move |id: String| {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match gateway.toggle_status(&id).await {
                    Ok(()) => list.update(|state| state.apply_toggle(&id)),
                    Err(err) => banner.set(Some(format!("Could not update status: {err}"))),
                }
            });
        })
    };

    let on_create = {
        let gateway = gateway.clone();
        Callback::new(move |name: String| {
            let name = name.trim().to_owned();
            if name.is_empty() {
                return;
            }
            let order_index = list.with_untracked(|state| state.next_order_index());
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match gateway.create(&name, order_index).await {
                    Ok(item) => {
                        list.update(|state| state.apply_created(item));
                        show_create.set(false);
                        new_name.set(String::new());
                    }
                    Err(err) => banner.set(Some(format!("Could not create \"{name}\": {err}"))),
                }
            });
        })
    };

    // Initial load, plus reload on search/filter change or explicit retry.
    // A reload replaces the list state outright, superseding any pending
    // reorder session.
    Effect::new(move || {
        reload.get();
        let filter = ListFilter {
            search: Some(search.get()).filter(|term| !term.trim().is_empty()),
            active_only: active_only.get().then_some(true),
        };
        let gateway = gateway.clone();
        status.set(LoadStatus::Loading);
        banner.set(None);
        leptos::task::spawn_local(async move {
            match gateway.list(&filter).await {
                Ok(page) => {
                    list.set(ListState::from_fetch(page.items));
                    status.set(LoadStatus::Ready);
                }
                Err(err) => status.set(LoadStatus::Failed(err)),
            }
        });
    });

    let drag_mode = move || list.with(|state| state.drag_mode());
    let saving = move || list.with(|state| state.is_saving());
    let dirty = move || list.with(|state| state.is_dirty());

    let rows = move || {
        let state = list.get();
        let dragging = state.drag_mode();
        state
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let id = item.id().to_owned();
                let active = item.is_active();
                let name = item.name().to_owned();
                let detail = item.detail();
                let order = item.order_index();
                let row_class = if dragging {
                    "admin-table__row admin-table__row--draggable"
                } else {
                    "admin-table__row"
                };
                view! {
                    <tr
                        class=row_class
                        draggable=dragging.to_string()
                        on:dragstart=move |_| {
                            if dragging {
                                drag_from.set(Some(index));
                            }
                        }
                        on:dragover=move |ev| {
                            if dragging {
                                ev.prevent_default();
                            }
                        }
                        on:drop=move |ev| {
                            ev.prevent_default();
                            if let Some(from) = drag_from.get_untracked() {
                                drag_from.set(None);
                                list.update(|state| {
                                    state.move_item(from, index);
                                });
                            }
                        }
                        on:dragend=move |_| drag_from.set(None)
                    >
                        <td class="admin-table__order">{order}</td>
                        <td class="admin-table__name">{name}</td>
                        <td class="admin-table__detail">{detail}</td>
                        <td class="admin-table__status">
                            {if active { "Active" } else { "Inactive" }}
                        </td>
                        <td class="admin-table__actions">
                            <Show
                                when=move || dragging
                                fallback=move || {
                                    let toggle_id = id.clone();
                                    view! {
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| on_toggle.run(toggle_id.clone())
                                        >
                                            {if active { "Deactivate" } else { "Activate" }}
                                        </button>
                                    }
                                }
                            >
                                <span class="admin-table__handle" title="Drag to reorder">
                                    "⠿"
                                </span>
                            </Show>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="admin-list">
            <header class="admin-list__header">
                <h2>{heading}</h2>
                <div class="admin-list__filters">
                    <input
                        class="admin-list__search"
                        type="search"
                        placeholder="Search…"
                        prop:value=move || search.get()
                        on:change=move |ev| search.set(event_target_value(&ev))
                    />
                    <label class="admin-list__active-filter">
                        <input
                            type="checkbox"
                            prop:checked=move || active_only.get()
                            on:change=move |ev| active_only.set(event_target_checked(&ev))
                        />
                        "Active only"
                    </label>
                </div>
                <div class="admin-list__actions">
                    <Show
                        when=drag_mode
                        fallback=move || {
                            view! {
                                <button
                                    class="btn"
                                    disabled=move || {
                                        status.get() != LoadStatus::Ready
                                            || list.with(|state| state.len() < 2)
                                    }
                                    on:click=move |_| list.update(|state| state.enter_reorder())
                                >
                                    "Reorder"
                                </button>
                                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                                    "+ New"
                                </button>
                            }
                        }
                    >
                        <button
                            class="btn btn--primary"
                            disabled=move || !dirty() || saving()
                            on:click=on_save.clone()
                        >
                            {move || if saving() { "Saving…" } else { "Save order" }}
                        </button>
                        <button
                            class="btn"
                            disabled=saving
                            on:click=move |_| {
                                banner.set(None);
                                list.update(|state| {
                                    state.cancel();
                                });
                            }
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </header>

            <Show when=move || banner.get().is_some()>
                <ErrorBanner
                    message=Signal::derive(move || banner.get().unwrap_or_default())
                    on_dismiss=Callback::new(move |()| banner.set(None))
                />
            </Show>

            {move || match status.get() {
                LoadStatus::Loading => view! { <p class="admin-list__loading">"Loading…"</p> }.into_any(),
                LoadStatus::Failed(err) => {
                    view! {
                        <div class="admin-list__error">
                            <p>{format!("Could not load the list: {err}")}</p>
                            <button
                                class="btn"
                                on:click=move |_| reload.update(|n| *n = n.wrapping_add(1))
                            >
                                "Retry"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                LoadStatus::Ready => {
                    if list.with(|state| state.is_empty()) {
                        view! { <p class="admin-list__empty">"No records yet."</p> }.into_any()
                    } else {
                        view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"#"</th>
                                        <th>"Name"</th>
                                        <th>"Details"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        }
                            .into_any()
                    }
                }
            }}

            <Show when=move || show_create.get()>
                <CreateItemDialog
                    name=new_name
                    on_submit=on_create
                    on_cancel=Callback::new(move |()| {
                        show_create.set(false);
                        new_name.set(String::new());
                    })
                />
            </Show>
        </section>
    }
}

/// Modal dialog collecting the name of a new record. The new record is
/// always appended at the end of the list.
#[component]
fn CreateItemDialog(
    name: RwSignal<String>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let value = name.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        on_submit.run(value);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
