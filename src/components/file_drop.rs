//! Drag-and-drop file zone with a click-to-browse fallback.
//!
//! Emits only [`FileMeta`] (name, size, declared MIME type); the caller
//! runs the wizard's client-side checks and decides whether to accept.
//! Browser file access exists only under `hydrate`; SSR renders an inert
//! zone.

use leptos::prelude::*;

use crate::state::wizard::FileMeta;

/// File drop zone. `accept` is forwarded to the hidden file input so the
/// browser's picker pre-filters, but the caller still validates — drops
/// bypass the picker entirely.
#[component]
pub fn FileDropZone(
    label: &'static str,
    accept: &'static str,
    on_file: Callback<FileMeta>,
) -> impl IntoView {
    let hovering = RwSignal::new(false);

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        hovering.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(meta) = ev
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0))
                .map(|file| file_meta(&file))
            {
                on_file.run(meta);
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let input = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
            if let Some(meta) = input
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file_meta(&file))
            {
                on_file.run(meta);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <label
            class="file-drop"
            class=("file-drop--hover", move || hovering.get())
            on:dragover=move |ev| {
                ev.prevent_default();
                hovering.set(true);
            }
            on:dragleave=move |_| hovering.set(false)
            on:drop=on_drop
        >
            <span class="file-drop__label">{label}</span>
            <span class="file-drop__hint">"Drop a file here or click to browse"</span>
            <input class="file-drop__input" type="file" accept=accept on:change=on_change/>
        </label>
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
    }
}
