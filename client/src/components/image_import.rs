//! Drag-and-drop / picker image import surface for the verification tool.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by `ToolModal` for the image-verification tool only. Each mount
//! owns a fresh `FileImportState`, so closing or switching tools discards
//! the selection along with this subtree. Async decode and submit results
//! are written back with `try_update`; once the subtree is gone they are
//! silently dropped.

use leptos::prelude::*;

use crate::net::verify::SubmitConfig;
use crate::state::file_import::{ACCEPTED_IMAGE_TYPES, FileImportState, FileInfo, PreviewState};
use crate::util::browser_file::BrowserFile;
use crate::util::file_size::format_file_size;

type ImportSignal = RwSignal<FileImportState<BrowserFile>, LocalStorage>;

/// Upload zone, inline error, preview, and submit button.
#[component]
pub fn ImageImport() -> impl IntoView {
    let import: ImportSignal = RwSignal::new_local(FileImportState::default());
    let drag_over = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let config = StoredValue::new(use_context::<SubmitConfig>().unwrap_or_default());

    let open_picker = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            select_files(import, crate::util::browser_file::files_from_list(input.files()));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drag_enter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(true);
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(false);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(false);
        #[cfg(feature = "hydrate")]
        {
            let files = ev.data_transfer().and_then(|dt| dt.files());
            select_files(import, crate::util::browser_file::files_from_list(files));
        }
    };

    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        import.update(|state| {
            state.remove_selected();
        });
        clear_picker(input_ref);
    };

    let on_submit = move |_ev: leptos::ev::MouseEvent| {
        let Some((seq, file)) = import.try_update(|state| state.begin_submit()).flatten() else {
            return;
        };
        let config = config.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::verify::submit_image(&config, &file).await;
            if let Err(err) = &result {
                log::error!("image verification failed: {err}");
            }
            let succeeded = result.is_ok();
            let applied = import.try_update(|state| state.finish_submit(seq, result)).unwrap_or(false);
            if applied && succeeded {
                clear_picker(input_ref);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (seq, file, config);
        }
    };

    let preview = move || {
        import.with(|state| {
            if let Some(outcome) = state.outcome() {
                let name = outcome.file_name.clone();
                let score = outcome.score_label();
                return Some(
                    view! {
                        <div class="verify-success">
                            <div class="verify-success__title">"✓ Verification Complete"</div>
                            <p class="verify-success__body">
                                "Image \"" {name} "\" has been verified." <br/>
                                <span class="verify-success__score">
                                    "Integrity Score: " <strong>{score}</strong>
                                </span>
                            </p>
                        </div>
                    }
                    .into_any(),
                );
            }

            let file = state.selected()?;
            let name = file.name();
            let size = format_file_size(file.size_bytes());
            let thumb = match state.preview() {
                PreviewState::Ready { data_url: Some(url), .. } => Some(url.clone()),
                _ => None,
            };
            Some(
                view! {
                    <div class="preview-item">
                        {thumb.map(|src| view! { <img src=src class="preview-thumb" alt="Preview"/> })}
                        <div class="preview-info">
                            <div class="preview-name">{name}</div>
                            <div class="preview-size">{size}</div>
                        </div>
                        <button type="button" class="remove-file" aria-label="Remove" on:click=on_remove>
                            "×"
                        </button>
                    </div>
                }
                .into_any(),
            )
        })
    };

    view! {
        <div class="modal-import">
            <input
                type="file"
                id="modal-image-input"
                accept=ACCEPTED_IMAGE_TYPES
                hidden=true
                node_ref=input_ref
                on:change=on_change
            />

            <div
                class="upload-zone"
                id="upload-zone"
                class:drag-over=move || drag_over.get()
                on:click=open_picker
                on:dragenter=on_drag_enter
                on:dragover=on_drag_enter
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <svg class="upload-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                    <path d="M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M17 8l-5-5-5 5M12 3v12"/>
                </svg>
                <div class="upload-text">"Click to upload or drag image here"</div>
                <div class="upload-hint">"PNG, JPG, WebP. Max 10 MB."</div>
            </div>

            <div class="modal-import-error" id="modal-import-error" role="alert">
                {move || import.with(|state| state.error().map(str::to_owned))}
            </div>

            <div class="file-previews" id="file-previews">{preview}</div>

            <button
                type="button"
                class="btn btn-primary modal-process-btn"
                id="modal-process-btn"
                class:loading=move || import.with(|state| state.is_processing())
                disabled=move || !import.with(|state| state.can_submit())
                on:click=on_submit
            >
                {move || import.with(|state| state.submit_label())}
            </button>
        </div>
    }
}

/// Run new files through validation and start the preview decode.
#[cfg(feature = "hydrate")]
fn select_files(import: ImportSignal, files: Vec<BrowserFile>) {
    let accepted = import
        .try_update(|state| state.handle_files(files))
        .and_then(|result| result.ok().flatten());
    if let Some(seq) = accepted {
        start_preview(import, seq);
    }
}

#[cfg(feature = "hydrate")]
fn start_preview(import: ImportSignal, seq: u64) {
    let Some(file) = import.with_untracked(|state| state.selected().cloned()) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let data_url = crate::util::browser_file::read_data_url(&file).await;
        let _ = import.try_update(|state| state.preview_ready(seq, data_url));
    });
}

fn clear_picker(input_ref: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input_ref;
    }
}
