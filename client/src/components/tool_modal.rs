//! Shared tool dialog: title, description, and the per-tool body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tool cards open this dialog through the `RwSignal<ModalState>` context.
//! The body is rebuilt from scratch on every open, so the image import
//! surface (and any submit still in flight) is discarded on close or when a
//! different tool takes over.

use leptos::prelude::*;

use crate::components::image_import::ImageImport;
use crate::state::modal::{BodyKind, DismissTrigger, ModalState, PLACEHOLDER_BODY};
use crate::util::scroll;

/// Open `id` on the shared modal. Unknown ids do nothing.
pub fn open_tool(modal: RwSignal<ModalState>, id: &str) {
    modal.maybe_update(|state| state.open(id));
}

fn dismiss(modal: RwSignal<ModalState>, trigger: DismissTrigger) {
    modal.maybe_update(|state| state.dismiss(trigger));
}

/// The single overlay dialog used by every tool card.
#[component]
pub fn ToolModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let close_ref = NodeRef::<leptos::html::Button>::new();

    let is_open = Memo::new(move |_| modal.with(ModalState::is_open));
    let body_key = Memo::new(move |_| modal.with(ModalState::body));

    // Scroll lock and focus follow every open, including a switch between tools.
    Effect::new(move || {
        let open = body_key.get().is_some();
        scroll::set_scroll_locked(open);
        #[cfg(feature = "hydrate")]
        {
            if open {
                if let Some(button) = close_ref.get() {
                    let _ = button.focus();
                }
            }
        }
    });

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && modal.with_untracked(ModalState::is_open) {
            ev.prevent_default();
            dismiss(modal, DismissTrigger::EscapeKey);
        }
    });
    on_cleanup(move || escape.remove());

    let title = move || modal.with(|state| state.descriptor().map(|d| d.title));
    let description = move || modal.with(|state| state.descriptor().map(|d| d.description));

    let body = move || {
        body_key.get().map(|body| match body.kind {
            BodyKind::ImageImport => view! { <ImageImport/> }.into_any(),
            BodyKind::Placeholder => view! { <p>{PLACEHOLDER_BODY}</p> }.into_any(),
        })
    };

    view! {
        <div
            id="modal-overlay"
            class="modal-overlay"
            class:open=move || is_open.get()
            aria-hidden=move || if is_open.get() { "false" } else { "true" }
            on:click=move |_| dismiss(modal, DismissTrigger::Backdrop)
        >
            <div
                id="modal"
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                on:click=move |ev| ev.stop_propagation()
            >
                <button
                    node_ref=close_ref
                    id="modal-close"
                    class="modal-close"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| dismiss(modal, DismissTrigger::CloseButton)
                >
                    "×"
                </button>
                <h2 id="modal-title" class="modal-title">{title}</h2>
                <p id="modal-desc" class="modal-desc">{description}</p>
                <div id="modal-placeholder" class="modal-placeholder">{body}</div>
            </div>
        </div>
    }
}
