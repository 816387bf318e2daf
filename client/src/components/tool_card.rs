//! Clickable card for one tool; opens the shared modal.

use leptos::prelude::*;

use crate::components::tool_modal::open_tool;
use crate::state::modal::{ModalState, ToolDescriptor};

#[component]
pub fn ToolCard(tool: &'static ToolDescriptor) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let id = tool.key.id();

    view! {
        <button type="button" class="tool-card fade-in" data-tool=id on:click=move |_| open_tool(modal, id)>
            <h3 class="tool-card__title">{tool.title}</h3>
            <p class="tool-card__desc">{tool.description}</p>
            <span class="tool-card__cta">"Open tool →"</span>
        </button>
    }
}
