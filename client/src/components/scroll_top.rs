//! Floating "back to top" button.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::scroll;

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <button
            id="scroll-top"
            class="scroll-top"
            type="button"
            aria-label="Scroll to top"
            hidden=move || !nav.with(|n| n.show_scroll_top)
            on:click=move |_| scroll::scroll_to_top()
        >
            "↑"
        </button>
    }
}
