//! In-page `#id` link. Every fragment link on the page renders through
//! `AnchorLink` so it smooth-scrolls and collapses the mobile menu.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::scroll;

fn follow_anchor(nav: RwSignal<NavState>, ev: &leptos::ev::MouseEvent, href: &str) {
    let mut next = nav.get_untracked();
    if !next.follow_anchor(href, scroll::scroll_into_view) {
        return;
    }
    ev.prevent_default();
    nav.maybe_update(|n| {
        let changed = *n != next;
        *n = next;
        changed
    });
}

#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <a href=href class=class on:click=move |ev| follow_anchor(nav, &ev, href)>
            {children()}
        </a>
    }
}
