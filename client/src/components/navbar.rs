//! Top navigation bar with in-page links and the mobile menu toggle.

use leptos::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::state::nav::NavState;

const NAV_LINKS: &[(&str, &str)] = &[("#tools", "Tools"), ("#about", "About"), ("#contact", "Contact")];

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let menu_open = move || nav.with(|n| n.menu_open);

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || nav.with(|n| n.scrolled)>
            <AnchorLink href="#hero" class="navbar__brand">
                "TrustSetu " <span class="navbar__brand-x">"X"</span> " TrustNet"
            </AnchorLink>
            <button
                id="nav-toggle"
                class="navbar__toggle"
                type="button"
                aria-controls="nav-links"
                aria-expanded=move || if menu_open() { "true" } else { "false" }
                aria-label=move || nav.with(NavState::menu_toggle_label)
                on:click=move |_| {
                    nav.update(|n| {
                        n.toggle_menu();
                    });
                }
            >
                <span class="navbar__toggle-bar"></span>
                <span class="navbar__toggle-bar"></span>
                <span class="navbar__toggle-bar"></span>
            </button>
            <ul id="nav-links" class="nav-links" class:open=menu_open>
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <li>
                                <AnchorLink href=href>{label}</AnchorLink>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
