//! The single landing page: hero, tools, about, contact.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns page-wide browser wiring (scroll listener, fade-in observer) and
//! hosts the one `ToolModal` every tool card opens.

use leptos::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::contact_form::ContactForm;
use crate::components::navbar::Navbar;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::tool_card::ToolCard;
use crate::components::tool_modal::ToolModal;
use crate::state::modal::TOOLS;
use crate::state::nav::NavState;
use crate::util::{fade_in, scroll};

#[component]
pub fn LandingPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    // Sync scroll-derived chrome once on mount, then on every scroll.
    Effect::new(move || {
        nav.update(|n| n.apply_scroll(scroll::scroll_y()));
        fade_in::observe_fade_ins();
    });
    let on_scroll = window_event_listener(leptos::ev::scroll, move |_| {
        let y = scroll::scroll_y();
        nav.maybe_update(|n| {
            let before = *n;
            n.apply_scroll(y);
            *n != before
        });
    });
    on_cleanup(move || on_scroll.remove());

    view! {
        <Navbar/>
        <main>
            <section id="hero" class="hero">
                <h1 class="hero__title">"Verify what you see. Trust what you share."</h1>
                <p class="hero__lead">
                    "TrustSetu X TrustNet brings image verification, trust scoring, and risk analysis
                    together in one place."
                </p>
                <AnchorLink href="#tools" class="btn btn-primary">"Explore the tools"</AnchorLink>
            </section>

            <section id="tools" class="tools fade-in">
                <h2>"Tools"</h2>
                <div class="tools__grid">
                    {TOOLS.iter().map(|tool| view! { <ToolCard tool=tool/> }).collect_view()}
                </div>
            </section>

            <section id="about" class="about fade-in">
                <h2>"About"</h2>
                <p>
                    "We build practical verification workflows for newsrooms, platforms, and
                    communities that need to move fast without losing confidence."
                </p>
            </section>

            <section id="contact" class="contact fade-in">
                <h2>"Contact"</h2>
                <ContactForm/>
            </section>
        </main>
        <footer class="footer">"© TrustSetu X TrustNet"</footer>
        <ScrollTopButton/>
        <ToolModal/>
    }
}
