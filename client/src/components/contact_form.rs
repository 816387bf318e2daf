//! Contact form with inline field errors and a success notice.

use leptos::prelude::*;

use crate::state::contact::{ContactErrors, validate_contact};

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(ContactErrors::default());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        sent.set(false);
        let result = validate_contact(&name.get_untracked(), &email.get_untracked(), &message.get_untracked());
        errors.set(result);
        if !result.is_empty() {
            return;
        }
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
        sent.set(true);
    };

    view! {
        <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
            <label class="contact-form__field">
                <span>"Name"</span>
                <input
                    id="contact-name"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <span class="field-error" id="error-name">{move || errors.get().name}</span>
            </label>
            <label class="contact-form__field">
                <span>"Email"</span>
                <input
                    id="contact-email"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <span class="field-error" id="error-email">{move || errors.get().email}</span>
            </label>
            <label class="contact-form__field">
                <span>"Message"</span>
                <textarea
                    id="contact-message"
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <span class="field-error" id="error-message">{move || errors.get().message}</span>
            </label>
            <button type="submit" class="btn btn-primary">"Send message"</button>
            <p id="form-success" class="form-success" hidden=move || !sent.get()>
                "Thanks — we'll be in touch shortly."
            </p>
        </form>
    }
}
