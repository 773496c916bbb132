use electrotools_core::{Field, PageEvent};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::content::{CONTACT_DETAILS, section};
use crate::controller::PageContext;

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let page = ctx.page;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(PageEvent::FormSubmitted);
    };

    view! {
        <section id=section::CONTACT class="contact">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p class="section-description">
                        "Need a quote, a hard-to-find part or advice on the right tester? Drop us a line."
                    </p>
                    <ul class="contact-details">
                        {CONTACT_DETAILS.iter().map(|detail| {
                            view! { <li><i class=detail.icon></i>" "{detail.text}</li> }
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
                    <FormField field=Field::Name label="Name" />
                    <FormField field=Field::Email label="Email" />
                    <FormField field=Field::Message label="Message" />
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || page.with(|p| p.form().button_disabled())
                    >
                        {move || page.with(|p| p.submit_label().to_string())}
                    </button>
                </form>
            </div>
        </section>
    }
}

/// One labelled input with its inline error message.
#[component]
fn FormField(field: Field, label: &'static str) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let page = ctx.page;
    let id = field.id();

    let value = move || page.with(|p| p.form().value(field).to_string());
    let error = move || page.with(|p| p.form().error(field).map(|e| e.message()));
    let border = move || if error().is_some() { "var(--danger)" } else { "" };
    let on_input = move |ev: web_sys::Event| {
        ctx.dispatch(PageEvent::FieldEdited {
            field,
            value: event_target_value(&ev),
        })
    };

    let input = if field == Field::Message {
        view! {
            <textarea id=id name=id rows="5" style:border-color=border prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        let kind = if field == Field::Email { "email" } else { "text" };
        view! {
            <input type=kind id=id name=id style:border-color=border prop:value=value on:input=on_input />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            {input}
            {move || error().map(|message| view! { <div class="error-message">{message}</div> })}
        </div>
    }
}
