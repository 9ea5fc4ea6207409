// Contact page - Formspree-backed form
use chaos::contact::{ContactForm, ContactSubject, FormEndpoint, SubmissionState, FAQS, TRAVEL_INTERESTS};
use chaos::SiteConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::formspree;

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let endpoint = StoredValue::new(FormEndpoint::formspree(&config.contact.formspree_form_id));
    let form = RwSignal::new(ContactForm::default());
    let state = RwSignal::new(SubmissionState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(SubmissionState::is_submitting) {
            return;
        }

        let missing = form.with_untracked(ContactForm::missing_fields);
        if !missing.is_empty() {
            state.set(SubmissionState::Failed(vec![format!(
                "Please fill in: {}",
                missing.join(", ")
            )]));
            return;
        }

        let submission = form.with_untracked(ContactForm::submission);
        let endpoint = endpoint.get_value();
        state.set(SubmissionState::Submitting);
        spawn_local(async move {
            let outcome = formspree::submit(&endpoint, &submission).await;
            state.try_set(outcome);
        });
    };

    let reset = move |_| {
        form.set(ContactForm::default());
        state.set(SubmissionState::Idle);
    };

    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Get in Touch"</h1>
                <p class="page-description">
                    "Planning a trip, got a question, or want to collaborate? Drop us a line."
                </p>
            </div>
        </section>

        <section class="contact">
            <div class="container contact-grid">
                <Show
                    when=move || state.with(|s| *s != SubmissionState::Succeeded)
                    fallback=move || {
                        view! {
                            <div class="contact-success">
                                <div class="contact-success-icon">"✅"</div>
                                <h2>"Message sent!"</h2>
                                <p>"Thanks for reaching out. We'll get back to you within 24 hours."</p>
                                <button class="btn btn-primary" on:click=reset>"Send Another Message"</button>
                            </div>
                        }
                    }
                >
                    <form class="contact-form" on:submit=on_submit>
                        <div class="form-row">
                            <label class="form-field">
                                <span class="form-label">"Name *"</span>
                                <input
                                    type="text"
                                    name="name"
                                    required
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span class="form-label">"Email *"</span>
                                <input
                                    type="email"
                                    name="email"
                                    required
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                            </label>
                        </div>

                        <label class="form-field">
                            <span class="form-label">"Subject *"</span>
                            <select
                                name="subject"
                                required
                                on:change=move |ev| form.update(|f| f.subject = event_target_value(&ev).parse().ok())
                            >
                                <option value="" selected=move || form.with(|f| f.subject.is_none())>
                                    "Choose a topic"
                                </option>
                                {ContactSubject::ALL
                                    .into_iter()
                                    .map(|subject| {
                                        view! {
                                            <option
                                                value=subject.value()
                                                selected=move || form.with(|f| f.subject == Some(subject))
                                            >
                                                {subject.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <label class="form-field">
                            <span class="form-label">"Message *"</span>
                            <textarea
                                name="message"
                                rows="6"
                                required
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                        </label>

                        <fieldset class="form-field interests">
                            <legend class="form-label">"Travel interests"</legend>
                            <div class="interest-grid">
                                {TRAVEL_INTERESTS
                                    .into_iter()
                                    .map(|interest| {
                                        view! {
                                            <label class="interest">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || form.with(|f| f.has_interest(interest))
                                                    on:change=move |_| form.update(|f| f.toggle_interest(interest))
                                                />
                                                {interest}
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </fieldset>

                        <ul class="form-errors">
                            {move || {
                                state.with(|s| {
                                    s.errors()
                                        .iter()
                                        .map(|message| view! { <li class="form-error">{message.clone()}</li> })
                                        .collect::<Vec<_>>()
                                })
                            }}
                        </ul>

                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || state.with(SubmissionState::is_submitting)
                        >
                            {move || if state.with(SubmissionState::is_submitting) { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </Show>

                <aside class="contact-info">
                    <h3>"Other ways to reach us"</h3>
                    <p>"📧 " <a href=format!("mailto:{}", config.site.contact_email)>{config.site.contact_email.clone()}</a></p>
                    <p>"⏱️ We reply within 24 hours"</p>
                    <p>"🌍 Based wherever the road takes us"</p>

                    <h3 class="faq-title">"Quick Answers"</h3>
                    <dl class="faq">
                        {FAQS
                            .into_iter()
                            .map(|(question, answer)| {
                                view! {
                                    <dt class="faq-question">{question}</dt>
                                    <dd class="faq-answer">{answer}</dd>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </dl>
                </aside>
            </div>
        </section>
    }
}
