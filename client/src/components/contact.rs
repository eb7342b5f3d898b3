//! Contact section with a simulated message form.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::reveal::{reveal_style, use_reveal};
use crate::content::CONTACT_CHANNELS;
use crate::state::contact::{ContactField, ContactState, SubmitStatus};
use crate::state::reveal::{CONTACT_THRESHOLD, RevealOptions};

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let options = RevealOptions::new(CONTACT_THRESHOLD);
    let revealed = use_reveal(section_ref, options);
    let state = RwSignal::new(ContactState::default());

    let submitting = move || state.with(|s| s.status == SubmitStatus::Submitting);
    let submitted = move || state.with(ContactState::shows_confirmation);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.try_update(ContactState::begin_submit).unwrap_or(false) {
            return;
        }
        log::debug!("contact: simulated submission started");

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::contact::{CONFIRMATION_DURATION, SUBMIT_DELAY};

            gloo_timers::future::sleep(SUBMIT_DELAY).await;
            if state.try_update(ContactState::finish_submit).is_none() {
                return;
            }
            gloo_timers::future::sleep(CONFIRMATION_DURATION).await;
            state.try_update(ContactState::dismiss_confirmation);
        });
    };

    let field_input = move |field: ContactField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            state.update(|s| s.set_field(field, value));
        }
    };

    view! {
        <section node_ref=section_ref id="contact" class="section section--alt">
            <div class="section__inner">
                <header class="section__header reveal reveal--from-below" class:is-visible=revealed>
                    <p class="section__eyebrow">"<Contact />"</p>
                    <h2 class="section__title">"Let's " <span class="text-gradient">"Connect"</span></h2>
                    <p class="section__lead">
                        "Have a project in mind or just want to say hello? My inbox is always open."
                    </p>
                </header>

                <div class="contact__grid">
                    <ul
                        class="contact__channels reveal reveal--from-left"
                        class:is-visible=revealed
                        style=reveal_style(options.with_delay_ms(200))
                    >
                        {CONTACT_CHANNELS
                            .iter()
                            .map(|channel| {
                                view! {
                                    <li class="card contact__channel">
                                        <p class="contact__channel-label">{channel.label}</p>
                                        <a class="contact__channel-value" href=channel.href>
                                            {channel.value}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <div
                        class="contact__panel reveal reveal--from-right"
                        class:is-visible=revealed
                        style=reveal_style(options.with_delay_ms(400))
                    >
                        <Show when=move || !submitted() fallback=ConfirmationPanel>
                            <form class="card contact__form" on:submit=on_submit>
                                <label class="field">
                                    <span class="field__label">"Name"</span>
                                    <input
                                        class="field__input"
                                        type="text"
                                        name="name"
                                        required
                                        placeholder="Your name"
                                        prop:value=move || state.with(|s| s.form.name.clone())
                                        on:input=field_input(ContactField::Name)
                                    />
                                </label>
                                <label class="field">
                                    <span class="field__label">"Email"</span>
                                    <input
                                        class="field__input"
                                        type="email"
                                        name="email"
                                        required
                                        placeholder="you@example.com"
                                        prop:value=move || state.with(|s| s.form.email.clone())
                                        on:input=field_input(ContactField::Email)
                                    />
                                </label>
                                <label class="field">
                                    <span class="field__label">"Message"</span>
                                    <textarea
                                        class="field__input field__input--area"
                                        name="message"
                                        rows="5"
                                        required
                                        placeholder="Tell me about your idea"
                                        prop:value=move || state.with(|s| s.form.message.clone())
                                        on:input=field_input(ContactField::Message)
                                    ></textarea>
                                </label>

                                <button class="btn btn--primary contact__submit" type="submit" disabled=submitting>
                                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                                </button>
                            </form>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Shown in place of the form while a submission is confirmed.
#[component]
fn ConfirmationPanel() -> impl IntoView {
    view! {
        <div class="card contact__confirmation" role="status">
            <p class="contact__confirmation-icon" aria-hidden="true">"✓"</p>
            <h3 class="contact__confirmation-title">"Message Sent!"</h3>
            <p>"Thanks for reaching out! I'll get back to you soon."</p>
        </div>
    }
}
