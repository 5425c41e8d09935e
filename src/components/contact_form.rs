//! Contact section: validated enquiry form with a simulated submission.

use leptos::prelude::*;

use crate::components::notification_stack::notify;
use crate::components::reveal::Reveal;
use crate::components::ripple_button::RippleButton;
use crate::state::contact::{ContactForm, SubmitStatus};
use crate::state::notifications::{NotificationKind, NotificationState};

#[component]
pub fn ContactSection(countries: Vec<String>) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get_untracked().is_sending() {
            return;
        }
        match form.get_untracked().validate() {
            Ok(submission) => {
                leptos::logging::log!("contact enquiry from {} <{}>", submission.name, submission.email);
                form.update(|f| f.status = SubmitStatus::Sending);
                finish_submission(form, notifications);
            }
            Err(e) => notify(notifications, NotificationKind::Error, e.to_string()),
        }
    };

    let options = countries
        .into_iter()
        .map(|country| {
            let label = country.clone();
            view! { <option value=country>{label}</option> }
        })
        .collect_view();

    view! {
        <section id="contact" class="contact-section">
            <Reveal>
                <h2 class="section-title">"Let's talk"</h2>
            </Reveal>
            <form class="contact-form" novalidate=true on:submit=on_submit>
                <label class="form-field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        name="name"
                        maxlength="255"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <small class=move || form.get().name_tone().class()>{move || form.get().name_counter()}</small>
                </label>
                <label class="form-field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        name="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Company"</span>
                    <input
                        type="text"
                        name="company"
                        prop:value=move || form.get().company
                        on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Country"</span>
                    <select
                        name="country"
                        prop:value=move || form.get().country
                        on:change=move |ev| form.update(|f| f.country = event_target_value(&ev))
                    >
                        <option value="">"Select a country"</option>
                        {options}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Message"</span>
                    <textarea
                        name="message"
                        class="message-textarea"
                        maxlength="300"
                        prop:value=move || form.get().message
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                    <small class=move || form.get().message_tone().class()>
                        {move || form.get().message_counter()}
                    </small>
                </label>
                <RippleButton class="btn-contact" kind="submit" disabled=Signal::derive(move || form.get().is_sending())>
                    {move || if form.get().is_sending() { "Sending..." } else { "Send message" }}
                </RippleButton>
            </form>
        </section>
    }
}

/// Stand-in for a network round trip: wait, confirm, then clear the form.
fn finish_submission(form: RwSignal<ContactForm>, notifications: RwSignal<NotificationState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::consts::SUBMIT_DELAY_MS;

        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SUBMIT_DELAY_MS))).await;
            if form.try_update(ContactForm::reset).is_none() {
                return;
            }
            notify(notifications, NotificationKind::Success, "Message sent! We will be in touch soon.");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        form.update(ContactForm::reset);
        notify(notifications, NotificationKind::Success, "Message sent! We will be in touch soon.");
    }
}
