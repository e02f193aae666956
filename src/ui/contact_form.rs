//! Contact form component
//!
//! Thin view over [`FormController`]: inputs write into the controller,
//! the submit button and the "custom service" field read from it, and the
//! gateway call runs in a local task between `begin_submit` and
//! `finish_submit`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::contact::{ContactField, FormController, ServiceOption, SubmissionGateway};
use crate::ui::common::{FormField, SelectField, TextAreaField};
use crate::ui::contact_client::ApiGateway;
use crate::ui::notifications::use_notifications;

/// Contact form wired to the contact API
#[component]
pub fn ContactForm() -> impl IntoView {
    let notifications = use_notifications();
    let controller = RwSignal::new(FormController::new(ApiGateway::default()));
    let form_message = RwSignal::new(None::<&'static str>);

    let value_of = move |field: ContactField| {
        Signal::derive(move || controller.with(|c| c.form().get(field).to_string()))
    };
    let setter = move |field: ContactField| {
        Callback::new(move |value: String| {
            form_message.set(None);
            controller.update(|c| c.set_field(field, value));
        })
    };

    let sending = Signal::derive(move || controller.with(|c| c.submit_button().disabled));
    let custom_field = Memo::new(move |_| controller.with(|c| c.custom_service_field()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let started = controller.try_update(|c| {
            c.begin_submit()
                .map(|record| (record, c.gateway().clone()))
        });

        match started {
            Some(Ok((record, gateway))) => {
                form_message.set(None);
                spawn_local(async move {
                    let result = gateway.submit(&record).await;
                    if let Err(err) = &result {
                        leptos::logging::error!("Contact form submission failed: {}", err);
                    }
                    if let Some(notification) = controller.try_update(|c| c.finish_submit(result))
                    {
                        notifications.notify(notification);
                    }
                });
            }
            Some(Err(rejected)) => {
                leptos::logging::log!("Contact form not submitted: {}", rejected);
                form_message.set(rejected.user_message());
            }
            None => {}
        }
    };

    view! {
        <form id="contactForm" class="contact-form reveal" on:submit=on_submit>
            <div class="form-row">
                <FormField
                    id="name"
                    label="Full Name"
                    required=true
                    placeholder="Jane Doe"
                    autocomplete="name"
                    value=value_of(ContactField::Name)
                    on_input=setter(ContactField::Name)
                    disabled=sending
                />
                <FormField
                    id="email"
                    label="Email Address"
                    required=true
                    input_type="email"
                    placeholder="jane@company.com"
                    autocomplete="email"
                    value=value_of(ContactField::Email)
                    on_input=setter(ContactField::Email)
                    disabled=sending
                />
            </div>

            <div class="form-row">
                <FormField
                    id="phone"
                    label="Phone Number"
                    input_type="tel"
                    placeholder="+1 555 000 0000"
                    autocomplete="tel"
                    value=value_of(ContactField::Phone)
                    on_input=setter(ContactField::Phone)
                    disabled=sending
                />
                <SelectField
                    id="service"
                    label="Service Needed"
                    placeholder="Select a service"
                    required=true
                    value=value_of(ContactField::Service)
                    on_change=setter(ContactField::Service)
                    options=ServiceOption::select_options()
                    disabled=sending
                />
            </div>

            <div
                id="customServiceGroup"
                class="form-conditional"
                style:display=move || if custom_field.get().visible { "block" } else { "none" }
            >
                <FormField
                    id="customService"
                    label="Describe the service"
                    required=Signal::derive(move || custom_field.get().required)
                    placeholder="What should we automate for you?"
                    value=value_of(ContactField::CustomService)
                    on_input=setter(ContactField::CustomService)
                    disabled=sending
                />
            </div>

            <TextAreaField
                id="message"
                label="Project Details"
                placeholder="Tell us about your processes, tools and goals"
                value=value_of(ContactField::Message)
                on_input=setter(ContactField::Message)
                disabled=sending
            />

            {move || form_message.get().map(|message| view! {
                <p class="form-error" role="alert">{message}</p>
            })}

            <button
                type="submit"
                class="btn btn-primary btn-block"
                disabled=move || sending.get()
            >
                {move || controller.with(|c| c.submit_button().label)}
            </button>
        </form>
    }
}
