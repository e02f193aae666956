//! Contact page

use leptos::prelude::*;

use super::seo::PageMeta;
use crate::ui::contact_form::ContactForm;

pub const CONTACT_EMAIL: &str = "hello@autoflow-automation.com";
pub const CONTACT_PHONE: &str = "+1 (555) 010-2040";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Contact"
            description="Tell us about your processes and get a free automation plan within 24 hours."
            path="/contact"
        />

        <section class="page-hero">
            <div class="container">
                <h1 class="reveal">"Let's Automate Your Business"</h1>
                <p class="page-hero-subtitle reveal">
                    "Share a few details and we will get back to you within 24 hours."
                </p>
            </div>
        </section>

        <section class="section">
            <div class="container contact-layout">
                <aside class="contact-info reveal">
                    <h2>"Get in touch"</h2>
                    <p>"Prefer email or a call? Reach us directly."</p>
                    <ul class="contact-details">
                        <li>
                            <span class="contact-detail-label">"Email"</span>
                            <a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
                        </li>
                        <li>
                            <span class="contact-detail-label">"Phone"</span>
                            <a href=format!("tel:{}", CONTACT_PHONE.replace([' ', '(', ')', '-'], ""))>
                                {CONTACT_PHONE}
                            </a>
                        </li>
                        <li>
                            <span class="contact-detail-label">"Hours"</span>
                            "Monday to Friday, 9:00 to 18:00"
                        </li>
                    </ul>
                </aside>

                <ContactForm />
            </div>
        </section>
    }
}
