//! Services page

use leptos::prelude::*;
use leptos_router::components::A;

use super::seo::PageMeta;
use crate::core::contact::ServiceOption;

/// Cards for every offered service
#[component]
pub fn ServiceCards(
    /// Number of cards to show, all when unset
    #[prop(optional)]
    limit: Option<usize>,
) -> impl IntoView {
    let services: Vec<ServiceOption> = ServiceOption::offered()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    view! {
        <div class="service-grid">
            {services
                .into_iter()
                .map(|service| view! {
                    <div class="service-card reveal" id=service.value()>
                        <h3>{service.label()}</h3>
                        <p>{service.summary()}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

const PROCESS_STEPS: &[(&str, &str)] = &[
    ("Discover", "A free call to map the processes that cost you the most time."),
    ("Design", "A written plan with scope, tools and a fixed price."),
    ("Build", "We implement and test the automation against your real data."),
    ("Support", "Launch, train your team and stay on call for 90 days."),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Services"
            description="Workflow automation, AI agents, chatbots, voice agents, CRM integration and custom development."
            path="/services"
        />

        <section class="page-hero">
            <div class="container">
                <h1 class="reveal">"Services"</h1>
                <p class="page-hero-subtitle reveal">
                    "From a single integration to a fleet of AI agents, we build automations that pay for themselves."
                </p>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <ServiceCards />
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <h2 class="section-title reveal">"How We Work"</h2>
                <ol class="process-steps">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, detail))| view! {
                            <li class="process-step reveal">
                                <span class="process-step-number">{i + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*detail}</p>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>

        <section class="section cta-section">
            <div class="container reveal">
                <h2>"Not sure where to start?"</h2>
                <p>"Tell us what slows your team down and we will suggest the first automation."</p>
                <A href="/contact" attr:class="btn btn-primary">"Get in Touch"</A>
            </div>
        </section>
    }
}
