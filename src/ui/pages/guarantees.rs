//! Guarantees page

use leptos::prelude::*;
use leptos_router::components::A;

use super::seo::PageMeta;

/// A commitment shown on the guarantees page and the home page
#[derive(Clone, Copy, Debug)]
pub struct Guarantee {
    pub title: &'static str,
    pub detail: &'static str,
    pub badge: &'static str,
}

pub const GUARANTEES: &[Guarantee] = &[
    Guarantee {
        title: "Results or Your Money Back",
        detail: "If an automation does not deliver the time savings we agreed on within 60 days, we refund the project fee.",
        badge: "60 days",
    },
    Guarantee {
        title: "Response Within 24 Hours",
        detail: "Every enquiry gets a reply from a real engineer by the next business day.",
        badge: "24h",
    },
    Guarantee {
        title: "Fixed Price Quotes",
        detail: "Scope and price are agreed before work starts. No hourly surprises.",
        badge: "Fixed",
    },
    Guarantee {
        title: "Free Maintenance Period",
        detail: "Bug fixes and adjustments are included for the first 90 days after launch.",
        badge: "90 days",
    },
    Guarantee {
        title: "Your Data Stays Yours",
        detail: "Workflows run in your accounts and all credentials are handed over at the end of the project.",
        badge: "Owned",
    },
    Guarantee {
        title: "Documentation Included",
        detail: "Each delivery ships with a written runbook so your team can operate it without us.",
        badge: "Docs",
    },
];

/// Grid of guarantee cards
#[component]
pub fn GuaranteeGrid(
    /// Number of cards to show, all when unset
    #[prop(optional)]
    limit: Option<usize>,
) -> impl IntoView {
    let shown = limit.unwrap_or(GUARANTEES.len());

    view! {
        <div class="guarantee-grid">
            {GUARANTEES
                .iter()
                .take(shown)
                .map(|g| view! {
                    <div class="guarantee-card reveal">
                        <span class="guarantee-badge">{g.badge}</span>
                        <h3>{g.title}</h3>
                        <p>{g.detail}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn GuaranteesPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Our Guarantees"
            description="Fixed prices, a 24 hour response time and a money back promise on every automation project."
            path="/guarantees"
        />

        <section class="page-hero">
            <div class="container">
                <h1 class="reveal">"Our Guarantees"</h1>
                <p class="page-hero-subtitle reveal">
                    "We only win when your team gets its time back. These promises are part of every engagement."
                </p>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <GuaranteeGrid />
            </div>
        </section>

        <section class="section cta-section">
            <div class="container reveal">
                <h2>"Ready to start risk free?"</h2>
                <A href="/contact" attr:class="btn btn-primary">"Book a Free Consultation"</A>
            </div>
        </section>
    }
}
