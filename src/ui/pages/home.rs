//! Home page
//!
//! Sections, top to bottom:
//! - Hero with the orbiting cube decoration
//! - Service highlights
//! - Partner logo marquee
//! - Guarantees
//! - Testimonials
//! - Contact call to action

use leptos::prelude::*;
use leptos_router::components::A;

use super::guarantees::GuaranteeGrid;
use super::seo::PageMeta;
use super::services::ServiceCards;
use crate::ui::hero_orbit::HeroOrbit;
use crate::ui::logo_cloud::LogoCloud;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Our onboarding went from two days of copy and paste to fifteen minutes.",
        author: "Maria L.",
        role: "Operations Lead, logistics company",
    },
    Testimonial {
        quote: "The voice agent handles most of our booking calls. Staff finally answer the hard ones.",
        author: "Daniel R.",
        role: "Owner, dental clinic",
    },
    Testimonial {
        quote: "Clear scope, fixed price and they delivered a week early.",
        author: "Priya S.",
        role: "Head of Sales, SaaS startup",
    },
];

const STATS: &[(&str, &str)] = &[
    ("120+", "Automations delivered"),
    ("35h", "Saved per client each month"),
    ("24h", "Response time"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageMeta
            title=""
            description="AutoFlow builds workflow automations, AI agents, chatbots and voice agents that give your team its time back."
            path="/"
        />

        <section class="hero">
            <div class="container hero-layout">
                <div class="hero-content">
                    <h1 class="hero-title reveal">
                        "Automate the Busywork."
                        <br />
                        <span class="gradient-text">"Scale What Matters."</span>
                    </h1>
                    <p class="hero-subtitle reveal">
                        "We design and run automations, AI agents and integrations for growing teams."
                    </p>
                    <div class="hero-actions reveal">
                        <A href="/contact" attr:class="btn btn-primary">"Start Your Project"</A>
                        <A href="/portfolio" attr:class="btn btn-secondary">"See Our Work"</A>
                    </div>
                    <dl class="hero-stats reveal">
                        {STATS
                            .iter()
                            .map(|(value, label)| view! {
                                <div class="hero-stat">
                                    <dt>{*value}</dt>
                                    <dd>{*label}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                </div>
                <HeroOrbit />
            </div>
        </section>

        <section class="section" id="services">
            <div class="container">
                <h2 class="section-title reveal">"What We Automate"</h2>
                <ServiceCards limit=4 />
                <div class="section-footer reveal">
                    <A href="/services" attr:class="btn btn-secondary">"All Services"</A>
                </div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <h2 class="section-title reveal">"Works With the Tools You Already Use"</h2>
                <LogoCloud />
            </div>
        </section>

        <section class="section">
            <div class="container">
                <h2 class="section-title reveal">"Our Guarantees"</h2>
                <GuaranteeGrid limit=3 />
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <h2 class="section-title reveal">"What Clients Say"</h2>
                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <figure class="testimonial-card reveal">
                                <blockquote>{t.quote}</blockquote>
                                <figcaption>
                                    <strong>{t.author}</strong>
                                    <span>{t.role}</span>
                                </figcaption>
                            </figure>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section cta-section">
            <div class="container reveal">
                <h2>"Ready to get your time back?"</h2>
                <p>"Tell us about your processes. We reply within 24 hours."</p>
                <A href="/contact" attr:class="btn btn-primary">"Contact Us"</A>
            </div>
        </section>
    }
}
