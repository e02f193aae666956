//! Portfolio page with category filter

use leptos::prelude::*;

use super::seo::PageMeta;
use crate::core::portfolio::{ALL_FILTER, FILTERS, PORTFOLIO_ITEMS};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let (filter, set_filter) = signal(ALL_FILTER.to_string());

    view! {
        <PageMeta
            title="Portfolio"
            description="Case studies of automations, AI agents and integrations we have delivered."
            path="/portfolio"
        />

        <section class="page-hero">
            <div class="container">
                <h1 class="reveal">"Our Work"</h1>
                <p class="page-hero-subtitle reveal">
                    "A selection of projects and the results they produced."
                </p>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="portfolio-filters" role="group" aria-label="Filter projects">
                    {FILTERS
                        .iter()
                        .map(|(value, label)| {
                            let value = *value;
                            view! {
                                <button
                                    class="filter-btn"
                                    class:active=move || filter.with(|f| f == value)
                                    data-filter=value
                                    on:click=move |_| set_filter.set(value.to_string())
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="portfolio-grid">
                    {PORTFOLIO_ITEMS
                        .iter()
                        .map(|item| {
                            let item = *item;
                            view! {
                                <article
                                    class="portfolio-item"
                                    class:hidden=move || filter.with(|f| !item.matches(f))
                                    data-category=item.categories
                                >
                                    <h3>{item.title}</h3>
                                    <p>{item.summary}</p>
                                    <ul class="portfolio-tags">
                                        {item.categories()
                                            .map(|c| view! { <li>{c}</li> })
                                            .collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
