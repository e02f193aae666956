//! Not found page component
//!
//! Shown for any route the router does not know.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::seo::page_title;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Report a real 404 status when rendered on the server
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=page_title("Page Not Found") />

        <section class="page-hero not-found">
            <div class="container">
                <h1 class="not-found-code">"404"</h1>
                <h2>"Page Not Found"</h2>
                <p class="page-hero-subtitle">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <div class="hero-actions">
                    <A href="/" attr:class="btn btn-primary">"Go Home"</A>
                    <A href="/contact" attr:class="btn btn-secondary">"Contact Us"</A>
                </div>
            </div>
        </section>
    }
}
