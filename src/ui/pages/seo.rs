use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

/// Public origin used for canonical and Open Graph urls
pub const SITE_URL: &str = "https://autoflow-automation.com";

/// Brand suffix appended to every page title
pub const SITE_NAME: &str = "AutoFlow Automation";

/// Full `<title>` text for a page
pub fn page_title(title: &str) -> String {
    if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{} | {}", title, SITE_NAME)
    }
}

/// Per-page title, description, canonical link and social cards
#[component]
pub fn PageMeta(
    /// Page title without the brand suffix
    title: &'static str,
    /// Meta description
    description: &'static str,
    /// Route path, used for the canonical url
    path: &'static str,
) -> impl IntoView {
    let full_title = page_title(title);
    let url = format!("{}{}", SITE_URL, path);

    view! {
        <Title text=full_title.clone() />
        <Meta name="description" content=description />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=url.clone() />
        <Meta property="og:title" content=full_title.clone() />
        <Meta property="og:description" content=description />

        // Twitter
        <Meta property="twitter:card" content="summary" />
        <Meta property="twitter:title" content=full_title />
        <Meta property="twitter:description" content=description />

        <Link rel="canonical" href=url />
    }
}
