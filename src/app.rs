use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{
    ContactPage, CookiePolicyPage, DisclaimerPage, GuaranteesPage, HomePage, NotFoundPage,
    PortfolioPage, PrivacyPolicyPage, SITE_NAME, ServicesPage, TermsOfServicePage,
};
use crate::ui::{
    Footer, Navbar, NotificationsContainer, ScrollRevealScript, provide_notifications,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let notifications = provide_notifications();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/autoflow.css"/>

        // Fallback title, pages override it through PageMeta
        <Title text=SITE_NAME/>

        <Router>
            <Navbar/>
            <NotificationsContainer notifications=notifications.notifications()/>
            <main class="site-main">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/services") view=ServicesPage/>
                    <Route path=path!("/portfolio") view=PortfolioPage/>
                    <Route path=path!("/guarantees") view=GuaranteesPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/privacy-policy") view=PrivacyPolicyPage/>
                    <Route path=path!("/terms-of-service") view=TermsOfServicePage/>
                    <Route path=path!("/cookie-policy") view=CookiePolicyPage/>
                    <Route path=path!("/disclaimer") view=DisclaimerPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
        <ScrollRevealScript/>
    }
}
