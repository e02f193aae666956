//! Legal pages rendered from bundled markdown

use leptos::prelude::*;

use super::seo::PageMeta;
use crate::ui::markdown::MarkdownDocument;

/// Date shown under every legal page title
pub const LAST_UPDATED: &str = "January 15, 2025";

/// The legal documents the site publishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDocument {
    PrivacyPolicy,
    TermsOfService,
    CookiePolicy,
    Disclaimer,
}

impl LegalDocument {
    pub const ALL: [LegalDocument; 4] = [
        LegalDocument::PrivacyPolicy,
        LegalDocument::TermsOfService,
        LegalDocument::CookiePolicy,
        LegalDocument::Disclaimer,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            LegalDocument::PrivacyPolicy => "/privacy-policy",
            LegalDocument::TermsOfService => "/terms-of-service",
            LegalDocument::CookiePolicy => "/cookie-policy",
            LegalDocument::Disclaimer => "/disclaimer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LegalDocument::PrivacyPolicy => "Privacy Policy",
            LegalDocument::TermsOfService => "Terms of Service",
            LegalDocument::CookiePolicy => "Cookie Policy",
            LegalDocument::Disclaimer => "Disclaimer",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            LegalDocument::PrivacyPolicy => {
                "How AutoFlow Automation collects, uses and protects the information you share with us."
            }
            LegalDocument::TermsOfService => {
                "The terms that govern use of the AutoFlow Automation website and services."
            }
            LegalDocument::CookiePolicy => "Which cookies this website uses and how to control them.",
            LegalDocument::Disclaimer => "Limits on the information published on this website.",
        }
    }

    /// Markdown source of the document body
    pub fn markdown(&self) -> &'static str {
        match self {
            LegalDocument::PrivacyPolicy => {
                include_str!("../../../content/legal/privacy-policy.md")
            }
            LegalDocument::TermsOfService => {
                include_str!("../../../content/legal/terms-of-service.md")
            }
            LegalDocument::CookiePolicy => include_str!("../../../content/legal/cookie-policy.md"),
            LegalDocument::Disclaimer => include_str!("../../../content/legal/disclaimer.md"),
        }
    }
}

/// Page layout shared by all legal documents
#[component]
fn LegalPage(document: LegalDocument) -> impl IntoView {
    view! {
        <PageMeta
            title=document.title()
            description=document.description()
            path=document.path()
        />

        <section class="page-hero page-hero-compact">
            <div class="container">
                <h1>{document.title()}</h1>
                <p class="legal-updated">"Last updated: " {LAST_UPDATED}</p>
            </div>
        </section>

        <section class="section">
            <div class="container legal-layout">
                <MarkdownDocument content=document.markdown() />
            </div>
        </section>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! { <LegalPage document=LegalDocument::PrivacyPolicy /> }
}

#[component]
pub fn TermsOfServicePage() -> impl IntoView {
    view! { <LegalPage document=LegalDocument::TermsOfService /> }
}

#[component]
pub fn CookiePolicyPage() -> impl IntoView {
    view! { <LegalPage document=LegalDocument::CookiePolicy /> }
}

#[component]
pub fn DisclaimerPage() -> impl IntoView {
    view! { <LegalPage document=LegalDocument::Disclaimer /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::markdown::render_markdown;

    #[test]
    fn test_every_document_has_sections() {
        for document in LegalDocument::ALL {
            let rendered = render_markdown(document.markdown());
            assert!(
                rendered.headings.iter().filter(|h| h.level == 2).count() >= 3,
                "{} should have at least three sections",
                document.title()
            );
            assert!(!rendered.html.contains("<script"));
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = LegalDocument::ALL.iter().map(|d| d.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), LegalDocument::ALL.len());
    }

    #[test]
    fn test_privacy_policy_mentions_contact_data() {
        let markdown = LegalDocument::PrivacyPolicy.markdown();
        assert!(markdown.contains("contact form"));
        assert!(markdown.contains("Supabase"));
    }
}
