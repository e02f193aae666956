//! Site pages
//!
//! One component per route, plus the shared `PageMeta` head tags.

mod contact;
mod guarantees;
mod home;
mod legal;
mod not_found;
mod portfolio;
mod seo;
mod services;

pub use contact::ContactPage;
pub use guarantees::GuaranteesPage;
pub use home::HomePage;
pub use legal::{
    CookiePolicyPage, DisclaimerPage, LegalDocument, PrivacyPolicyPage, TermsOfServicePage,
};
pub use not_found::NotFoundPage;
pub use portfolio::PortfolioPage;
pub use seo::{PageMeta, SITE_NAME, page_title};
pub use services::ServicesPage;
