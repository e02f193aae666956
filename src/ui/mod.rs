//! Leptos components for the site: page chrome, pages and the contact form.

pub mod common;
pub mod contact_client;
pub mod contact_form;
pub mod hero_orbit;
pub mod layout;
pub mod logo_cloud;
pub mod markdown;
pub mod notifications;
pub mod pages;

pub use contact_client::ApiGateway;
pub use contact_form::ContactForm;
pub use layout::{Footer, Navbar, ScrollRevealScript};
pub use notifications::{
    NotificationManager, NotificationsContainer, provide_notifications, use_notifications,
};
