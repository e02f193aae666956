//! Core domain models and business logic of the site

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod decor;
pub mod logos;
pub mod navigation;
pub mod notification;
pub mod portfolio;

pub use notification::{Notification, NotificationType};
