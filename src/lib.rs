//! AutoFlow - marketing site for an automation services business
//!
//! Server-rendered Leptos pages hydrated in the browser, with a contact form
//! whose submissions are stored in Supabase through the site's own API.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
