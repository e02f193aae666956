//! Infinite logo marquee

use leptos::prelude::*;

use crate::core::logos::{Logo, PARTNER_LOGOS, marquee_track};

/// Scrolling strip of tool logos.
///
/// The track holds the list twice and slides by half its width, so the loop
/// has no visible seam. Hovering slows it down instead of stopping it.
#[component]
pub fn LogoCloud(
    /// Logos to show
    #[prop(default = PARTNER_LOGOS)]
    logos: &'static [Logo],
    /// Gap between logos in pixels
    #[prop(default = 60)]
    gap: u32,
    /// Seconds for one full loop
    #[prop(default = 40)]
    duration_secs: u32,
    /// Seconds for one full loop while hovered
    #[prop(default = 120)]
    hover_duration_secs: u32,
) -> impl IntoView {
    let style = format!(
        "--logo-gap: {}px; --logo-loop: {}s; --logo-loop-hover: {}s;",
        gap, duration_secs, hover_duration_secs
    );

    view! {
        <div class="logo-cloud" style=style>
            <div class="logo-cloud-track">
                {marquee_track(logos)
                    .into_iter()
                    .enumerate()
                    .map(|(index, (key, logo))| {
                        // Second copy is only there for the loop
                        let duplicate = index >= logos.len();
                        view! {
                            <img
                                class="logo-cloud-item"
                                data-key=key
                                src=logo.src
                                alt=logo.alt
                                loading="lazy"
                                draggable="false"
                                aria-hidden=duplicate.then_some("true")
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
