//! Decorative hero animation: a glowing core with cubes orbiting it

use leptos::prelude::*;

use crate::core::decor::orbit_positions;

/// Orbit radius in pixels
const ORBIT_RADIUS: f64 = 140.0;

#[component]
pub fn HeroOrbit() -> impl IntoView {
    view! {
        <div class="hero-orbit" aria-hidden="true">
            <svg class="hero-orbit-lines" viewBox="-160 -160 320 320">
                {orbit_positions(ORBIT_RADIUS)
                    .into_iter()
                    .map(|point| view! {
                        <line
                            x1="0"
                            y1="0"
                            x2=format!("{:.2}", point.x)
                            y2=format!("{:.2}", point.y)
                            stroke=point.color
                        />
                    })
                    .collect_view()}
            </svg>
            <div class="hero-orbit-core"></div>
            <div class="hero-orbit-ring">
                {orbit_positions(ORBIT_RADIUS)
                    .into_iter()
                    .map(|point| {
                        let style = format!(
                            "--orbit-x: {:.2}px; --orbit-y: {:.2}px; --orbit-phase: {:.0}deg; --orbit-color: {};",
                            point.x, point.y, point.angle_deg, point.color
                        );
                        view! { <div class="hero-orbit-cube" style=style></div> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
