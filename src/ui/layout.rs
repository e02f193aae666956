//! Page chrome shared by every route: navbar, footer and the scroll-reveal
//! script.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::navigation::NAV_LINKS;

/// Fixed navbar with active-link highlighting and a mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let (scrolled, _set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or(0.0);
            _set_scrolled.set(crate::core::navigation::is_scrolled(y));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-container">
                <A href="/" attr:class="nav-logo">
                    <span class="nav-logo-mark">"AF"</span>
                    <span class="nav-logo-text">"AutoFlow"</span>
                </A>

                <ul class="nav-menu" class:active=move || mobile_menu_open.get()>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let link = *link;
                            view! {
                                <li class="nav-item">
                                    <A
                                        href=link.href
                                        attr:class=move || {
                                            if link.is_active(&location.pathname.get()) {
                                                "nav-link active"
                                            } else {
                                                "nav-link"
                                            }
                                        }
                                        on:click=move |_| set_mobile_menu_open.set(false)
                                    >
                                        {link.label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    class="hamburger"
                    class:active=move || mobile_menu_open.get()
                    on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="nav-logo-text">"AutoFlow"</span>
                    <p>"We automate the busywork so your team can focus on growth."</p>
                </div>

                <div class="footer-links">
                    <h4>"Company"</h4>
                    <ul>
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <li><A href=link.href>{link.label}</A></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-links">
                    <h4>"Legal"</h4>
                    <ul>
                        <li><A href="/privacy-policy">"Privacy Policy"</A></li>
                        <li><A href="/terms-of-service">"Terms of Service"</A></li>
                        <li><A href="/cookie-policy">"Cookie Policy"</A></li>
                        <li><A href="/disclaimer">"Disclaimer"</A></li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                "© 2025 AutoFlow Automation. All rights reserved."
            </div>
        </footer>
    }
}

/// Reveal `.reveal` elements once as they scroll into view
#[component]
pub fn ScrollRevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initReveal() {
                    if (!('IntersectionObserver' in window)) {
                        document.querySelectorAll('.reveal').forEach(el => el.classList.add('visible'));
                        return;
                    }
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    const observeAll = () => document
                        .querySelectorAll('.reveal:not(.visible)')
                        .forEach(el => observer.observe(el));
                    observeAll();

                    // Client-side navigation swaps page content without a reload
                    new MutationObserver(observeAll).observe(document.body, {
                        childList: true,
                        subtree: true
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveal);
                } else {
                    initReveal();
                }
            })();
            "#
        </script>
    }
}
