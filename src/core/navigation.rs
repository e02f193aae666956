//! Site navigation

/// Scroll offset after which the navbar switches to its compact style
pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// A link in the navbar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "/",
        label: "Home",
    },
    NavLink {
        href: "/services",
        label: "Services",
    },
    NavLink {
        href: "/portfolio",
        label: "Portfolio",
    },
    NavLink {
        href: "/guarantees",
        label: "Guarantees",
    },
    NavLink {
        href: "/contact",
        label: "Contact",
    },
];

/// Whether the navbar should use its scrolled style
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

impl NavLink {
    /// Whether this link points at the current page.
    ///
    /// Home only matches exactly; other links also match their sub-paths.
    pub fn is_active(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        if self.href == "/" {
            return path == "/" || path.is_empty();
        }
        let path = path.trim_end_matches('/');
        path == self.href
            || path
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }

    #[test]
    fn test_active_link() {
        let home = NAV_LINKS[0];
        let services = NAV_LINKS[1];

        assert!(home.is_active("/"));
        assert!(!home.is_active("/services"));

        assert!(services.is_active("/services"));
        assert!(services.is_active("/services/"));
        assert!(services.is_active("/services#ai"));
        assert!(!services.is_active("/services-old"));
        assert!(!services.is_active("/"));
    }

    #[test]
    fn test_exactly_one_active_link_per_page() {
        for link in NAV_LINKS {
            let active = NAV_LINKS.iter().filter(|l| l.is_active(link.href)).count();
            assert_eq!(active, 1, "{}", link.href);
        }
    }
}
