//! Portfolio case studies and the category filter

/// Filter value that shows every item
pub const ALL_FILTER: &str = "all";

/// A case study card on the portfolio page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub summary: &'static str,
    /// Space separated category slugs
    pub categories: &'static str,
}

impl PortfolioItem {
    pub fn categories(&self) -> impl Iterator<Item = &'static str> {
        self.categories.split_whitespace()
    }

    /// Whether the item is shown for the given filter
    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL_FILTER || self.categories().any(|c| c == filter)
    }
}

/// Filter buttons as `(value, label)`
pub const FILTERS: &[(&str, &str)] = &[
    (ALL_FILTER, "All"),
    ("automation", "Automation"),
    ("ai", "AI"),
    ("integration", "Integrations"),
    ("voice", "Voice"),
];

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Lead Qualification Pipeline",
        summary: "Inbound leads scored by an AI agent and routed to the right rep in seconds.",
        categories: "automation ai",
    },
    PortfolioItem {
        title: "E-commerce Order Sync",
        summary: "Orders, stock and invoices kept in sync between the shop, ERP and accounting.",
        categories: "integration automation",
    },
    PortfolioItem {
        title: "Support Chatbot",
        summary: "A knowledge-base chatbot that resolves most first-line tickets on its own.",
        categories: "ai",
    },
    PortfolioItem {
        title: "Appointment Voice Agent",
        summary: "Phone agent that books, moves and confirms appointments around the clock.",
        categories: "voice ai",
    },
    PortfolioItem {
        title: "CRM Data Hygiene",
        summary: "Nightly deduplication and enrichment of CRM contacts from public sources.",
        categories: "integration",
    },
    PortfolioItem {
        title: "Weekly Reporting Robot",
        summary: "KPIs collected from five tools and delivered as a report every Monday.",
        categories: "automation",
    },
];

/// Items visible for a filter, in display order
pub fn filter_items<'a>(
    items: &'a [PortfolioItem],
    filter: &'a str,
) -> impl Iterator<Item = &'a PortfolioItem> {
    items.iter().filter(move |item| item.matches(filter))
}
