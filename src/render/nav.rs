/// Top-level sections that can be highlighted in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Home,
    Categories,
    ScamAlerts,
    News,
    Resources,
    WriteReview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub url: &'static str,
    pub label: &'static str,
    pub active: bool,
}

const MAIN_NAV: &[(NavKey, &str, &str)] = &[
    (NavKey::Home, "/", "Home"),
    (NavKey::Categories, "/categories", "Categories"),
    (NavKey::ScamAlerts, "/scam-alerts", "Scam Alerts"),
    (NavKey::News, "/news", "News"),
    (NavKey::Resources, "/resources", "Resources"),
    (NavKey::WriteReview, "/reviews/write", "Write a Review"),
];

/// The header navigation, with `active` highlighted. Pages outside the main
/// sections (error, verification) pass `None`.
#[must_use]
pub fn main_navigation(active: Option<NavKey>) -> Vec<NavItem> {
    MAIN_NAV
        .iter()
        .map(|&(key, url, label)| NavItem {
            url,
            label,
            active: Some(key) == active,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub url: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: Vec<FooterLink>,
}

const fn link(url: &'static str, label: &'static str) -> FooterLink {
    FooterLink { url, label }
}

#[must_use]
pub fn footer_sections() -> Vec<FooterSection> {
    vec![
        FooterSection {
            title: "Explore",
            links: vec![
                link("/categories", "Browse Categories"),
                link("/news", "Latest News"),
                link("/scam-alerts", "Scam Alerts"),
            ],
        },
        FooterSection {
            title: "Consumers",
            links: vec![
                link("/reviews/write", "Write a Review"),
                link("/resources#consumers", "Consumer Resources"),
                link("/news?category=consumer-tips", "Consumer Tips"),
            ],
        },
        FooterSection {
            title: "Businesses",
            links: vec![
                link("/resources#businesses", "Business Resources"),
                link("/news?category=business-insights", "Business Insights"),
            ],
        },
    ]
}
