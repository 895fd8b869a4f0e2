//! Static news content.

use crate::models::NewsArticle;
use crate::models::news::slugify;

const ARTICLES: &[NewsArticle] = &[
    NewsArticle {
        id: 1,
        title: "How to Spot a Fake Online Review",
        excerpt: "Overly generic praise, clusters of five-star ratings posted on the same day and reviewers with no history are common warning signs.",
        date: "2026-03-12",
        category: "Consumer Tips",
        image: "/assets/img/news/fake-reviews.svg",
        author: "Dana Whitfield",
    },
    NewsArticle {
        id: 2,
        title: "Storm-Chasing Contractors Return After Spring Hail",
        excerpt: "Homeowners are urged to verify licenses and never pay full price up front for roof repairs offered door to door.",
        date: "2026-03-05",
        category: "Scam Watch",
        image: "/assets/img/news/storm-chasers.svg",
        author: "Luis Ortega",
    },
    NewsArticle {
        id: 3,
        title: "Five Ways Small Businesses Can Build Customer Trust",
        excerpt: "Clear pricing, fast responses to complaints and an accurate directory profile go a long way toward earning repeat customers.",
        date: "2026-02-26",
        category: "Business Insights",
        image: "/assets/img/news/customer-trust.svg",
        author: "Priya Natarajan",
    },
    NewsArticle {
        id: 4,
        title: "Gift Card Payment Requests Are Always a Red Flag",
        excerpt: "No legitimate utility, government agency or warranty provider will ask you to settle a bill with gift cards.",
        date: "2026-02-18",
        category: "Scam Watch",
        image: "/assets/img/news/gift-cards.svg",
        author: "Luis Ortega",
    },
    NewsArticle {
        id: 5,
        title: "Reading the Fine Print on Service Contracts",
        excerpt: "Automatic renewals, cancellation fees and arbitration clauses are worth a second look before you sign.",
        date: "2026-02-09",
        category: "Consumer Tips",
        image: "/assets/img/news/fine-print.svg",
        author: "Dana Whitfield",
    },
    NewsArticle {
        id: 6,
        title: "Directory Adds Verified Badges for Licensed Trades",
        excerpt: "Electricians, plumbers and HVAC technicians can now submit license numbers to display a verified badge on their profile.",
        date: "2026-01-30",
        category: "Announcements",
        image: "/assets/img/news/verified-badges.svg",
        author: "Editorial Team",
    },
];

#[must_use]
pub const fn sample_articles() -> &'static [NewsArticle] {
    ARTICLES
}

/// Articles whose category slug equals `category_slug`, case-insensitively.
#[must_use]
pub fn filter_by_category<'a>(
    articles: &'a [NewsArticle],
    category_slug: &str,
) -> Vec<&'a NewsArticle> {
    let wanted = slugify(category_slug);
    articles
        .iter()
        .filter(|a| a.category_slug() == wanted)
        .collect()
}

/// Distinct categories as (label, slug), in first-seen order.
#[must_use]
pub fn categories(articles: &[NewsArticle]) -> Vec<(&'static str, String)> {
    let mut seen: Vec<(&'static str, String)> = Vec::new();
    for article in articles {
        let slug = article.category_slug();
        if !seen.iter().any(|(_, s)| *s == slug) {
            seen.push((article.category, slug));
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches_slug_case_insensitively() {
        let found = filter_by_category(sample_articles(), "Scam-Watch");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|a| a.category == "Scam Watch"));

        assert!(filter_by_category(sample_articles(), "sports").is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let cats: Vec<_> = categories(sample_articles())
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(
            cats,
            vec![
                "Consumer Tips",
                "Scam Watch",
                "Business Insights",
                "Announcements"
            ]
        );
    }
}
