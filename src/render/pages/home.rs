use super::{alert_card, category_card, news_card, popular};
use crate::constants::limits;
use crate::models::{Category, NewsArticle, ScamAlert};
use crate::render::PageContext;
use crate::render::components::{self, CloseConfig, HeadConfig, HeroConfig};
use crate::render::nav::NavKey;

pub struct HomePage<'a> {
    pub categories: &'a [Category],
    pub alerts: &'a [ScamAlert],
    pub news: &'a [NewsArticle],
}

#[must_use]
pub fn render(ctx: &PageContext, page: &HomePage<'_>) -> String {
    let head = HeadConfig::new("")
        .description(ctx.site.tagline.clone())
        .keywords(&["business directory", "reviews", "scam alerts", "local businesses"])
        .canonical("/")
        .body_class("page-home");

    let mut main = components::hero_header(
        ctx,
        &HeroConfig {
            title: format!("Welcome to {}", ctx.site.name),
            subtitle: Some(ctx.site.tagline.clone()),
            cta_label: Some("Browse Categories".to_string()),
            cta_url: Some("/categories".to_string()),
            ..Default::default()
        },
    );

    main.push_str("<section class=\"section\">\n<div class=\"container\">\n");
    main.push_str("<h2>Popular Categories</h2>\n");
    let popular = popular(page.categories);
    if popular.is_empty() {
        main.push_str(&components::empty_state(
            "No Categories Available",
            "Business categories will appear here once they are published.",
            None,
        ));
    } else {
        main.push_str("<div class=\"card-grid\">\n");
        for category in popular {
            category_card(&mut main, category);
        }
        main.push_str("</div>\n");
        main.push_str("<a class=\"section-link\" href=\"/categories\">View all categories</a>\n");
    }
    main.push_str("</div>\n</section>\n");

    main.push_str("<section class=\"section section-alt\">\n<div class=\"container\">\n");
    main.push_str("<h2>Latest Scam Alerts</h2>\n");
    let alerts = &page.alerts[..page.alerts.len().min(limits::HOME_SCAM_ALERTS)];
    if alerts.is_empty() {
        main.push_str(&components::empty_state(
            "No Active Scam Alerts",
            "There are no active scam reports right now.",
            None,
        ));
    } else {
        main.push_str("<div class=\"card-grid\">\n");
        for alert in alerts {
            alert_card(&mut main, alert);
        }
        main.push_str("</div>\n");
        main.push_str("<a class=\"section-link\" href=\"/scam-alerts\">See all scam alerts</a>\n");
    }
    main.push_str("</div>\n</section>\n");

    main.push_str("<section class=\"section\">\n<div class=\"container\">\n");
    main.push_str("<h2>Latest News</h2>\n");
    let news = &page.news[..page.news.len().min(limits::HOME_NEWS)];
    if news.is_empty() {
        main.push_str(&components::empty_state(
            "No Articles Yet",
            "Check back soon for news and tips.",
            None,
        ));
    } else {
        main.push_str("<div class=\"card-grid\">\n");
        for article in news {
            news_card(&mut main, article);
        }
        main.push_str("</div>\n");
        main.push_str("<a class=\"section-link\" href=\"/news\">Read more news</a>\n");
    }
    main.push_str("</div>\n</section>\n");

    components::layout(ctx, &head, Some(NavKey::Home), &main, &CloseConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::pages::category;
    use crate::render::test_context;
    use crate::services::news::sample_articles;

    fn alert(name: &str) -> ScamAlert {
        ScamAlert {
            business_name: name.to_string(),
            description: "Fake prize".to_string(),
            location: Some("Reno, NV".to_string()),
            created_at: "2026-02-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_home_caps_each_section() {
        let categories: Vec<_> = (1..=8).map(|i| category(i, &format!("Cat {i}"), 2)).collect();
        let alerts: Vec<_> = (1..=5).map(|i| alert(&format!("Shop {i}"))).collect();
        let html = render(
            &test_context(),
            &HomePage {
                categories: &categories,
                alerts: &alerts,
                news: sample_articles(),
            },
        );

        assert_eq!(html.matches("class=\"category-card\"").count(), 6);
        assert_eq!(html.matches("class=\"alert-card\"").count(), 3);
        assert_eq!(html.matches("class=\"news-card\"").count(), 3);
        assert!(!html.contains("Cat 7"));
        assert!(html.contains("<title>Business Directory</title>"));
    }

    #[test]
    fn test_home_empty_states() {
        let html = render(
            &test_context(),
            &HomePage {
                categories: &[],
                alerts: &[],
                news: &[],
            },
        );
        assert!(html.contains("No Categories Available"));
        assert!(html.contains("No Active Scam Alerts"));
        assert!(!html.contains("class=\"category-card\""));
    }
}
