use std::fmt::Write;

use super::news_card;
use crate::models::NewsArticle;
use crate::render::components::{self, Align, CloseConfig, HeadConfig};
use crate::render::nav::NavKey;
use crate::render::{PageContext, attr, text};

pub struct NewsPage<'a> {
    pub articles: &'a [&'a NewsArticle],
    /// (label, slug) for every filter pill.
    pub categories: &'a [(&'static str, String)],
    /// Slug of the requested category, already normalized.
    pub selected: Option<&'a str>,
}

#[must_use]
pub fn render(ctx: &PageContext, page: &NewsPage<'_>) -> String {
    let selected_label = page.selected.and_then(|slug| {
        page.categories
            .iter()
            .find(|(_, s)| s == slug)
            .map(|(label, _)| *label)
    });

    let title = selected_label.map_or_else(|| "News & Updates".to_string(), |l| format!("{l} News"));
    let canonical = page.selected.map_or_else(
        || "/news".to_string(),
        |slug| format!("/news?category={}", urlencoding::encode(slug)),
    );
    let head = HeadConfig::new(title.clone())
        .description("Consumer tips, scam warnings and business insights from the directory team.")
        .keywords(&["news", "consumer tips", "scam watch", "business insights"])
        .canonical(canonical);

    let mut main = components::page_header(
        &title,
        Some("Stay informed about local businesses and how to protect yourself."),
        Align::Center,
    );
    main.push_str("<div class=\"container\">\n");

    main.push_str("<nav class=\"filter-pills\" aria-label=\"News categories\">\n");
    pill(&mut main, "/news", "All", page.selected.is_none());
    for (label, slug) in page.categories {
        let active = page.selected == Some(slug.as_str());
        pill(
            &mut main,
            &format!("/news?category={}", urlencoding::encode(slug)),
            label,
            active,
        );
    }
    main.push_str("</nav>\n");

    if page.articles.is_empty() {
        let message = page.selected.map_or_else(
            || "There are no news articles to show yet.".to_string(),
            |slug| format!("There are no articles in \"{slug}\" right now."),
        );
        main.push_str(&components::empty_state(
            "No Articles Found",
            &message,
            Some(("View all news", "/news")),
        ));
    } else {
        main.push_str("<div class=\"card-grid\">\n");
        for article in page.articles {
            news_card(&mut main, article);
        }
        main.push_str("</div>\n");
    }

    main.push_str("</div>\n");
    components::layout(ctx, &head, Some(NavKey::News), &main, &CloseConfig::default())
}

fn pill(html: &mut String, href: &str, label: &str, active: bool) {
    let class = if active { "pill active" } else { "pill" };
    let _ = writeln!(
        html,
        "  <a class=\"{class}\" href=\"{}\">{}</a>",
        attr(href),
        text(label)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_context;
    use crate::services::news::{categories, filter_by_category, sample_articles};

    #[test]
    fn test_filtered_page_highlights_pill() {
        let pills = categories(sample_articles());
        let articles = filter_by_category(sample_articles(), "consumer-tips");
        let html = render(
            &test_context(),
            &NewsPage {
                articles: &articles,
                categories: &pills,
                selected: Some("consumer-tips"),
            },
        );

        assert!(html.contains("<title>Consumer Tips News | Business Directory</title>"));
        assert!(html.contains("class=\"pill active\" href=\"/news?category=consumer-tips\""));
        assert_eq!(html.matches("class=\"news-card\"").count(), articles.len());
    }

    #[test]
    fn test_unknown_category_shows_escaped_empty_state() {
        let pills = categories(sample_articles());
        let html = render(
            &test_context(),
            &NewsPage {
                articles: &[],
                categories: &pills,
                selected: Some("<b>sports</b>"),
            },
        );

        assert!(html.contains("No Articles Found"));
        assert!(html.contains("&lt;b&gt;sports&lt;/b&gt;"));
        assert!(!html.contains("news-card"));
        assert!(!html.contains("pill active"));
    }
}
