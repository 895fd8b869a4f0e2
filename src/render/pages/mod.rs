//! One module per page. Shared card markup lives here.

pub mod categories;
pub mod error;
pub mod home;
pub mod news;
pub mod resources;
pub mod scam_alerts;
pub mod verify_email;
pub mod write_review;

use std::fmt::Write;

use super::{attr, pluralize, text};
use crate::models::{Category, NewsArticle, ScamAlert};

/// Leading slice of `categories` shown in "popular" sections.
#[must_use]
pub fn popular(categories: &[Category]) -> &[Category] {
    &categories[..categories.len().min(crate::constants::limits::POPULAR_CATEGORIES)]
}

pub(crate) fn category_card(html: &mut String, category: &Category) {
    html.push_str("<article class=\"category-card\">\n");
    if let Some(icon) = &category.icon {
        let _ = writeln!(
            html,
            "  <span class=\"category-icon {}\" aria-hidden=\"true\"></span>",
            attr(icon)
        );
    }
    let _ = writeln!(html, "  <h3>{}</h3>", text(&category.name));
    if let Some(description) = &category.description {
        let _ = writeln!(html, "  <p>{}</p>", text(description));
    }
    let _ = writeln!(
        html,
        "  <span class=\"business-count\">{}</span>",
        pluralize(category.business_count, "business", "businesses")
    );
    html.push_str("</article>\n");
}

pub(crate) fn alert_card(html: &mut String, alert: &ScamAlert) {
    html.push_str("<article class=\"alert-card\">\n");
    let _ = writeln!(html, "  <h3>{}</h3>", text(&alert.business_name));
    if let Some(location) = &alert.location {
        let _ = writeln!(html, "  <p class=\"alert-location\">{}</p>", text(location));
    }
    let _ = writeln!(html, "  <p>{}</p>", text(&alert.description));
    let _ = writeln!(
        html,
        "  <time datetime=\"{}\">Reported {}</time>",
        attr(&alert.created_at),
        text(&alert.reported_on())
    );
    html.push_str("</article>\n");
}

pub(crate) fn news_card(html: &mut String, article: &NewsArticle) {
    html.push_str("<article class=\"news-card\">\n");
    let _ = writeln!(
        html,
        "  <img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
        attr(article.image),
        attr(article.title)
    );
    let _ = writeln!(
        html,
        "  <a class=\"news-category\" href=\"/news?category={}\">{}</a>",
        attr(&article.category_slug()),
        text(article.category)
    );
    let _ = writeln!(html, "  <h3>{}</h3>", text(article.title));
    let _ = writeln!(html, "  <p>{}</p>", text(article.excerpt));
    let _ = writeln!(
        html,
        "  <p class=\"news-meta\">By {} &middot; {}</p>",
        text(article.author),
        text(article.date)
    );
    html.push_str("</article>\n");
}

#[cfg(test)]
pub(crate) fn category(id: i32, name: &str, count: u64) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: crate::models::news::slugify(name),
        description: None,
        icon: None,
        business_count: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_is_first_six_in_order() {
        let all: Vec<_> = (1..=9).map(|i| category(i, &format!("C{i}"), 0)).collect();
        let ids: Vec<_> = popular(&all).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let few = vec![category(3, "Only", 1)];
        assert_eq!(popular(&few).len(), 1);
        assert!(popular(&[]).is_empty());
    }

    #[test]
    fn test_category_card_escapes_name() {
        let mut html = String::new();
        category_card(&mut html, &category(1, "<script>x</script>", 1));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("1 business<"));
    }
}
