use super::{category_card, popular};
use crate::models::Category;
use crate::render::PageContext;
use crate::render::components::{self, Align, CloseConfig, HeadConfig};
use crate::render::nav::NavKey;

#[must_use]
pub fn render(ctx: &PageContext, categories: &[Category]) -> String {
    let head = HeadConfig::new("Business Categories")
        .description("Browse local businesses by category and see how many are listed in each.")
        .keywords(&["business categories", "directory", "local services"])
        .canonical("/categories");

    let mut main = components::page_header(
        "Business Categories",
        Some("Find trusted businesses by the kind of service you need."),
        Align::Center,
    );
    main.push_str("<div class=\"container\">\n");

    if categories.is_empty() {
        main.push_str(&components::empty_state(
            "No Categories Available",
            "Business categories will appear here once they are published.",
            Some(("Back to Home", "/")),
        ));
    } else {
        main.push_str("<section class=\"section\">\n<h2>Popular Categories</h2>\n");
        main.push_str("<div class=\"card-grid\">\n");
        for category in popular(categories) {
            category_card(&mut main, category);
        }
        main.push_str("</div>\n</section>\n");

        main.push_str("<section class=\"section\">\n<h2>All Categories</h2>\n");
        main.push_str("<div class=\"card-grid\">\n");
        for category in categories {
            category_card(&mut main, category);
        }
        main.push_str("</div>\n</section>\n");
    }

    main.push_str("</div>\n");
    components::layout(
        ctx,
        &head,
        Some(NavKey::Categories),
        &main,
        &CloseConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::pages::category;
    use crate::render::test_context;

    #[test]
    fn test_counts_rendered_per_category() {
        let categories = vec![category(1, "Plumbing", 7), category(2, "Roofing", 0)];
        let html = render(&test_context(), &categories);

        assert!(html.contains("7 businesses"));
        assert!(html.contains("0 businesses"));
        assert!(!html.contains("No Categories Available"));
        // popular section plus the full list
        assert_eq!(html.matches("<h3>Plumbing</h3>").count(), 2);
    }

    #[test]
    fn test_popular_section_capped_at_six() {
        let categories: Vec<_> = (1..=10).map(|i| category(i, &format!("Cat {i}"), 1)).collect();
        let html = render(&test_context(), &categories);
        assert_eq!(html.matches("class=\"category-card\"").count(), 6 + 10);
        assert_eq!(html.matches("<h3>Cat 7</h3>").count(), 1);
    }

    #[test]
    fn test_empty_state_has_no_cards() {
        let html = render(&test_context(), &[]);
        assert!(html.contains("No Categories Available"));
        assert!(!html.contains("category-card"));
    }
}
