use std::fmt::Write;

use crate::constants::limits;
use crate::models::{BusinessSummary, Recommend, ReviewFormState};
use crate::render::components::{self, Align, CloseConfig, HeadConfig};
use crate::render::nav::NavKey;
use crate::render::{PageContext, attr, text};

#[derive(Debug, Clone, Default)]
pub struct WriteReviewPage {
    pub business: Option<BusinessSummary>,
    /// Previously submitted values, present only after a failed submission.
    pub old_input: ReviewFormState,
    pub errors: Vec<String>,
    pub success: Option<String>,
}

#[must_use]
pub fn render(ctx: &PageContext, page: &WriteReviewPage) -> String {
    let title = page
        .business
        .as_ref()
        .map_or_else(|| "Write a Review".to_string(), |b| format!("Review {}", b.name));
    let head = HeadConfig::new(title.clone())
        .description("Share your experience to help others choose trusted businesses.")
        .keywords(&["write a review", "business reviews", "ratings"])
        .canonical("/reviews/write");

    let mut main = components::page_header(
        &title,
        Some("Honest reviews help your neighbors make better choices."),
        Align::Center,
    );
    main.push_str("<div class=\"container narrow\">\n");
    main.push_str(&components::flash_messages(
        &page.errors,
        page.success.as_deref(),
    ));

    match &page.business {
        Some(business) => review_form(&mut main, business, &page.old_input),
        None => main.push_str(&components::empty_state(
            "Business Not Found",
            "We couldn't find the business you want to review. Browse the directory to pick one.",
            Some(("Browse Categories", "/categories")),
        )),
    }

    main.push_str("</div>\n");
    components::layout(
        ctx,
        &head,
        Some(NavKey::WriteReview),
        &main,
        &CloseConfig::with_script("js/review-form.js"),
    )
}

fn review_form(html: &mut String, business: &BusinessSummary, old: &ReviewFormState) {
    html.push_str("<div class=\"business-summary\">\n");
    let _ = writeln!(html, "  <h2>{}</h2>", text(&business.name));
    if let Some(location) = business.location() {
        let _ = writeln!(html, "  <p class=\"muted\">{}</p>", text(&location));
    }
    html.push_str("</div>\n");

    html.push_str("<form class=\"review-form\" method=\"post\" action=\"/reviews/write\">\n");
    let _ = writeln!(
        html,
        "  <input type=\"hidden\" name=\"business_id\" value=\"{}\">",
        business.id
    );

    let checked = old.checked_rating();
    html.push_str("  <fieldset class=\"star-rating\">\n    <legend>Your rating</legend>\n");
    for star in (1..=5u8).rev() {
        let _ = writeln!(
            html,
            "    <input type=\"radio\" id=\"rating-{star}\" name=\"rating\" value=\"{star}\"{}>\n    <label for=\"rating-{star}\" title=\"{star} stars\">{star}</label>",
            if checked == Some(star) { " checked" } else { "" }
        );
    }
    html.push_str("  </fieldset>\n");

    let _ = writeln!(
        html,
        "  <label for=\"title\">Review title</label>\n  <input type=\"text\" id=\"title\" name=\"title\" maxlength=\"{}\" required value=\"{}\">",
        limits::REVIEW_TITLE_MAX,
        attr(old.title.as_deref().unwrap_or_default())
    );

    let _ = writeln!(
        html,
        "  <label for=\"review_text\">Your review</label>\n  <textarea id=\"review_text\" name=\"review_text\" rows=\"8\" minlength=\"{}\" maxlength=\"{}\" required>{}</textarea>",
        limits::REVIEW_TEXT_MIN,
        limits::REVIEW_TEXT_MAX,
        text(old.review_text.as_deref().unwrap_or_default())
    );

    let recommend = old.recommend();
    html.push_str("  <fieldset class=\"recommend\">\n    <legend>Would you recommend this business?</legend>\n");
    for (value, label) in [(Recommend::Yes, "Yes"), (Recommend::No, "No")] {
        let _ = writeln!(
            html,
            "    <label><input type=\"radio\" name=\"recommend\" value=\"{}\"{}> {label}</label>",
            value.as_str(),
            if recommend == value { " checked" } else { "" }
        );
    }
    html.push_str("  </fieldset>\n");

    html.push_str("  <button class=\"btn btn-primary\" type=\"submit\">Submit Review</button>\n");
    html.push_str("</form>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_context;

    fn business() -> BusinessSummary {
        BusinessSummary {
            id: 12,
            name: "Blue Door Bistro".to_string(),
            slug: "blue-door-bistro".to_string(),
            category_id: 1,
            city: Some("Portland".to_string()),
            state: Some("OR".to_string()),
            status: "active".to_string(),
        }
    }

    fn page_with(old_input: ReviewFormState) -> String {
        render(
            &test_context(),
            &WriteReviewPage {
                business: Some(business()),
                old_input,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_out_of_range_rating_never_checked() {
        for rating in ["0", "6", "-1", "abc", "3.5"] {
            let html = page_with(ReviewFormState {
                rating: Some(rating.to_string()),
                ..Default::default()
            });
            assert!(!html.contains("value=\"0\" checked"));
            assert_eq!(
                html.matches("name=\"rating\" value=\"").count(),
                5,
                "rating {rating}"
            );
            assert!(!html.contains("name=\"rating\" value=\"1\" checked"));
            assert!(!html.contains("name=\"rating\" value=\"5\" checked"));
            assert!(!html.contains("name=\"rating\" value=\"3\" checked"));
        }

        let html = page_with(ReviewFormState {
            rating: Some("4".to_string()),
            ..Default::default()
        });
        assert!(html.contains("name=\"rating\" value=\"4\" checked"));
    }

    #[test]
    fn test_recommend_defaults_to_yes() {
        let html = page_with(ReviewFormState::default());
        assert!(html.contains("value=\"yes\" checked"));
        assert!(!html.contains("value=\"no\" checked"));

        let html = page_with(ReviewFormState {
            recommend: Some("no".to_string()),
            ..Default::default()
        });
        assert!(html.contains("value=\"no\" checked"));
    }

    #[test]
    fn test_old_input_escaped() {
        let html = page_with(ReviewFormState {
            title: Some("\"><script>alert(1)</script>".to_string()),
            review_text: Some("</textarea><b>".to_string()),
            ..Default::default()
        });
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;\""));
        assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;</textarea>"));
    }

    #[test]
    fn test_unknown_business_shows_not_found() {
        let html = render(&test_context(), &WriteReviewPage::default());
        assert!(html.contains("Business Not Found"));
        assert!(!html.contains("review-form\""));
    }

    #[test]
    fn test_flash_rendered() {
        let html = render(
            &test_context(),
            &WriteReviewPage {
                business: Some(business()),
                errors: vec!["Please select a rating between 1 and 5 stars.".to_string()],
                success: None,
                ..Default::default()
            },
        );
        assert!(html.contains("<li>Please select a rating between 1 and 5 stars.</li>"));
        assert!(html.contains("<h2>Blue Door Bistro</h2>"));
        assert!(html.contains("Portland, OR"));
    }
}
