use serde::{Deserialize, Serialize};

use crate::constants::limits;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommend {
    #[default]
    Yes,
    No,
}

impl Recommend {
    /// Anything other than an explicit `"no"`, in any case, counts as `Yes`.
    #[must_use]
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("no") => Self::No,
            _ => Self::Yes,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// Submitted review form fields, kept as raw strings so a failed submission
/// can be re-rendered exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFormState {
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub review_text: Option<String>,
    #[serde(default)]
    pub business_id: Option<String>,
    #[serde(default)]
    pub recommend: Option<String>,
}

impl ReviewFormState {
    /// The star to pre-check, only when the submitted value is exactly 1..=5.
    #[must_use]
    pub fn checked_rating(&self) -> Option<u8> {
        self.rating
            .as_deref()
            .and_then(|r| r.trim().parse::<u8>().ok())
            .filter(|r| (1..=5).contains(r))
    }

    #[must_use]
    pub fn recommend(&self) -> Recommend {
        Recommend::from_input(self.recommend.as_deref())
    }

    #[must_use]
    pub fn business_id(&self) -> Option<i32> {
        self.business_id
            .as_deref()
            .and_then(|id| id.trim().parse::<i32>().ok())
            .filter(|id| *id > 0)
    }

    /// Field-level checks. Whether the business exists is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns every failed check as a user-facing message, in form order.
    pub fn validate(&self) -> Result<NewReview, Vec<String>> {
        let mut errors = Vec::new();

        let rating = self.checked_rating();
        if rating.is_none() {
            errors.push("Please select a rating between 1 and 5 stars.".to_string());
        }

        let title = self.title.as_deref().unwrap_or_default().trim();
        if title.is_empty() {
            errors.push("Please enter a title for your review.".to_string());
        } else if title.chars().count() > limits::REVIEW_TITLE_MAX {
            errors.push(format!(
                "Review title must be {} characters or fewer.",
                limits::REVIEW_TITLE_MAX
            ));
        }

        let body = self.review_text.as_deref().unwrap_or_default().trim();
        let body_len = body.chars().count();
        if body_len < limits::REVIEW_TEXT_MIN {
            errors.push(format!(
                "Your review must be at least {} characters.",
                limits::REVIEW_TEXT_MIN
            ));
        } else if body_len > limits::REVIEW_TEXT_MAX {
            errors.push(format!(
                "Your review must be {} characters or fewer.",
                limits::REVIEW_TEXT_MAX
            ));
        }

        let business_id = self.business_id();
        if business_id.is_none() {
            errors.push("Please choose a business to review.".to_string());
        }

        match (rating, business_id) {
            (Some(rating), Some(business_id)) if errors.is_empty() => Ok(NewReview {
                business_id,
                rating,
                title: title.to_string(),
                body: body.to_string(),
                recommend: self.recommend(),
            }),
            _ => Err(errors),
        }
    }
}

/// A validated review ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub business_id: i32,
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub recommend: Recommend,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_rating(rating: &str) -> ReviewFormState {
        ReviewFormState {
            rating: Some(rating.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_checked_rating_only_in_range() {
        assert_eq!(with_rating("1").checked_rating(), Some(1));
        assert_eq!(with_rating("5").checked_rating(), Some(5));
        assert_eq!(with_rating("0").checked_rating(), None);
        assert_eq!(with_rating("6").checked_rating(), None);
        assert_eq!(with_rating("-3").checked_rating(), None);
        assert_eq!(with_rating("4.5").checked_rating(), None);
        assert_eq!(ReviewFormState::default().checked_rating(), None);
    }

    #[test]
    fn test_recommend_defaults_to_yes() {
        assert_eq!(ReviewFormState::default().recommend(), Recommend::Yes);
        assert_eq!(Recommend::from_input(Some("maybe")), Recommend::Yes);
        assert_eq!(Recommend::from_input(Some("no")), Recommend::No);
        assert_eq!(Recommend::from_input(Some(" NO ")), Recommend::No);
        assert_eq!(Recommend::from_input(Some("No")), Recommend::No);
    }

    #[test]
    fn test_business_id_must_be_positive() {
        let mut form = ReviewFormState {
            business_id: Some("12".to_string()),
            ..Default::default()
        };
        assert_eq!(form.business_id(), Some(12));

        form.business_id = Some("0".to_string());
        assert_eq!(form.business_id(), None);

        form.business_id = Some("abc".to_string());
        assert_eq!(form.business_id(), None);
    }

    fn valid_form() -> ReviewFormState {
        ReviewFormState {
            rating: Some("4".to_string()),
            title: Some("  Friendly staff  ".to_string()),
            review_text: Some("The team fixed our sink quickly and cleaned up.".to_string()),
            business_id: Some("3".to_string()),
            recommend: None,
        }
    }

    #[test]
    fn test_validate_accepts_and_trims() {
        let review = valid_form().validate().unwrap();
        assert_eq!(review.business_id, 3);
        assert_eq!(review.rating, 4);
        assert_eq!(review.title, "Friendly staff");
        assert_eq!(review.recommend, Recommend::Yes);
    }

    #[test]
    fn test_validate_collects_every_error() {
        let form = ReviewFormState {
            rating: Some("7".to_string()),
            title: Some("   ".to_string()),
            review_text: Some("too short".to_string()),
            business_id: Some("-2".to_string()),
            recommend: Some("no".to_string()),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], "Please select a rating between 1 and 5 stars.");
    }

    #[test]
    fn test_validate_length_limits() {
        let mut form = valid_form();
        form.title = Some("x".repeat(101));
        form.review_text = Some("y".repeat(5001));
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Review title must be 100 characters or fewer.",
                "Your review must be 5000 characters or fewer.",
            ]
        );

        form.title = Some("x".repeat(100));
        form.review_text = Some("y".repeat(20));
        assert!(form.validate().is_ok());
    }
}
