pub mod business;
pub mod category;
pub mod news;
pub mod resource;
pub mod review;
pub mod scam_alert;

pub use business::{BusinessFilters, BusinessStatus, BusinessSummary, Pagination, SearchPage};
pub use category::{Category, CategoryFilters, CategoryRecord};
pub use news::NewsArticle;
pub use resource::{Audience, ResourceLink};
pub use review::{NewReview, Recommend, ReviewFormState};
pub use scam_alert::ScamAlert;
