pub mod prelude;

pub mod business_categories;
pub mod business_profiles;
pub mod complaints;
pub mod reviews;
