pub use super::business_categories::Entity as BusinessCategories;
pub use super::business_profiles::Entity as BusinessProfiles;
pub use super::complaints::Entity as Complaints;
pub use super::reviews::Entity as Reviews;
