//! Demo directory content for local development.

use anyhow::Result;
use chrono::{Duration, SecondsFormat, Utc};
use tracing::info;

use super::{NewBusiness, NewCategory, NewComplaint, Store};
use crate::constants::complaint;
use crate::models::BusinessStatus;

const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("Restaurants", "restaurants", "Dining, cafes and takeout", "icon-utensils"),
    ("Home Services", "home-services", "Plumbers, electricians and contractors", "icon-home"),
    ("Automotive", "automotive", "Repair shops, dealers and detailing", "icon-car"),
    ("Health & Wellness", "health-wellness", "Clinics, gyms and spas", "icon-heart"),
    ("Professional Services", "professional-services", "Legal, accounting and consulting", "icon-briefcase"),
    ("Retail", "retail", "Shops and boutiques", "icon-shopping-bag"),
    ("Pet Services", "pet-services", "Groomers, sitters and vets", "icon-paw"),
    ("Travel", "travel", "Agencies, tours and lodging", "icon-plane"),
];

/// (name, category slug, city, state, status)
const BUSINESSES: &[(&str, &str, &str, &str, BusinessStatus)] = &[
    ("Blue Door Bistro", "restaurants", "Portland", "OR", BusinessStatus::Active),
    ("Harbor Noodle House", "restaurants", "Seattle", "WA", BusinessStatus::Active),
    ("Reliable Rooter", "home-services", "Boise", "ID", BusinessStatus::Active),
    ("QuickFix Roofing", "home-services", "Spokane", "WA", BusinessStatus::Suspended),
    ("Summit Auto Care", "automotive", "Denver", "CO", BusinessStatus::Active),
    ("Premier Car Warranty Center", "automotive", "Phoenix", "AZ", BusinessStatus::Suspended),
    ("Northside Family Clinic", "health-wellness", "Portland", "OR", BusinessStatus::Active),
    ("Ledger & Co. Accounting", "professional-services", "Salem", "OR", BusinessStatus::Pending),
    ("Dream Vacations Club", "travel", "Las Vegas", "NV", BusinessStatus::Suspended),
    ("Happy Tails Grooming", "pet-services", "Eugene", "OR", BusinessStatus::Active),
];

/// (business name, type, status, description, days ago)
const COMPLAINTS: &[(&str, &str, &str, &str, i64)] = &[
    (
        "Premier Car Warranty Center",
        complaint::TYPE_SCAM,
        complaint::STATUS_ACTIVE,
        "Robocalls claim your vehicle warranty is expiring and demand an upfront payment by gift card.",
        2,
    ),
    (
        "Dream Vacations Club",
        complaint::TYPE_SCAM,
        complaint::STATUS_ACTIVE,
        "Prize notifications for a free cruise that require paying \"port fees\" before booking.",
        5,
    ),
    (
        "QuickFix Roofing",
        complaint::TYPE_SCAM,
        complaint::STATUS_ACTIVE,
        "Door-to-door crews take a deposit after storms and never return to do the work.",
        9,
    ),
    (
        "Harbor Noodle House",
        complaint::TYPE_SERVICE,
        complaint::STATUS_RESOLVED,
        "Delivery order arrived an hour late; refund issued.",
        12,
    ),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub businesses: usize,
    pub complaints: usize,
}

/// Inserts the demo data set unless categories already exist.
pub async fn seed_demo_data(store: &Store) -> Result<Option<SeedSummary>> {
    if store.count_categories().await? > 0 {
        info!("Categories already present, skipping demo seed");
        return Ok(None);
    }

    let mut summary = SeedSummary::default();
    let mut category_ids = Vec::with_capacity(CATEGORIES.len());

    for (index, (name, slug, description, icon)) in CATEGORIES.iter().enumerate() {
        let id = store
            .add_category(&NewCategory {
                name: *name,
                slug: *slug,
                description: Some(*description),
                icon: Some(*icon),
                sort_order: i32::try_from(index).unwrap_or(i32::MAX),
                is_active: true,
            })
            .await?;
        category_ids.push((*slug, id));
        summary.categories += 1;
    }

    let mut business_ids = Vec::with_capacity(BUSINESSES.len());
    for (name, category_slug, city, state, status) in BUSINESSES {
        let Some((_, category_id)) = category_ids.iter().find(|(s, _)| s == category_slug) else {
            continue;
        };

        let slug = crate::models::news::slugify(*name);
        let id = store
            .add_business(&NewBusiness {
                name: *name,
                slug: &slug,
                category_id: *category_id,
                description: None,
                city: Some(*city),
                state: Some(*state),
                status: *status,
            })
            .await?;
        business_ids.push((*name, id));
        summary.businesses += 1;
    }

    let now = Utc::now();
    for (business_name, kind, status, description, days_ago) in COMPLAINTS {
        let Some((_, business_id)) = business_ids.iter().find(|(n, _)| n == business_name) else {
            continue;
        };

        let created_at =
            (now - Duration::days(*days_ago)).to_rfc3339_opts(SecondsFormat::Secs, true);
        store
            .add_complaint(NewComplaint {
                business_id: *business_id,
                complaint_type: *kind,
                status: *status,
                description: *description,
                created_at: Some(created_at),
            })
            .await?;
        summary.complaints += 1;
    }

    info!(
        categories = summary.categories,
        businesses = summary.businesses,
        complaints = summary.complaints,
        "Demo data seeded"
    );

    Ok(Some(summary))
}
