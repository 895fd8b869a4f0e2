use crate::entities::{business_profiles, prelude::*};
use crate::models::{BusinessFilters, BusinessStatus, BusinessSummary};
use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl From<business_profiles::Model> for BusinessSummary {
    fn from(model: business_profiles::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            category_id: model.category_id,
            city: model.city,
            state: model.state,
            status: model.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewBusiness<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub category_id: i32,
    pub description: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub status: BusinessStatus,
}

pub struct BusinessRepository {
    conn: DatabaseConnection,
}

impl BusinessRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Returns one page of matches (1-based `page`) and the total match count.
    pub async fn search(
        &self,
        filters: &BusinessFilters,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<BusinessSummary>, u64)> {
        let mut query = BusinessProfiles::find().order_by_asc(business_profiles::Column::Name);

        if let Some(category_id) = filters.category_id {
            query = query.filter(business_profiles::Column::CategoryId.eq(category_id));
        }

        if let Some(status) = filters.status {
            query = query.filter(business_profiles::Column::Status.eq(status.as_str()));
        }

        let paginator = query.paginate(&self.conn, page_size.max(1));
        let total = paginator
            .num_items()
            .await
            .context("Failed to count businesses")?;
        let items = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .context("Failed to fetch business page")?;

        Ok((items.into_iter().map(BusinessSummary::from).collect(), total))
    }

    pub async fn get(&self, id: i32) -> Result<Option<BusinessSummary>> {
        let business = BusinessProfiles::find_by_id(id)
            .one(&self.conn)
            .await
            .with_context(|| format!("Failed to query business {id}"))?;

        Ok(business.map(BusinessSummary::from))
    }

    pub async fn insert(&self, business: &NewBusiness<'_>) -> Result<i32> {
        let active_model = business_profiles::ActiveModel {
            name: Set(business.name.to_string()),
            slug: Set(business.slug.to_string()),
            category_id: Set(business.category_id),
            description: Set(business.description.map(ToString::to_string)),
            city: Set(business.city.map(ToString::to_string)),
            state: Set(business.state.map(ToString::to_string)),
            status: Set(business.status.as_str().to_string()),
            created_at: Set(crate::db::now_timestamp()),
            ..Default::default()
        };

        let result = BusinessProfiles::insert(active_model)
            .exec(&self.conn)
            .await
            .with_context(|| format!("Failed to insert business '{}'", business.slug))?;

        Ok(result.last_insert_id)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(BusinessProfiles::find().count(&self.conn).await?)
    }
}
