use crate::entities::{business_categories, prelude::*};
use crate::models::CategoryRecord;
use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl From<business_categories::Model> for CategoryRecord {
    fn from(model: business_categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            icon: model.icon,
        }
    }
}

/// Fields for a new category row.
#[derive(Debug, Clone)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub sort_order: i32,
    pub is_active: bool,
}

pub struct CategoryRepository {
    conn: DatabaseConnection,
}

impl CategoryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Categories ordered by `sort_order`, then name.
    pub async fn list(&self, active_only: bool) -> Result<Vec<CategoryRecord>> {
        let mut query = BusinessCategories::find();

        if active_only {
            query = query.filter(business_categories::Column::IsActive.eq(true));
        }

        let rows = query
            .order_by_asc(business_categories::Column::SortOrder)
            .order_by_asc(business_categories::Column::Name)
            .all(&self.conn)
            .await
            .context("Failed to list business categories")?;

        Ok(rows.into_iter().map(CategoryRecord::from).collect())
    }

    pub async fn insert(&self, category: &NewCategory<'_>) -> Result<i32> {
        let active_model = business_categories::ActiveModel {
            name: Set(category.name.to_string()),
            slug: Set(category.slug.to_string()),
            description: Set(category.description.map(ToString::to_string)),
            icon: Set(category.icon.map(ToString::to_string)),
            is_active: Set(category.is_active),
            sort_order: Set(category.sort_order),
            created_at: Set(crate::db::now_timestamp()),
            ..Default::default()
        };

        let result = BusinessCategories::insert(active_model)
            .exec(&self.conn)
            .await
            .with_context(|| format!("Failed to insert category '{}'", category.slug))?;

        Ok(result.last_insert_id)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(BusinessCategories::find().count(&self.conn).await?)
    }
}
