use crate::entities::{prelude::*, reviews};
use crate::models::{NewReview, Recommend};
use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};

pub struct ReviewRepository {
    conn: DatabaseConnection,
}

impl ReviewRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, review: &NewReview) -> Result<i32> {
        let active_model = reviews::ActiveModel {
            business_id: Set(review.business_id),
            rating: Set(i32::from(review.rating)),
            title: Set(review.title.clone()),
            body: Set(review.body.clone()),
            recommend: Set(review.recommend == Recommend::Yes),
            created_at: Set(crate::db::now_timestamp()),
            ..Default::default()
        };

        let result = Reviews::insert(active_model)
            .exec(&self.conn)
            .await
            .with_context(|| format!("Failed to insert review for business {}", review.business_id))?;

        Ok(result.last_insert_id)
    }

    pub async fn count_for_business(&self, business_id: i32) -> Result<u64> {
        Ok(Reviews::find()
            .filter(reviews::Column::BusinessId.eq(business_id))
            .count(&self.conn)
            .await?)
    }
}
