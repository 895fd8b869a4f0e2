use crate::constants::complaint;
use crate::entities::{complaints, prelude::*};
use crate::models::ScamAlert;
use crate::models::business::join_location;
use anyhow::{Context, Result};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, Set,
    Statement,
};

const RECENT_SCAM_ALERTS_SQL: &str = "\
SELECT bp.name AS business_name, c.description, bp.city, bp.state, c.created_at \
FROM complaints c \
INNER JOIN business_profiles bp ON bp.id = c.business_id \
WHERE c.complaint_type = ? AND c.status = ? \
ORDER BY c.created_at DESC, c.id DESC \
LIMIT ?";

#[derive(Debug, FromQueryResult)]
struct ScamAlertRow {
    business_name: String,
    description: String,
    city: Option<String>,
    state: Option<String>,
    created_at: String,
}

impl From<ScamAlertRow> for ScamAlert {
    fn from(row: ScamAlertRow) -> Self {
        Self {
            location: join_location(row.city.as_deref(), row.state.as_deref()),
            business_name: row.business_name,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewComplaint<'a> {
    pub business_id: i32,
    pub complaint_type: &'a str,
    pub status: &'a str,
    pub description: &'a str,
    /// Defaults to now when absent.
    pub created_at: Option<String>,
}

pub struct ComplaintRepository {
    conn: DatabaseConnection,
}

impl ComplaintRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Active scam complaints joined with their business, newest first.
    pub async fn recent_scam_alerts(&self, limit: u64) -> Result<Vec<ScamAlert>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let statement = Statement::from_sql_and_values(
            self.conn.get_database_backend(),
            RECENT_SCAM_ALERTS_SQL,
            [
                complaint::TYPE_SCAM.into(),
                complaint::STATUS_ACTIVE.into(),
                limit.into(),
            ],
        );

        let rows = ScamAlertRow::find_by_statement(statement)
            .all(&self.conn)
            .await
            .context("Failed to query scam alerts")?;

        Ok(rows.into_iter().map(ScamAlert::from).collect())
    }

    pub async fn insert(&self, complaint: NewComplaint<'_>) -> Result<i32> {
        let active_model = complaints::ActiveModel {
            business_id: Set(complaint.business_id),
            complaint_type: Set(complaint.complaint_type.to_string()),
            status: Set(complaint.status.to_string()),
            description: Set(complaint.description.to_string()),
            created_at: Set(complaint
                .created_at
                .unwrap_or_else(crate::db::now_timestamp)),
            ..Default::default()
        };

        let result = Complaints::insert(active_model)
            .exec(&self.conn)
            .await
            .context("Failed to insert complaint")?;

        Ok(result.last_insert_id)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Complaints::find().count(&self.conn).await?)
    }
}
