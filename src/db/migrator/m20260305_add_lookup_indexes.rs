use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        // Per-category counts filter on (category_id, status).
        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_business_profiles_category_status ON business_profiles(category_id, status)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_complaints_type_status_created ON complaints(complaint_type, status, created_at)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_reviews_business ON reviews(business_id)",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared("DROP INDEX IF EXISTS idx_reviews_business")
            .await?;
        conn.execute_unprepared("DROP INDEX IF EXISTS idx_complaints_type_status_created")
            .await?;
        conn.execute_unprepared("DROP INDEX IF EXISTS idx_business_profiles_category_status")
            .await?;

        Ok(())
    }
}
