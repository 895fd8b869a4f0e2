use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "business_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// One of `active`, `pending`, `suspended`
    pub status: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business_categories::Entity",
        from = "Column::CategoryId",
        to = "super::business_categories::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BusinessCategories,
}

impl Related<super::business_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
