use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub business_id: i32,
    pub rating: i32,
    pub title: String,
    pub body: String,
    pub recommend: bool,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business_profiles::Entity",
        from = "Column::BusinessId",
        to = "super::business_profiles::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BusinessProfiles,
}

impl Related<super::business_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
