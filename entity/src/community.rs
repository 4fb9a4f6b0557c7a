use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "community")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub external_id: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon_url: Option<String>,
    pub invite_code: String,
    pub member_count: i32,
    pub owner_id: String,
    /// JSON encoded array of normalized tags.
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    pub is_active: bool,
    pub last_bump_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bump_event::Entity")]
    BumpEvent,
}

impl Related<super::bump_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BumpEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
