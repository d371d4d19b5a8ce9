use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "hanabi_relic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub quality: String,
    pub level: i32,
    pub awaken: i32,
    pub attack_boost: i32,
    pub hit_points_boost: i32,
    pub crit_boost: i32,
    pub assigned_to: Option<String>,
    pub image_path: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hanabi_user::Entity",
        from = "Column::UserId",
        to = "super::hanabi_user::Column::Id"
    )]
    HanabiUser,
}

impl Related<super::hanabi_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HanabiUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
