use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "hanabi_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub element: String,
    pub potential: i32,
    pub level: i32,
    pub xp: i32,
    pub attack: i32,
    pub hit_points: i32,
    pub crit_chance: i32,
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
