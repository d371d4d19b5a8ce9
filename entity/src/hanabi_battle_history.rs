use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "hanabi_battle_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub character_name: String,
    pub opponent_name: String,
    pub result: String,
    pub fought_at: DateTime,
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
