use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "hanabi_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: i64,
    pub name: String,
    pub gold: i64,
    pub gems: i64,
    pub diamonds: i64,
    pub resonance_crystals: i64,
    pub level: i32,
    pub xp: i32,
    pub affection: i32,
    pub summon_count: i32,
    pub pity_counter: i32,
    pub last_trained_at: Option<DateTime>,
    pub last_bonded_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hanabi_battle_history::Entity")]
    HanabiBattleHistory,
    #[sea_orm(has_many = "super::hanabi_character::Entity")]
    HanabiCharacter,
    #[sea_orm(has_many = "super::hanabi_relic::Entity")]
    HanabiRelic,
}

impl Related<super::hanabi_battle_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HanabiBattleHistory.def()
    }
}

impl Related<super::hanabi_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HanabiCharacter.def()
    }
}

impl Related<super::hanabi_relic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HanabiRelic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
