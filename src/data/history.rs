use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct HistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistoryRepository<'a> {
    /// Creates a new instance of [`HistoryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one battle log row for the given user
    pub async fn create(
        &self,
        user_id: i32,
        character_name: &str,
        opponent_name: &str,
        result: &str,
    ) -> Result<entity::hanabi_battle_history::Model, DbErr> {
        let history = entity::hanabi_battle_history::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_name: ActiveValue::Set(character_name.to_string()),
            opponent_name: ActiveValue::Set(opponent_name.to_string()),
            result: ActiveValue::Set(result.to_string()),
            fought_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        history.insert(self.db).await
    }

    /// Gets the user's most recent battles, newest first
    pub async fn get_recent(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::hanabi_battle_history::Model>, DbErr> {
        entity::prelude::HanabiBattleHistory::find()
            .filter(entity::hanabi_battle_history::Column::UserId.eq(user_id))
            .order_by_desc(entity::hanabi_battle_history::Column::FoughtAt)
            .order_by_desc(entity::hanabi_battle_history::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
