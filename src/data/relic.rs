use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

pub struct RelicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelicRepository<'a> {
    /// Creates a new instance of [`RelicRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unassigned level 1 relic for the given owner
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        quality: &str,
        attack_boost: i32,
        hit_points_boost: i32,
        crit_boost: i32,
        image_path: Option<&str>,
    ) -> Result<entity::hanabi_relic::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let relic = entity::hanabi_relic::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            quality: ActiveValue::Set(quality.to_string()),
            level: ActiveValue::Set(1),
            awaken: ActiveValue::Set(0),
            attack_boost: ActiveValue::Set(attack_boost),
            hit_points_boost: ActiveValue::Set(hit_points_boost),
            crit_boost: ActiveValue::Set(crit_boost),
            assigned_to: ActiveValue::Set(None),
            image_path: ActiveValue::Set(image_path.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        relic.insert(self.db).await
    }

    /// Gets every relic owned by the given user
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::hanabi_relic::Model>, DbErr> {
        entity::prelude::HanabiRelic::find()
            .filter(entity::hanabi_relic::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Gets the relic the given user has assigned to the named character, if
    /// any
    pub async fn find_assigned_to(
        &self,
        user_id: i32,
        character_name: &str,
    ) -> Result<Option<entity::hanabi_relic::Model>, DbErr> {
        entity::prelude::HanabiRelic::find()
            .filter(entity::hanabi_relic::Column::UserId.eq(user_id))
            .filter(entity::hanabi_relic::Column::AssignedTo.eq(character_name))
            .one(self.db)
            .await
    }

    /// Writes a mutated relic row back, refreshing `updated_at`
    pub async fn save(
        &self,
        relic: entity::hanabi_relic::Model,
    ) -> Result<entity::hanabi_relic::Model, DbErr> {
        let mut relic_am = relic.into_active_model().reset_all();
        relic_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        relic_am.update(self.db).await
    }

    /// Deletes a relic by row id
    ///
    /// Returns OK regardless of the row existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, relic_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::HanabiRelic::delete_by_id(relic_id)
            .exec(self.db)
            .await
    }
}
