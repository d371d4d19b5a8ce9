use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct TemplateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateRepository<'a> {
    /// Creates a new instance of [`TemplateRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every summonable template
    pub async fn all(&self) -> Result<Vec<entity::hanabi_character_template::Model>, DbErr> {
        entity::prelude::HanabiCharacterTemplate::find()
            .all(self.db)
            .await
    }

    /// Gets a template by its exact catalog name
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::hanabi_character_template::Model>, DbErr> {
        entity::prelude::HanabiCharacterTemplate::find()
            .filter(entity::hanabi_character_template::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Inserts a template or updates the stats of an existing one, keyed by
    /// name
    pub async fn upsert(
        &self,
        name: &str,
        element: &str,
        potential: i32,
        image_path: Option<&str>,
    ) -> Result<entity::hanabi_character_template::Model, DbErr> {
        let now = Utc::now().naive_utc();

        match self.find_by_name(name).await? {
            Some(existing) => {
                let mut template_am = existing.into_active_model();
                template_am.element = ActiveValue::Set(element.to_string());
                template_am.potential = ActiveValue::Set(potential);
                template_am.image_path = ActiveValue::Set(image_path.map(str::to_string));
                template_am.updated_at = ActiveValue::Set(now);

                template_am.update(self.db).await
            }
            None => {
                let template = entity::hanabi_character_template::ActiveModel {
                    name: ActiveValue::Set(name.to_string()),
                    element: ActiveValue::Set(element.to_string()),
                    potential: ActiveValue::Set(potential),
                    image_path: ActiveValue::Set(image_path.map(str::to_string)),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                template.insert(self.db).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hanabi_test_utils::prelude::*;

    use super::TemplateRepository;

    /// Expect upsert to insert a new template and update an existing one in
    /// place.
    #[tokio::test]
    async fn upsert_inserts_then_updates() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let repository = TemplateRepository::new(&setup.state.db);

        let inserted = repository.upsert("Ember", "Fire", 4500, None).await?;
        let updated = repository
            .upsert("Ember", "Fire", 4800, Some("ember.png"))
            .await?;

        assert_eq!(inserted.id, updated.id);
        assert_eq!(updated.potential, 4800);
        assert_eq!(updated.image_path.as_deref(), Some("ember.png"));
        assert_eq!(repository.all().await?.len(), 1);

        Ok(())
    }
}
