//! Startup sync of catalog character records into the template table.

use sea_orm::DatabaseConnection;

use crate::{catalog::CatalogStore, data::TemplateRepository, error::Error};

pub struct CatalogSyncService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a CatalogStore,
}

impl<'a> CatalogSyncService<'a> {
    /// Creates a new instance of [`CatalogSyncService`]
    pub fn new(db: &'a DatabaseConnection, catalog: &'a CatalogStore) -> Self {
        Self { db, catalog }
    }

    /// Upserts every catalog character record into the summonable template
    /// table: new records are inserted, existing ones have their element,
    /// potential, and image refreshed. Returns the number of records synced.
    pub async fn sync_templates(&self) -> Result<usize, Error> {
        let records = self.catalog.characters()?;
        let template_repository = TemplateRepository::new(self.db);

        for record in &records {
            template_repository
                .upsert(
                    &record.name,
                    record.element.as_str(),
                    record.potential,
                    record.image.as_deref(),
                )
                .await?;
        }

        tracing::info!(count = records.len(), "catalog templates synced");

        Ok(records.len())
    }
}
