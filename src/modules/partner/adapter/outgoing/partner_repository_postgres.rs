use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::modules::partner::adapter::outgoing::sea_orm_entity::{self as partners, Column, Entity};
use crate::modules::partner::application::ports::outgoing::{
    CreatePartnerData, PartnerRecord, PartnerRepository, PartnerRepositoryError, UpdatePartnerData,
};

#[derive(Clone)]
pub struct PartnerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PartnerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PartnerRepository for PartnerRepositoryPostgres {
    async fn list_partners(&self) -> Result<Vec<PartnerRecord>, PartnerRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_record).collect())
    }

    async fn create_partner(
        &self,
        data: CreatePartnerData,
    ) -> Result<PartnerRecord, PartnerRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = partners::ActiveModel {
            name: Set(data.name.trim().to_string()),
            url: Set(data.url),
            image_path: Set(data.image_path),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(result))
    }

    async fn update_partner(
        &self,
        data: UpdatePartnerData,
    ) -> Result<PartnerRecord, PartnerRepositoryError> {
        let current = Entity::find_by_id(data.id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PartnerRepositoryError::NotFound)?;

        let mut model: partners::ActiveModel = current.into();
        model.name = Set(data.name.trim().to_string());
        model.url = Set(data.url);
        model.image_path = Set(data.image_path);
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(result))
    }

    async fn delete_partner(&self, id: i32) -> Result<(), PartnerRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PartnerRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_record(model: partners::Model) -> PartnerRecord {
    PartnerRecord {
        id: model.id,
        name: model.name,
        url: model.url,
        image_path: model.image_path,
    }
}

fn map_db_err(e: DbErr) -> PartnerRepositoryError {
    PartnerRepositoryError::DatabaseError(e.to_string())
}
