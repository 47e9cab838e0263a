use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};

use crate::modules::event::adapter::outgoing::sea_orm_entity::{self as events, Entity, Column};
use crate::modules::event::application::ports::outgoing::{
    CreateEventData, EventRecord, EventRepository, EventRepositoryError, UpdateEventData,
};

#[derive(Clone)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn list_events(&self) -> Result<Vec<EventRecord>, EventRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::StartsAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_record).collect())
    }

    async fn create_event(
        &self,
        data: CreateEventData,
    ) -> Result<EventRecord, EventRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = events::ActiveModel {
            name: Set(data.name.trim().to_string()),
            description: Set(data.description),
            starts_at: Set(data.starts_at),
            image_path: Set(data.image_path),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(result))
    }

    async fn update_event(
        &self,
        data: UpdateEventData,
    ) -> Result<EventRecord, EventRepositoryError> {
        let current = Entity::find_by_id(data.id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(EventRepositoryError::NotFound)?;

        let mut model: events::ActiveModel = current.into();
        model.name = Set(data.name.trim().to_string());
        model.description = Set(data.description);
        model.starts_at = Set(data.starts_at);
        model.image_path = Set(data.image_path);
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(result))
    }

    async fn delete_event(&self, id: i32) -> Result<(), EventRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EventRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_record(model: events::Model) -> EventRecord {
    EventRecord {
        id: model.id,
        name: model.name,
        description: model.description,
        starts_at: model.starts_at,
        image_path: model.image_path,
    }
}

fn map_db_err(e: DbErr) -> EventRepositoryError {
    EventRepositoryError::DatabaseError(e.to_string())
}
