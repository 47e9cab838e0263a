use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::modules::news::adapter::outgoing::sea_orm_entity::{self as news, Column, Entity};
use crate::modules::news::application::ports::outgoing::{
    CreateNewsData, NewsRecord, NewsRepository, NewsRepositoryError, UpdateNewsData,
};

#[derive(Clone)]
pub struct NewsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryPostgres {
    async fn list_news(&self) -> Result<Vec<NewsRecord>, NewsRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::PublishedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_record).collect())
    }

    async fn create_news(&self, data: CreateNewsData) -> Result<NewsRecord, NewsRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = news::ActiveModel {
            title: Set(data.title.trim().to_string()),
            body: Set(data.body),
            image_path: Set(data.image_path),
            published_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(result))
    }

    async fn update_news(&self, data: UpdateNewsData) -> Result<NewsRecord, NewsRepositoryError> {
        let current = Entity::find_by_id(data.id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(NewsRepositoryError::NotFound)?;

        let mut model: news::ActiveModel = current.into();
        model.title = Set(data.title.trim().to_string());
        model.body = Set(data.body);
        model.image_path = Set(data.image_path);
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(result))
    }

    async fn delete_news(&self, id: i32) -> Result<(), NewsRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(NewsRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_record(model: news::Model) -> NewsRecord {
    NewsRecord {
        id: model.id,
        title: model.title,
        body: model.body,
        image_path: model.image_path,
        published_at: model.published_at,
    }
}

fn map_db_err(e: DbErr) -> NewsRepositoryError {
    NewsRepositoryError::DatabaseError(e.to_string())
}
