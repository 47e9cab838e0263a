use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::modules::gallery::adapter::outgoing::sea_orm_entity::{galleries, images};
use crate::modules::gallery::application::ports::outgoing::{
    CreateGalleryData, GalleryRecord, GalleryRepository, GalleryRepositoryError, ImageRecord,
    UpdateGalleryData,
};

#[derive(Clone)]
pub struct GalleryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GalleryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_gallery(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
    ) -> Result<galleries::Model, GalleryRepositoryError> {
        galleries::Entity::find_by_id(id)
            .one(txn)
            .await
            .map_err(map_db_err)?
            .ok_or(GalleryRepositoryError::NotFound)
    }
}

#[async_trait]
impl GalleryRepository for GalleryRepositoryPostgres {
    async fn list_galleries(&self) -> Result<Vec<GalleryRecord>, GalleryRepositoryError> {
        let galleries = galleries::Entity::find()
            .order_by_asc(galleries::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if galleries.is_empty() {
            return Ok(Vec::new());
        }

        let image_ids: Vec<i32> = galleries.iter().map(|g| g.image_id).collect();
        let mut images_by_id: HashMap<i32, images::Model> = images::Entity::find()
            .filter(images::Column::Id.is_in(image_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|image| (image.id, image))
            .collect();

        galleries
            .into_iter()
            .map(|gallery| {
                let image = images_by_id.remove(&gallery.image_id).ok_or_else(|| {
                    GalleryRepositoryError::DatabaseError(format!(
                        "gallery {} is missing its image row",
                        gallery.id
                    ))
                })?;
                Ok(to_record(gallery, image))
            })
            .collect()
    }

    async fn create_gallery(
        &self,
        data: CreateGalleryData,
    ) -> Result<GalleryRecord, GalleryRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let now = Utc::now().fixed_offset();

        let image = images::ActiveModel {
            path: Set(data.image_path),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        let gallery = galleries::ActiveModel {
            name: Set(data.name),
            description: Set(data.description),
            image_id: Set(image.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(to_record(gallery, image))
    }

    async fn update_gallery(
        &self,
        data: UpdateGalleryData,
    ) -> Result<GalleryRecord, GalleryRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let current = self.find_gallery(&txn, data.id).await?;
        let image_id = current.image_id;

        let mut gallery_model: galleries::ActiveModel = current.into();
        gallery_model.name = Set(data.name);
        gallery_model.description = Set(data.description);
        gallery_model.updated_at = Set(Utc::now().fixed_offset());
        let gallery = gallery_model.update(&txn).await.map_err(map_db_err)?;

        // The path is rewritten unconditionally; an unchanged submit carries
        // the stored path back in.
        let image = images::Entity::find_by_id(image_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                GalleryRepositoryError::DatabaseError(format!(
                    "gallery {} is missing its image row",
                    gallery.id
                ))
            })?;

        let mut image_model: images::ActiveModel = image.into();
        image_model.path = Set(data.image_path);
        let image = image_model.update(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(to_record(gallery, image))
    }

    async fn delete_gallery(&self, id: i32) -> Result<(), GalleryRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let gallery = self.find_gallery(&txn, id).await?;
        let image_id = gallery.image_id;

        galleries::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        images::Entity::delete_by_id(image_id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

fn to_record(gallery: galleries::Model, image: images::Model) -> GalleryRecord {
    GalleryRecord {
        id: gallery.id,
        name: gallery.name,
        description: gallery.description,
        image: ImageRecord {
            id: image.id,
            path: image.path,
        },
    }
}

fn map_db_err(e: DbErr) -> GalleryRepositoryError {
    GalleryRepositoryError::DatabaseError(e.to_string())
}
