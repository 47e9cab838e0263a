use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub club_name: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub contact_email: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub instagram_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub hero_tagline: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
