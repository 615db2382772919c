use sea_orm::prelude::*;

use crate::entities::v1::posts::{Entity, Model};

impl Model {
    /// Every post in store order
    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().all(db).await
    }
}
