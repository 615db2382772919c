use sea_orm::prelude::*;

use crate::entities::v1::users::{Column, Entity, Model};

impl Model {
    /// Every user in store order
    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().all(db).await
    }

    /// Look a user up by exact username and password
    ///
    /// Values are sent as bound parameters, never spliced into the SQL text.
    pub async fn find_by_credentials(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .filter(Column::Password.eq(password))
            .one(db)
            .await
    }

}
