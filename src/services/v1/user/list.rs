use crate::database::Store;
use crate::entities::v1::users::Model;
use crate::errors::Error;
use crate::responses::v1::user::User;

#[::tracing::instrument(skip_all)]
pub async fn list(store: &Store) -> Result<Vec<User>, Error> {
    let users = store
        .execute(|db| Box::pin(async move { Model::all(db).await }))
        .await?;

    ::tracing::debug!(count = users.len(), "Listed users");

    Ok(users.into_iter().map(User::from).collect())
}
