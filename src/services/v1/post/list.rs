use crate::database::Store;
use crate::entities::v1::posts::Model;
use crate::errors::Error;
use crate::responses::v1::post::Post;

#[::tracing::instrument(skip_all)]
pub async fn list(store: &Store) -> Result<Vec<Post>, Error> {
    let posts = store
        .execute(|db| Box::pin(async move { Model::all(db).await }))
        .await?;

    ::tracing::debug!(count = posts.len(), "Listed posts");

    Ok(posts.into_iter().map(Post::from).collect())
}
