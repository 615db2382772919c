use actix_web::web::{Data, Json};
use actix_web::{Responder, Result};

use crate::database::Store;
use crate::responses::v1::post::Post;
use crate::services;

/// List all posts
#[utoipa::path(
    tag = "Post",
    responses(
        (status = 200, description = "All stored posts", body = [Post]),
        (status = 500, description = "Database unavailable"),
    )
)]
#[get("/api/posts")]
pub async fn list(store: Data<Store>) -> Result<impl Responder> {
    let posts = services::v1::post::list::list(&store).await?;
    Ok(Json(posts))
}
