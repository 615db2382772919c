use actix_web::web::{Data, Json};
use actix_web::{Responder, Result};

use crate::database::Store;
use crate::responses::v1::user::User;
use crate::services;

/// List all users
#[utoipa::path(
    tag = "User",
    responses(
        (status = 200, description = "All stored users", body = [User]),
        (status = 500, description = "Database unavailable"),
    )
)]
#[get("/api/users")]
pub async fn list(store: Data<Store>) -> Result<impl Responder> {
    let users = services::v1::user::list::list(&store).await?;
    Ok(Json(users))
}
