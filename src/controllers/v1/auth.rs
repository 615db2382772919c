use actix_web::web::{Data, Form, Html};
use actix_web::{Responder, Result};

use crate::database::Store;
use crate::requests::v1::auth::CredentialsForm;
use crate::responses::v1::auth::AuthResult;
use crate::{services, views};

/// Login form for the injectable endpoint
#[get("/login")]
pub async fn login_form() -> impl Responder {
    Html::new(views::LOGIN)
}

/// Log in with a query built by string concatenation
///
/// Always answers 200. Database errors, including ones triggered by the
/// submitted values, are returned in `message`.
#[utoipa::path(
    tag = "Auth",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login outcome or database error", body = AuthResult),
    )
)]
#[post("/login")]
pub async fn login(store: Data<Store>, Form(request): Form<CredentialsForm>) -> impl Responder {
    services::v1::auth::login::login(&store, request).await
}

/// Login form for the unthrottled endpoint
#[get("/brute-force")]
pub async fn brute_force_form() -> impl Responder {
    Html::new(views::BRUTE_FORCE)
}

/// Log in with a parameterized query and no attempt limiting
#[utoipa::path(
    tag = "Auth",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login outcome", body = AuthResult),
        (status = 500, description = "Database unavailable"),
    )
)]
#[post("/brute-force")]
pub async fn brute_force(
    store: Data<Store>,
    Form(request): Form<CredentialsForm>,
) -> Result<AuthResult> {
    let response = services::v1::auth::brute_force::brute_force(&store, request).await?;
    Ok(response)
}
