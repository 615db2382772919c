use utoipa::OpenApi;

use crate::{controllers, requests, responses};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vulnerable Application",
        description = "Intentionally insecure endpoints for security training. Do not deploy."
    ),
    tags(
        (name = "Auth"),
        (name = "User"),
        (name = "Post"),
        (name = "Health"),
    ),
    paths(
        controllers::v1::auth::login,
        controllers::v1::auth::brute_force,

        controllers::v1::user::list,
        controllers::v1::post::list,

        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        requests::v1::auth::CredentialsForm,
        requests::v1::search::SearchForm,

        responses::v1::auth::AuthResult,
        responses::v1::user::User,
        responses::v1::post::Post,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
