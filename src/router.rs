use actix_web::HttpResponse;
use actix_web::web::ServiceConfig;
use utoipa::OpenApi;

use crate::api::Definition;
use crate::controllers;

pub fn route(app: &mut ServiceConfig) {
    app.service(controllers::home::index);
    // Injection target
    app.service(controllers::v1::auth::login_form);
    app.service(controllers::v1::auth::login);
    // Reflection target
    app.service(controllers::v1::search::search_form);
    app.service(controllers::v1::search::search);
    // Unthrottled login
    app.service(controllers::v1::auth::brute_force_form);
    app.service(controllers::v1::auth::brute_force);
    // Listings
    app.service(controllers::v1::user::list);
    app.service(controllers::v1::post::list);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);

    app.service(openapi);
}

#[get("/api.json")]
pub async fn openapi() -> HttpResponse {
    HttpResponse::Ok().json(Definition::openapi())
}
