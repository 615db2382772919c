use actix_web::{Responder, web::Html};

use crate::views;

/// Landing page listing the targets and the sample credentials
#[route("/", method = "GET", method = "POST")]
pub async fn index() -> impl Responder {
    Html::new(views::INDEX)
}
