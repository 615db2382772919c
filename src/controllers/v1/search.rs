use actix_web::Responder;
use actix_web::web::{Form, Html};

use crate::requests::v1::search::SearchForm;
use crate::{services, views};

#[get("/search")]
pub async fn search_form() -> impl Responder {
    Html::new(views::SEARCH)
}

/// Echo the search term back inside the results page, unescaped
#[post("/search")]
pub async fn search(Form(request): Form<SearchForm>) -> impl Responder {
    Html::new(services::v1::search::results::results(request))
}
