use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a login attempt
///
/// Always sent with status 200, failures included.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct AuthResult {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Welcome admin!")]
    pub message: String,
}

impl AuthResult {
    pub fn success<T: Into<String>>(message: T) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure<T: Into<String>>(message: T) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::failure("Invalid credentials")
    }
}

impl Responder for AuthResult {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
