use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Username and password submitted by the login and brute-force forms
///
/// Both fields are free text. Missing fields become empty strings.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct CredentialsForm {
    #[serde(default)]
    #[schema(example = "admin")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "admin123")]
    pub password: String,
}
