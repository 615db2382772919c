use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct SearchForm {
    #[serde(default)]
    #[schema(example = "<script>alert(1)</script>")]
    pub query: String,
}
