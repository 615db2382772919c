use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::v1::posts::Model;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Post {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Welcome")]
    pub title: String,
    #[schema(example = "This is a vulnerable application for testing")]
    pub content: String,
}

impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
        }
    }
}
