//! Category Models

use mongodb::bson::oid::ObjectId;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Category document as stored in the `categories` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// New Category Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewCategory {
    pub title: String,
    pub thumbnail_url: Option<String>,
}

impl From<NewCategory> for Category {
    fn from(category: NewCategory) -> Self {
        Self {
            id: None,
            title: Some(category.title),
            thumbnail_url: category.thumbnail_url,
        }
    }
}

/// Category Update Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryUpdate {
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// Wire representation of a category.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryResponse {
    /// Document id as a hex string
    #[serde(rename = "_id")]
    pub id: String,

    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: category.title,
            thumbnail_url: category.thumbnail_url,
        }
    }
}
