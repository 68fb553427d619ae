//! Product Models

use mongodb::bson::oid::ObjectId;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Product document as stored in the `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub details: Option<String>,
    pub ratings: Option<f64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewProduct {
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub details: Option<String>,
    pub ratings: Option<f64>,
    /// Unit price; purchases multiply it by the requested quantity
    pub price: f64,
    pub category: Option<String>,
}

impl From<NewProduct> for Product {
    fn from(product: NewProduct) -> Self {
        Self {
            id: None,
            title: Some(product.title),
            thumbnail_url: product.thumbnail_url,
            details: product.details,
            ratings: product.ratings,
            price: Some(product.price),
            category: product.category,
        }
    }
}

/// Product Update Model
///
/// The field set is fixed; an update writes all six fields and clears the
/// ones the payload leaves out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductUpdate {
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub details: Option<String>,
    pub ratings: Option<f64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// Title and price of a product, as resolved for order line items.
///
/// Read through a projection so order reads never drag full product
/// documents across the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductSummary {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: Option<String>,
    pub price: Option<f64>,
}

/// Wire representation of a product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Document id as a hex string
    #[serde(rename = "_id")]
    pub id: String,

    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub details: Option<String>,
    pub ratings: Option<f64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: product.title,
            thumbnail_url: product.thumbnail_url,
            details: product.details,
            ratings: product.ratings,
            price: product.price,
            category: product.category,
        }
    }
}
