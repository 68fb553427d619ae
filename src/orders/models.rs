//! Order Models

use mongodb::bson::{self, oid::ObjectId};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use crate::{products::models::ProductSummary, users::models::UserResponse};

/// One line of an order as stored: a product reference and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineItem {
    pub prod_id: ObjectId,
    pub qty: i32,
}

/// Order document as stored in the `orders` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub products: Vec<LineItem>,
    pub total_amount: f64,
    pub order_date: bson::DateTime,
}

/// New Order Model
///
/// The order date is stamped by the repository at insert time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewOrder {
    pub user_id: String,
    pub products: Vec<LineItem>,
    pub total_amount: f64,
}

/// Sums unit price times quantity across the lines of an order.
pub(crate) fn order_total(lines: &[(f64, i32)]) -> f64 {
    lines
        .iter()
        .map(|(unit_price, qty)| unit_price * f64::from(*qty))
        .sum()
}

/// Wire form of a stored line item.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineItemResponse {
    /// Referenced product id as a hex string
    pub prod_id: String,
    pub qty: i32,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            prod_id: item.prod_id.to_hex(),
            qty: item.qty,
        }
    }
}

/// A line item with its product's title and price resolved at read time.
///
/// A dangling product reference keeps the quantity and simply drops the
/// product fields, matching what the storefront always rendered.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnrichedLineItem {
    /// Resolved product id as a hex string
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    pub qty: i32,
}

impl EnrichedLineItem {
    pub(crate) fn from_summary(summary: Option<ProductSummary>, qty: i32) -> Self {
        match summary {
            Some(summary) => Self {
                id: summary.id.map(|id| id.to_hex()),
                title: summary.title,
                price: summary.price,
                qty,
            },
            None => Self {
                id: None,
                title: None,
                price: None,
                qty,
            },
        }
    }
}

/// Wire representation of an order with its line items resolved.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// Document id as a hex string
    #[serde(rename = "_id")]
    pub id: String,

    /// External id of the purchasing user
    pub user_id: String,

    pub products: Vec<EnrichedLineItem>,
    pub total_amount: f64,

    /// RFC 3339 order timestamp
    pub order_date: String,
}

/// Wire representation of a single order read, with the purchasing user
/// embedded alongside the resolved line items.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderDetailResponse {
    /// Document id as a hex string
    #[serde(rename = "_id")]
    pub id: String,

    /// External id of the purchasing user
    pub user_id: String,

    /// Line items as stored
    pub products: Vec<LineItemResponse>,

    pub total_amount: f64,

    /// RFC 3339 order timestamp
    pub order_date: String,

    /// The purchasing user, null when the account has since been deleted
    pub user: Option<UserResponse>,

    /// Line items with product title and price resolved
    pub order_prod: Vec<EnrichedLineItem>,
}

pub(crate) fn format_order_date(date: bson::DateTime) -> String {
    date.try_to_rfc3339_string().unwrap_or_default()
}
