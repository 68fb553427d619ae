//! Buy Handler

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    orders::models::{LineItem, NewOrder, order_total},
    responses::DocumentInserted,
    state::State,
};

/// Purchase Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseRequest {
    /// External id of the purchasing user
    pub user_id: String,

    /// Product document id as a hex string
    pub product_id: String,

    pub quantity: i32,
}

/// Buy Handler
///
/// Records a purchase as a single-line order. The total is computed from
/// the product's current price at purchase time and never recomputed.
#[endpoint(
    tags("orders"),
    summary = "Buy Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Order recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "User or product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.buy",
    skip(json, depot, res),
    fields(
        user_id = tracing::field::Empty,
        product_id = tracing::field::Empty,
        quantity = tracing::field::Empty,
        total_amount = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<PurchaseRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DocumentInserted>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if request.quantity < 1 {
        return Err(StatusError::bad_request().brief("quantity must be at least 1"));
    }

    let product_id = ObjectId::parse_str(&request.product_id).or_400("invalid product id")?;

    let span = tracing::Span::current();

    span.record("user_id", tracing::field::display(&request.user_id));
    span.record("product_id", tracing::field::display(product_id));
    span.record("quantity", request.quantity);

    let user = state.users.find_user_by_uid(&request.user_id).await?;
    let product = state.products.find_product(product_id).await?;

    let (Some(_user), Some(product)) = (user, product) else {
        return Err(StatusError::not_found().brief("User or Product not found"));
    };

    let Some(price) = product.price else {
        return Err(StatusError::bad_request().brief("product has no price"));
    };

    let total_amount = order_total(&[(price, request.quantity)]);

    span.record("total_amount", total_amount);

    let id = state
        .orders
        .create_order(NewOrder {
            user_id: request.user_id,
            products: vec![LineItem {
                prod_id: product_id,
                qty: request.quantity,
            }],
            total_amount,
        })
        .await?;

    res.add_header(LOCATION, format!("/api/orders/{}", id.to_hex()), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(order_id = %id, "purchase recorded");

    Ok(Json(id.into()))
}
