//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::{
        enrich_line_items,
        models::{OrderDetailResponse, format_order_date},
    },
    state::State,
};

/// Get Order Handler
///
/// Unlike the other collections, a missing order is a 404. The response
/// embeds the purchasing user and a resolved copy of the line items next
/// to the stored ones.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order with user and resolved items"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrderDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_object_id()?;

    let Some(order) = state.orders.find_order(id).await? else {
        return Err(StatusError::not_found().brief("Order not found"));
    };

    let user = state.users.find_user_by_uid(&order.user_id).await?;
    let order_prod = enrich_line_items(&order, state.products.as_ref()).await?;

    Ok(Json(OrderDetailResponse {
        id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
        user_id: order.user_id,
        products: order.products.into_iter().map(Into::into).collect(),
        total_amount: order.total_amount,
        order_date: format_order_date(order.order_date),
        user: user.map(Into::into),
        order_prod,
    }))
}
