//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{enrich_orders, models::OrderResponse},
    state::State,
};

/// Order Index Handler
///
/// Returns every order with its line items resolved, as a bare JSON array.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state.orders.list_orders().await?;
    let orders = enrich_orders(orders, state.products.as_ref()).await?;

    Ok(Json(orders))
}
