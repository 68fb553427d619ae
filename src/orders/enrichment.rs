//! Order enrichment.
//!
//! Resolves each line item's product title and price concurrently, per
//! order and per item. Lookups go through the summary projection rather
//! than full product reads.

use futures::future::try_join_all;

use crate::{
    database::StoreError,
    orders::models::{EnrichedLineItem, Order, OrderResponse, format_order_date},
    products::ProductsRepository,
};

/// Resolves the line items of one order.
pub(crate) async fn enrich_line_items(
    order: &Order,
    products: &dyn ProductsRepository,
) -> Result<Vec<EnrichedLineItem>, StoreError> {
    let lookups = order.products.iter().map(|item| {
        let prod_id = item.prod_id;
        let qty = item.qty;

        async move {
            let summary = products.find_product_summary(prod_id).await?;

            Ok::<_, StoreError>(EnrichedLineItem::from_summary(summary, qty))
        }
    });

    try_join_all(lookups).await
}

/// Renders one order with its line items resolved.
pub(crate) async fn enrich_order(
    order: Order,
    products: &dyn ProductsRepository,
) -> Result<OrderResponse, StoreError> {
    let items = enrich_line_items(&order, products).await?;

    Ok(OrderResponse {
        id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
        user_id: order.user_id,
        products: items,
        total_amount: order.total_amount,
        order_date: format_order_date(order.order_date),
    })
}

/// Renders a batch of orders with their line items resolved.
pub(crate) async fn enrich_orders(
    orders: Vec<Order>,
    products: &dyn ProductsRepository,
) -> Result<Vec<OrderResponse>, StoreError> {
    try_join_all(
        orders
            .into_iter()
            .map(|order| enrich_order(order, products)),
    )
    .await
}
