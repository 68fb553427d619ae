//! Orders By User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::{enrich_orders, models::OrderResponse},
    state::State,
};

/// Orders By User Handler
///
/// Order history for one user, line items resolved. A user with no
/// orders gets an empty array, whether or not the uid exists.
#[endpoint(tags("orders"), summary = "List Orders By User")]
pub(crate) async fn handler(
    uid: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state.orders.list_orders_by_user(&uid.into_inner()).await?;
    let orders = enrich_orders(orders, state.products.as_ref()).await?;

    Ok(Json(orders))
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{self, oid::ObjectId};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        orders::{
            MockOrdersRepository,
            models::{LineItem, Order},
        },
        products::{MockProductsRepository, models::ProductSummary},
        test_helpers::{order_flow_state, service, strict_products_mock, strict_users_mock},
    };

    use super::*;

    fn make_service(products: MockProductsRepository, orders: MockOrdersRepository) -> Service {
        service(
            order_flow_state(strict_users_mock(), products, orders),
            Router::with_path("api/orders/user/{uid}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_by_user_resolves_title_price_and_quantity() -> TestResult {
        let prod_a = ObjectId::new();
        let prod_b = ObjectId::new();

        let mut orders = MockOrdersRepository::new();

        orders
            .expect_list_orders_by_user()
            .once()
            .withf(|uid| uid == "abc123")
            .return_once(move |_| {
                Ok(vec![Order {
                    id: Some(ObjectId::new()),
                    user_id: "abc123".to_string(),
                    products: vec![
                        LineItem {
                            prod_id: prod_a,
                            qty: 2,
                        },
                        LineItem {
                            prod_id: prod_b,
                            qty: 1,
                        },
                    ],
                    total_amount: 159.98,
                    order_date: bson::DateTime::now(),
                }])
            });

        orders.expect_create_order().never();
        orders.expect_list_orders().never();
        orders.expect_find_order().never();
        orders.expect_delete_order().never();

        let mut products = MockProductsRepository::new();

        products
            .expect_find_product_summary()
            .times(2)
            .returning(move |id| {
                let (title, price) = if id == prod_a {
                    ("Lamp", 19.99)
                } else {
                    ("Desk", 120.0)
                };

                Ok(Some(ProductSummary {
                    id: Some(id),
                    title: Some(title.to_string()),
                    price: Some(price),
                }))
            });

        products.expect_create_product().never();
        products.expect_list_products().never();
        products.expect_list_products_by_category().never();
        products.expect_find_product().never();
        products.expect_upsert_product().never();
        products.expect_delete_product().never();

        let response: Vec<OrderResponse> =
            TestClient::get("http://example.com/api/orders/user/abc123")
                .send(&make_service(products, orders))
                .await
                .take_json()
                .await?;

        assert_eq!(response.len(), 1, "expected one order");

        let items = &response[0].products;

        assert_eq!(items.len(), 2, "expected both line items resolved");
        assert_eq!(items[0].title.as_deref(), Some("Lamp"));
        assert_eq!(items[0].price, Some(19.99));
        assert_eq!(items[0].qty, 2);
        assert_eq!(items[1].title.as_deref(), Some("Desk"));
        assert_eq!(items[1].price, Some(120.0));
        assert_eq!(items[1].qty, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_by_user_without_orders_returns_empty_array() -> TestResult {
        let mut orders = MockOrdersRepository::new();

        orders
            .expect_list_orders_by_user()
            .once()
            .withf(|uid| uid == "nobody")
            .return_once(|_| Ok(vec![]));

        orders.expect_create_order().never();
        orders.expect_list_orders().never();
        orders.expect_find_order().never();
        orders.expect_delete_order().never();

        let body = TestClient::get("http://example.com/api/orders/user/nobody")
            .send(&make_service(strict_products_mock(), orders))
            .await
            .take_string()
            .await?;

        assert_eq!(body, "[]");

        Ok(())
    }
}
