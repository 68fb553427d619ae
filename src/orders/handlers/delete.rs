//! Delete Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, responses::DocumentDeleted, state::State};

/// Delete Order Handler
#[endpoint(tags("orders"), summary = "Delete Order")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DocumentDeleted>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_object_id()?;

    let deleted = state.orders.delete_order(id).await?;

    Ok(Json(deleted.into()))
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        orders::MockOrdersRepository,
        responses::DocumentDeleted,
        test_helpers::{orders_service, strict_orders_mock},
    };

    use super::*;

    fn make_service(orders: MockOrdersRepository) -> Service {
        orders_service(orders, Router::with_path("api/orders/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_order_success() -> TestResult {
        let id = ObjectId::new();

        let mut orders = MockOrdersRepository::new();

        orders
            .expect_delete_order()
            .once()
            .withf(move |lookup| *lookup == id)
            .return_once(|_| Ok(1));

        orders.expect_create_order().never();
        orders.expect_list_orders().never();
        orders.expect_find_order().never();
        orders.expect_list_orders_by_user().never();

        let body: DocumentDeleted =
            TestClient::delete(format!("http://example.com/api/orders/{}", id.to_hex()))
                .send(&make_service(orders))
                .await
                .take_json()
                .await?;

        assert_eq!(body.deleted_count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_order_reports_zero() -> TestResult {
        let id = ObjectId::new();

        let mut orders = MockOrdersRepository::new();

        orders
            .expect_delete_order()
            .once()
            .withf(move |lookup| *lookup == id)
            .return_once(|_| Ok(0));

        orders.expect_create_order().never();
        orders.expect_list_orders().never();
        orders.expect_find_order().never();
        orders.expect_list_orders_by_user().never();

        let mut res = TestClient::delete(format!("http://example.com/api/orders/{}", id.to_hex()))
            .send(&make_service(orders))
            .await;

        let body: DocumentDeleted = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.deleted_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_order_bad_id_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/api/orders/123")
            .send(&make_service(strict_orders_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
