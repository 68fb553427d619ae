//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, products::models::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns every product as a bare JSON array.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.products.list_products().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        products::MockProductsRepository,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(products: MockProductsRepository) -> Service {
        products_service(products, Router::with_path("api/products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_products() -> TestResult {
        let mut products = MockProductsRepository::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product("Lamp", 19.99), make_product("Desk", 120.0)]));

        products.expect_create_product().never();
        products.expect_list_products_by_category().never();
        products.expect_find_product().never();
        products.expect_find_product_summary().never();
        products.expect_upsert_product().never();
        products.expect_delete_product().never();

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/api/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 2, "expected two products");
        assert_eq!(response[0].title.as_deref(), Some("Lamp"));
        assert_eq!(response[1].price, Some(120.0));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_array() -> TestResult {
        let mut products = MockProductsRepository::new();

        products.expect_list_products().once().return_once(|| Ok(vec![]));

        products.expect_create_product().never();
        products.expect_list_products_by_category().never();
        products.expect_find_product().never();
        products.expect_find_product_summary().never();
        products.expect_upsert_product().never();
        products.expect_delete_product().never();

        let body = TestClient::get("http://example.com/api/products")
            .send(&make_service(products))
            .await
            .take_string()
            .await?;

        assert_eq!(body, "[]");

        Ok(())
    }
}
