//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{categories::models::CategoryResponse, extensions::*, state::State};

/// Category Index Handler
///
/// Returns every category as a bare JSON array.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state.categories.list_categories().await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        categories::MockCategoriesRepository,
        test_helpers::{categories_service, make_category},
    };

    use super::*;

    fn make_service(categories: MockCategoriesRepository) -> Service {
        categories_service(categories, Router::with_path("api/categories").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let mut categories = MockCategoriesRepository::new();

        categories
            .expect_list_categories()
            .once()
            .return_once(|| Ok(vec![make_category("Gadgets"), make_category("Books")]));

        categories.expect_create_category().never();
        categories.expect_find_category().never();
        categories.expect_upsert_category().never();
        categories.expect_delete_category().never();

        let response: Vec<CategoryResponse> = TestClient::get("http://example.com/api/categories")
            .send(&make_service(categories))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 2, "expected two categories");
        assert_eq!(response[0].title.as_deref(), Some("Gadgets"));
        assert_eq!(response[1].title.as_deref(), Some("Books"));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_array() -> TestResult {
        let mut categories = MockCategoriesRepository::new();

        categories
            .expect_list_categories()
            .once()
            .return_once(|| Ok(vec![]));

        categories.expect_create_category().never();
        categories.expect_find_category().never();
        categories.expect_upsert_category().never();
        categories.expect_delete_category().never();

        let body = TestClient::get("http://example.com/api/categories")
            .send(&make_service(categories))
            .await
            .take_string()
            .await?;

        assert_eq!(body, "[]");

        Ok(())
    }
}
