//! Products By Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, products::models::ProductResponse, state::State};

/// Products By Category Handler
///
/// Exact string match on the product's `category` field. The value is the
/// category title as the storefront stores it, not a category document id.
#[endpoint(tags("products"), summary = "List Products By Category")]
pub(crate) async fn handler(
    category: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .products
        .list_products_by_category(&category.into_inner())
        .await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
