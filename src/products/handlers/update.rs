//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    extensions::*, products::models::ProductUpdate, responses::DocumentUpdated, state::State,
};

/// Update Product Handler
///
/// Upserts by document id, replacing the whole catalogue field set.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product replaced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<ProductUpdate>,
    depot: &mut Depot,
) -> Result<Json<DocumentUpdated>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_object_id()?;

    let outcome = state.products.upsert_product(id, json.into_inner()).await?;

    Ok(Json(outcome.into()))
}
