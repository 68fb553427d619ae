//! Update Category Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    categories::models::CategoryUpdate, extensions::*, responses::DocumentUpdated, state::State,
};

/// Update Category Handler
///
/// Upserts by document id. Both fields are written on every update;
/// whichever the payload leaves out comes back null.
#[endpoint(
    tags("categories"),
    summary = "Update Category",
    responses(
        (status_code = StatusCode::OK, description = "Category replaced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<CategoryUpdate>,
    depot: &mut Depot,
) -> Result<Json<DocumentUpdated>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_object_id()?;

    let outcome = state
        .categories
        .upsert_category(id, json.into_inner())
        .await?;

    Ok(Json(outcome.into()))
}
