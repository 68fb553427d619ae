//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*, products::models::NewProduct, responses::DocumentInserted, state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<NewProduct>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DocumentInserted>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = state.products.create_product(json.into_inner()).await?;

    res.add_header(LOCATION, format!("/api/products/{}", id.to_hex()), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(id.into()))
}
