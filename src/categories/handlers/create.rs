//! Create Category Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    categories::models::NewCategory, extensions::*, responses::DocumentInserted, state::State,
};

/// Create Category Handler
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    responses(
        (status_code = StatusCode::CREATED, description = "Category stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<NewCategory>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DocumentInserted>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = state.categories.create_category(json.into_inner()).await?;

    res.add_header(LOCATION, format!("/api/categories/{}", id.to_hex()), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(id.into()))
}
