//! Update User Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    extensions::*, responses::DocumentUpdated, state::State, users::models::UserUpdate,
};

/// Update User Handler
///
/// Upserts by external id: an unknown uid creates the document instead of
/// failing. The response reports the driver counts either way.
#[endpoint(
    tags("users"),
    summary = "Update User",
    responses(
        (status_code = StatusCode::OK, description = "Profile replaced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uid: PathParam<String>,
    json: JsonBody<UserUpdate>,
    depot: &mut Depot,
) -> Result<Json<DocumentUpdated>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let outcome = state
        .users
        .upsert_user(&uid.into_inner(), json.into_inner())
        .await?;

    Ok(Json(outcome.into()))
}
