//! Register User Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{extensions::*, responses::DocumentInserted, state::State, users::models::NewUser};

/// Register User Handler
#[endpoint(
    tags("users"),
    summary = "Register User",
    responses(
        (status_code = StatusCode::CREATED, description = "User stored"),
        (status_code = StatusCode::CONFLICT, description = "User already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<NewUser>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DocumentInserted>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = json.into_inner();
    let uid = user.uid.clone();

    let id = state.users.create_user(user).await?;

    res.add_header(LOCATION, format!("/api/users/{uid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(id.into()))
}
