//! User Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, state::State, users::models::UserResponse};

/// User Index Handler
///
/// Returns every user as a bare JSON array.
#[endpoint(tags("users"), summary = "List Users")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<UserResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state.users.list_users().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
