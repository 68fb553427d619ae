//! Delete User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, responses::DocumentDeleted, state::State};

/// Delete User Handler
///
/// Deleting an unknown uid is not an error; the response carries
/// `deletedCount` 0.
#[endpoint(tags("users"), summary = "Delete User")]
pub(crate) async fn handler(
    uid: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DocumentDeleted>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let deleted = state.users.delete_user(&uid.into_inner()).await?;

    Ok(Json(deleted.into()))
}
