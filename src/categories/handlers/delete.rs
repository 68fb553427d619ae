//! Delete Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, responses::DocumentDeleted, state::State};

/// Delete Category Handler
///
/// Products keep their free-text `category` value when the category
/// document goes away.
#[endpoint(tags("categories"), summary = "Delete Category")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DocumentDeleted>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_object_id()?;

    let deleted = state.categories.delete_category(id).await?;

    Ok(Json(deleted.into()))
}
