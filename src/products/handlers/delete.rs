//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, responses::DocumentDeleted, state::State};

/// Delete Product Handler
///
/// Orders holding a line item for the product keep their dangling
/// reference; their reads then render the item with quantity only.
#[endpoint(tags("products"), summary = "Delete Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DocumentDeleted>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_object_id()?;

    let deleted = state.products.delete_product(id).await?;

    Ok(Json(deleted.into()))
}
