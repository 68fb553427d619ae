//! Get Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{categories::models::CategoryResponse, extensions::*, state::State};

/// Get Category Handler
///
/// An unknown id yields a 200 with a JSON null body, not a 404.
#[endpoint(tags("categories"), summary = "Get Category")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Option<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_object_id()?;

    let category = state.categories.find_category(id).await?;

    Ok(Json(category.map(Into::into)))
}
