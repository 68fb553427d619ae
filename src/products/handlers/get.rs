//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, products::models::ProductResponse, state::State};

/// Get Product Handler
///
/// An unknown id yields a 200 with a JSON null body, not a 404.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Option<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_object_id()?;

    let product = state.products.find_product(id).await?;

    Ok(Json(product.map(Into::into)))
}
