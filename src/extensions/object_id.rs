//! Document id path-parameter parsing helpers.

use mongodb::bson::oid::ObjectId;
use salvo::{oapi::extract::PathParam, prelude::StatusError};

use crate::extensions::*;

/// Parse a hex path segment into a document [`ObjectId`].
pub(crate) trait ObjectIdParamExt {
    /// Convert the raw path string, failing the request with a 400 on bad input.
    fn into_object_id(self) -> Result<ObjectId, StatusError>;
}

impl ObjectIdParamExt for PathParam<String> {
    fn into_object_id(self) -> Result<ObjectId, StatusError> {
        ObjectId::parse_str(self.into_inner()).or_400("invalid document id")
    }
}
