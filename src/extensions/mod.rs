//! Extension traits

mod depot;
mod object_id;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use object_id::ObjectIdParamExt as _;
pub(crate) use result::ResultExt as _;
