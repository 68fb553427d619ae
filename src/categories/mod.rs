//! Categories
//!
//! Categories are plain documents keyed by their Mongo id. Products point
//! at them through a free-text `category` field, so renaming a category
//! does not rewrite the products under it.

mod handlers;
pub(crate) mod models;
mod repository;

pub(crate) use handlers::*;
pub(crate) use repository::*;
