//! Products
//!
//! Product documents hang off a free-text `category` field for the
//! storefront's category pages. Orders reference products by document id
//! and resolve title and price at read time.

mod handlers;
pub(crate) mod models;
mod repository;

pub(crate) use handlers::*;
pub(crate) use repository::*;
