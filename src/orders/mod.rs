//! Orders
//!
//! An order is written once at purchase time and never updated. Line items
//! hold only the product id and quantity; title and price are resolved
//! against the products collection on every read, so catalogue edits show
//! through and deleted products degrade to quantity-only items.

mod enrichment;
mod handlers;
pub(crate) mod models;
mod repository;

pub(crate) use enrichment::*;
pub(crate) use handlers::*;
pub(crate) use repository::*;
