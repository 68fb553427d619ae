//! Users
//!
//! Users are keyed by the external `uid` issued by the sign-in provider,
//! not by their document id. Every route under `/api/users` takes a uid.

mod handlers;
pub(crate) mod models;
mod repository;

pub(crate) use handlers::*;
pub(crate) use repository::*;
