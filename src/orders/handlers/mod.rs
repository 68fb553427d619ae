//! Order Handlers

pub(crate) mod by_user;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
