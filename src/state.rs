//! State

use std::sync::Arc;

use mongodb::Database;

use crate::{
    categories::{CategoriesRepository, MongoCategoriesRepository},
    orders::{MongoOrdersRepository, OrdersRepository},
    products::{MongoProductsRepository, ProductsRepository},
    users::{MongoUsersRepository, UsersRepository},
};

/// Shared handler state carrying one repository per collection.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) users: Arc<dyn UsersRepository>,
    pub(crate) categories: Arc<dyn CategoriesRepository>,
    pub(crate) products: Arc<dyn ProductsRepository>,
    pub(crate) orders: Arc<dyn OrdersRepository>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        users: Arc<dyn UsersRepository>,
        categories: Arc<dyn CategoriesRepository>,
        products: Arc<dyn ProductsRepository>,
        orders: Arc<dyn OrdersRepository>,
    ) -> Self {
        Self {
            users,
            categories,
            products,
            orders,
        }
    }

    /// Wires every repository to its collection in the given database.
    #[must_use]
    pub(crate) fn from_database(database: &Database) -> Arc<Self> {
        Arc::new(Self::new(
            Arc::new(MongoUsersRepository::new(database.collection("users"))),
            Arc::new(MongoCategoriesRepository::new(
                database.collection("categories"),
            )),
            Arc::new(MongoProductsRepository::new(database.collection("products"))),
            Arc::new(MongoOrdersRepository::new(database.collection("orders"))),
        ))
    }
}
