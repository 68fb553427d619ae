//! Orders Repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mockall::automock;
use mongodb::{
    Collection,
    bson::{self, doc, oid::ObjectId},
};

use crate::{
    database::StoreError,
    orders::models::{NewOrder, Order},
};

#[derive(Debug, Clone)]
pub(crate) struct MongoOrdersRepository {
    collection: Collection<Order>,
}

impl MongoOrdersRepository {
    #[must_use]
    pub(crate) fn new(collection: Collection<Order>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl OrdersRepository for MongoOrdersRepository {
    async fn create_order(&self, order: NewOrder) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();

        let document = Order {
            id: Some(id),
            user_id: order.user_id,
            products: order.products,
            total_amount: order.total_amount,
            order_date: bson::DateTime::now(),
        };

        self.collection.insert_one(&document).await?;

        Ok(id)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(orders)
    }

    async fn find_order(&self, id: ObjectId) -> Result<Option<Order>, StoreError> {
        let order = self.collection.find_one(doc! { "_id": id }).await?;

        Ok(order)
    }

    async fn list_orders_by_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
        let orders = self
            .collection
            .find(doc! { "userId": user_id })
            .await?
            .try_collect()
            .await?;

        Ok(orders)
    }

    async fn delete_order(&self, id: ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count)
    }
}

#[automock]
#[async_trait]
pub(crate) trait OrdersRepository: Send + Sync {
    /// Stores a new order, stamping the order date, and returns its
    /// document id.
    async fn create_order(&self, order: NewOrder) -> Result<ObjectId, StoreError>;

    /// Retrieves all orders.
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError>;

    /// Retrieves a single order by document id.
    async fn find_order(&self, id: ObjectId) -> Result<Option<Order>, StoreError>;

    /// Retrieves every order placed by the given user, by external id.
    async fn list_orders_by_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError>;

    /// Deletes an order by document id.
    async fn delete_order(&self, id: ObjectId) -> Result<u64, StoreError>;
}
